// Auxiliary reference data shipped alongside a customization
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Permitted shapes for an auxiliary value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuxValue {
    Number(f64),
    Text(String),
    List(Vec<String>),
}

/// Open, keyed extension point for data the sample views consume
/// (investment stages, themes, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuxiliaryData {
    entries: BTreeMap<String, AuxValue>,
}

impl AuxiliaryData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: AuxValue) -> Self {
        self.entries.insert(key.into(), value);
        self
    }

    pub fn with_list<I, S>(self, key: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = items.into_iter().map(Into::into).collect();
        self.with(key, AuxValue::List(items))
    }

    pub fn get(&self, key: &str) -> Option<&AuxValue> {
        self.entries.get(key)
    }

    pub fn list(&self, key: &str) -> Option<&[String]> {
        match self.entries.get(key) {
            Some(AuxValue::List(items)) => Some(items),
            _ => None,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_lookup_ignores_other_shapes() {
        let data = AuxiliaryData::new()
            .with_list("investmentThemes", ["Energy Transition", "Circular Economy"])
            .with("fundSize", AuxValue::Number(250.0));

        assert_eq!(data.list("investmentThemes").map(|l| l.len()), Some(2));
        assert_eq!(data.list("fundSize"), None);
        assert_eq!(data.list("missing"), None);
        assert_eq!(data.keys().collect::<Vec<_>>(), vec!["fundSize", "investmentThemes"]);
    }

    #[test]
    fn test_untagged_shapes() {
        let data: AuxiliaryData =
            serde_json::from_str(r#"{"stages": ["Proposal"], "label": "x", "n": 3}"#).unwrap();
        assert_eq!(data.get("label"), Some(&AuxValue::Text("x".to_string())));
        assert_eq!(data.get("n"), Some(&AuxValue::Number(3.0)));
        assert_eq!(data.list("stages"), Some(&["Proposal".to_string()][..]));
    }
}
