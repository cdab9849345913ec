// Navigation tab domain models
use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbolic reference into the host's icon catalog (e.g. `"Search"`).
/// The core stores and forwards it; only the host knows how to draw it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(String);

impl IconRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    pub label: String,
    pub description: String,
    pub icon: IconRef,
}

impl Tab {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
        icon: IconRef,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: description.into(),
            icon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_serializes_as_plain_name() {
        let tab = Tab::new("dealPipeline", "Deal Pipeline", "Track", IconRef::new("FileText"));
        let json = serde_json::to_value(&tab).unwrap();
        assert_eq!(json["icon"], "FileText");
        assert_eq!(tab.icon.name(), "FileText");
    }
}
