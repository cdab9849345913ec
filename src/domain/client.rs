// Client reference records
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub industry: String,
}

impl Client {
    pub fn new(id: impl Into<String>, name: impl Into<String>, industry: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            industry: industry.into(),
        }
    }
}
