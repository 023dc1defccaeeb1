use serde::{Deserialize, Serialize};

/// One row of an aggregation: a group name and how many records fell into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountEntry {
    pub name: String,
    pub value: usize,
}

impl CountEntry {
    pub fn new(name: impl Into<String>, value: usize) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
