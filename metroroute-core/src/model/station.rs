//! Metro station record

use serde::{Deserialize, Serialize};

/// Network vertex: a physical stop on a single line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    /// Unique identifier, e.g. `"K1"`
    pub id: String,
    /// Human-readable name, not unique across lines
    pub name: String,
    /// Line the station belongs to; never consulted by routing
    pub line: String,
}

impl Station {
    pub fn new(id: impl Into<String>, name: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            line: line.into(),
        }
    }
}
