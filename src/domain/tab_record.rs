use serde::{Deserialize, Serialize};

use super::TabLocator;

/// One generated tab. Derived deterministically from its index by a
/// [`TabFactory`](crate::application::ports::TabFactory) and never mutated
/// after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabRecord {
    pub index: u64,
    pub title: String,
    pub locator: TabLocator,
}

impl TabRecord {
    pub fn new(index: u64, title: String, locator: TabLocator) -> Self {
        Self {
            index,
            title,
            locator,
        }
    }
}
