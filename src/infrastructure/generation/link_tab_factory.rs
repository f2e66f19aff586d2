use crate::application::ports::TabFactory;
use crate::domain::{TabLocator, TabRecord};

/// Derives `Tab {index}` records pointing at `{base_url}tab{index}`.
pub struct LinkTabFactory {
    base_url: String,
}

impl LinkTabFactory {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for LinkTabFactory {
    fn default() -> Self {
        Self::new("https://example.com/")
    }
}

impl TabFactory for LinkTabFactory {
    fn produce(&self, index: u64) -> TabRecord {
        let title = format!("Tab {}", index);
        let locator = TabLocator::from_raw(format!("{}tab{}", self.base_url, index));
        TabRecord::new(index, title, locator)
    }
}
