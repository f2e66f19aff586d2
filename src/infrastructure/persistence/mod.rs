mod in_memory_tab_store;
mod json_file_tab_store;

pub use in_memory_tab_store::InMemoryTabStore;
pub use json_file_tab_store::JsonFileTabStore;
