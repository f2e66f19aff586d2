mod settings;

pub use settings::{GeneratorSettings, ServerSettings, Settings, StorageSettings};
