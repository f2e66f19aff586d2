mod store_error;
mod tab_factory;
mod tab_store;

pub use store_error::StoreError;
pub use tab_factory::TabFactory;
pub use tab_store::TabStore;
