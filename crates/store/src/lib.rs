pub mod collection;
pub mod relations;
pub mod seed;
pub mod service;
pub mod store_init;

pub use collection::Collection;
pub use service::RecordStore;
pub use store_init::initialize_store;
