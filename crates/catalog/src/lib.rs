pub mod index;
pub mod object_id;
pub mod seed;
pub mod service;
pub mod store;
pub mod validate;


pub use index::CatalogIndex;
pub use service::CatalogService;
pub use store::{ConflictField, MemoryStore, RecordStore};
