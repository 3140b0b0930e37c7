pub mod config;
pub mod error;
pub mod gif;

pub use config::Config;
pub use error::CatalogError;
pub use gif::{GifCollection, GifPatch, GifRecord, NewGif};
