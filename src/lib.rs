pub mod core;
pub mod models;
pub mod services;

pub use crate::core::errors::{Error, Result};
pub use crate::models::item::{Item, ItemKind};
pub use crate::models::report::ArchiveReport;
pub use crate::services::archive::{archive, ArchiveConfig, Archiver};
