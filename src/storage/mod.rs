pub mod memory;
pub mod stores;

use crate::prelude::{AppError, ClientRecord};
use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;

/// Whole-collection persistence. Every call reads or rewrites the full list.
pub trait ClientStore: Send {
    fn load(&self) -> Result<Vec<ClientRecord>, AppError>;

    fn save(&self, clients: &[ClientRecord]) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StorageMediums {
    Json,
    Mem,
}

impl StorageMediums {
    pub fn is_json(&self) -> bool {
        matches!(self, StorageMediums::Json)
    }
}

pub fn parse_storage_type(
    medium: StorageMediums,
    path: &str,
) -> Result<Box<dyn ClientStore>, AppError> {
    match medium {
        StorageMediums::Json => {
            let storage = stores::JsonStorage::new(path);
            storage.ensure_initialized()?;
            Ok(Box::new(storage))
        }
        StorageMediums::Mem => Ok(Box::new(memory::MemStorage::default())),
    }
}

pub fn create_file_parent(path: &str) -> Result<(), AppError> {
    let path = Path::new(path);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
