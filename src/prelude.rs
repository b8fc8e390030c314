pub use crate::api::{AppState, URI_PREFIX, router};
pub use crate::cli::{command, run_app};
pub use crate::domain::{
    client::{self, ClientFields, ClientRecord, ContactRecord},
    manager::ClientManager,
    search::filter_clients,
};
pub use crate::errors::{AppError, FieldError};
pub use crate::storage::{
    self, ClientStore, StorageMediums, memory::MemStorage, parse_storage_type,
    stores::JsonStorage,
};
pub use crate::validation::validate;
