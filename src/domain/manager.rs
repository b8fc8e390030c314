use super::*;

use crate::domain::client::{ClientFields, ClientRecord};
use crate::domain::search::filter_clients;
use crate::storage::ClientStore;
use crate::validation::validate;
use uuid::Uuid;

/// Client CRUD over a whole-collection store.
///
/// Every operation loads the full collection first and, when it mutates,
/// writes the full collection back before returning. Callers that share a
/// manager between requests must serialize access to keep those
/// load-modify-save cycles from interleaving.
pub struct ClientManager {
    pub storage: Box<dyn ClientStore>,
}

impl ClientManager {
    pub fn new(storage: Box<dyn ClientStore>) -> Self {
        Self { storage }
    }

    pub fn list(&self, search: Option<&str>) -> Result<Vec<ClientRecord>, AppError> {
        let clients = self.storage.load()?;
        Ok(filter_clients(clients, search))
    }

    pub fn create(&self, raw: &Value) -> Result<ClientRecord, AppError> {
        let fields: ClientFields = validate(raw)?;

        let mut clients = self.storage.load()?;
        let client = ClientRecord::new(next_id(&clients), fields);
        clients.push(client.clone());
        self.storage.save(&clients)?;

        tracing::info!(id = %client.id, "client created");
        Ok(client)
    }

    pub fn get(&self, id: &str) -> Result<ClientRecord, AppError> {
        self.storage
            .load()?
            .into_iter()
            .find(|c| c.id == id)
            .ok_or_else(client_not_found)
    }

    /// Lays `patch` over the stored fields and re-validates the result as a whole client.
    /// A `contacts` key in the patch replaces the whole contact list.
    pub fn update(&self, id: &str, patch: &Value) -> Result<ClientRecord, AppError> {
        let mut clients = self.storage.load()?;
        let client = clients
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(client_not_found)?;

        let mut merged = client.fields_as_value();
        if let (Some(base), Some(changes)) = (merged.as_object_mut(), patch.as_object()) {
            for (key, value) in changes {
                base.insert(key.clone(), value.clone());
            }
        }

        client.apply(validate(&merged)?);
        let updated = client.clone();
        self.storage.save(&clients)?;

        tracing::info!(id = %updated.id, "client updated");
        Ok(updated)
    }

    pub fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut clients = self.storage.load()?;
        let index = clients
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(client_not_found)?;

        clients.remove(index);
        self.storage.save(&clients)?;

        tracing::info!(id, "client deleted");
        Ok(())
    }
}

pub fn client_not_found() -> AppError {
    AppError::NotFound("Client".to_string())
}

/// Time-ordered id that is not already taken in `clients`.
fn next_id(clients: &[ClientRecord]) -> String {
    loop {
        let id = Uuid::now_v7().to_string();
        if !clients.iter().any(|c| c.id == id) {
            break id;
        }
    }
}
