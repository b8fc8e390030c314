use super::*;

use std::sync::Mutex;

/// Keeps the collection in process memory; nothing survives a restart.
pub struct MemStorage {
    pub medium: String,
    data: Mutex<Vec<ClientRecord>>,
}

impl MemStorage {
    pub fn new(clients: Vec<ClientRecord>) -> Self {
        Self {
            medium: "mem".to_string(),
            data: Mutex::new(clients),
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ClientStore for MemStorage {
    fn load(&self) -> Result<Vec<ClientRecord>, AppError> {
        Ok(self.data.lock()?.clone())
    }

    fn save(&self, clients: &[ClientRecord]) -> Result<(), AppError> {
        *self.data.lock()? = clients.to_vec();
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
