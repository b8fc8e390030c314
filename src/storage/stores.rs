use super::*;

use std::path::PathBuf;

pub struct JsonStorage {
    pub medium: String,
    pub path: String,
}

impl JsonStorage {
    pub fn new(path: &str) -> Self {
        Self {
            medium: "json".to_string(),
            path: path.to_string(),
        }
    }

    /// Creates the storage file holding an empty array if it does not exist yet.
    pub fn ensure_initialized(&self) -> Result<(), AppError> {
        if fs::exists(Path::new(&self.path))? {
            return Ok(());
        }
        create_file_parent(&self.path)?;
        fs::write(&self.path, "[]")?;
        tracing::info!(path = %self.path, "created empty client storage");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut tmp = PathBuf::from(&self.path).into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

impl ClientStore for JsonStorage {
    fn load(&self) -> Result<Vec<ClientRecord>, AppError> {
        if !fs::exists(Path::new(&self.path))? {
            return Ok(Vec::new());
        }
        let mut file = OpenOptions::new().read(true).open(&self.path)?;

        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, clients: &[ClientRecord]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let json_clients = serde_json::to_string(clients)?;

        // Write next to the target and swap it in, readers see either the old or the new list
        let tmp = self.temp_path();
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&tmp)?;
        file.write_all(json_clients.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp, &self.path)?;

        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
