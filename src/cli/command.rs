use clap::Parser;

use crate::storage::StorageMediums;

#[derive(Parser, Debug)]
#[command(name = "rusty-crm", version, about = "Client records REST service")]
pub struct Cli {
    /// Address to listen on
    #[arg(long, env = "HOST", default_value_t = String::from("0.0.0.0"))]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Path of the JSON file holding the client list
    #[arg(long, env = "DB_FILE", default_value_t = String::from("./db.json"))]
    pub db_file: String,

    /// Storage choice (json, mem) are available
    #[arg(long, env = "STORAGE_CHOICE", value_enum, default_value_t = StorageMediums::Json)]
    pub storage_choice: StorageMediums,

    /// Log level used when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, env = "LOG_LEVEL", default_value_t = String::from("info"))]
    pub log_level: String,
}

impl Cli {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "rusty-crm",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--db-file",
            "/tmp/clients.json",
            "--storage-choice",
            "mem",
        ])
        .unwrap();

        assert_eq!(cli.port, 8080);
        assert_eq!(cli.db_file, "/tmp/clients.json");
        assert_eq!(cli.storage_choice, StorageMediums::Mem);
        assert_eq!(cli.listen_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn rejects_unknown_storage_choice() {
        assert!(Cli::try_parse_from(["rusty-crm", "--storage-choice", "txt"]).is_err());
    }
}
