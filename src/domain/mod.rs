pub mod client;
pub mod manager;
pub mod search;

use crate::errors::AppError;
use serde_json::{Value, json};
