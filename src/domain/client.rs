use super::*;
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub id: String,
    pub name: String,
    pub surname: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub contacts: Vec<ContactRecord>,

    #[serde(
        serialize_with = "serialize_timestamp",
        deserialize_with = "deserialize_timestamp"
    )]
    pub created_at: DateTime<Utc>,

    #[serde(
        serialize_with = "serialize_timestamp",
        deserialize_with = "deserialize_timestamp"
    )]
    pub updated_at: DateTime<Utc>,
}

/// Normalized, validated user-editable part of a client record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientFields {
    pub name: String,
    pub surname: String,
    pub last_name: String,
    pub contacts: Vec<ContactRecord>,
}

impl ContactRecord {
    pub fn new(kind: &str, value: &str) -> Self {
        ContactRecord {
            kind: kind.to_string(),
            value: value.to_string(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.kind.is_empty() && !self.value.is_empty()
    }
}

impl ClientRecord {
    pub fn new(id: String, fields: ClientFields) -> Self {
        let now = now_millis();
        ClientRecord {
            id,
            name: fields.name,
            surname: fields.surname,
            last_name: fields.last_name,
            contacts: fields.contacts,
            created_at: now,
            updated_at: now,
        }
    }

    /// Editable fields as a JSON object, the base that update patches are laid over.
    pub fn fields_as_value(&self) -> Value {
        json!({
            "name": self.name,
            "surname": self.surname,
            "lastName": self.last_name,
            "contacts": self.contacts,
        })
    }

    /// Replaces the editable fields and refreshes `updated_at`. `id` and `created_at` stay.
    pub fn apply(&mut self, fields: ClientFields) {
        self.name = fields.name;
        self.surname = fields.surname;
        self.last_name = fields.last_name;
        self.contacts = fields.contacts;
        self.updated_at = now_millis();
    }
}

/// Current time at the precision timestamps are stored with.
pub fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

fn serialize_timestamp<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(serde::de::Error::custom)
}
