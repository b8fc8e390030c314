use serde_json::Value;

use crate::prelude::{AppError, ClientFields, ContactRecord, FieldError};

/// Messages reported for each rejected field.
pub struct ValidationReq;

impl ValidationReq {
    pub fn name_req() -> &'static str {
        "Name is required"
    }

    pub fn surname_req() -> &'static str {
        "Surname is required"
    }

    pub fn contacts_req() -> &'static str {
        "All added contacts must be fully filled in"
    }
}

/// Turns any JSON value into trimmed text. Missing, null, zero, false and structured values become "".
pub fn coerce_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
        Some(Value::Bool(true)) => "true".to_string(),
        _ => String::new(),
    }
}

fn coerce_contacts(value: Option<&Value>) -> Vec<ContactRecord> {
    let Some(Value::Array(entries)) = value else {
        return Vec::new();
    };

    entries
        .iter()
        .map(|entry| ContactRecord {
            kind: coerce_text(entry.get("type")),
            value: coerce_text(entry.get("value")),
        })
        .collect()
}

/// Normalizes raw input and checks it as a complete client.
/// Every failing rule is reported, in the order name, surname, contacts.
pub fn validate(raw: &Value) -> Result<ClientFields, AppError> {
    let fields = ClientFields {
        name: coerce_text(raw.get("name")),
        surname: coerce_text(raw.get("surname")),
        last_name: coerce_text(raw.get("lastName")),
        contacts: coerce_contacts(raw.get("contacts")),
    };

    let mut errors = Vec::new();

    if fields.name.is_empty() {
        errors.push(FieldError::new("name", ValidationReq::name_req()));
    }

    if fields.surname.is_empty() {
        errors.push(FieldError::new("surname", ValidationReq::surname_req()));
    }

    if fields.contacts.iter().any(|c| !c.is_complete()) {
        errors.push(FieldError::new("contacts", ValidationReq::contacts_req()));
    }

    if errors.is_empty() {
        Ok(fields)
    } else {
        Err(AppError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn error_fields(result: Result<ClientFields, AppError>) -> Vec<String> {
        match result {
            Err(AppError::Validation(errors)) => errors.into_iter().map(|e| e.field).collect(),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn trims_every_field() -> Result<(), AppError> {
        let fields = validate(&json!({
            "name": "  Ivan ",
            "surname": "\tPetrov\n",
            "lastName": " Sergeevich ",
            "contacts": [{ "type": " email ", "value": " ivan@mail.ru " }]
        }))?;

        assert_eq!(fields.name, "Ivan");
        assert_eq!(fields.surname, "Petrov");
        assert_eq!(fields.last_name, "Sergeevich");
        assert_eq!(fields.contacts, vec![ContactRecord::new("email", "ivan@mail.ru")]);
        Ok(())
    }

    #[test]
    fn empty_name_only_reports_name() {
        let fields = error_fields(validate(&json!({ "name": "", "surname": "B" })));

        assert_eq!(fields, vec!["name"]);
    }

    #[test]
    fn collects_all_errors() {
        let fields = error_fields(validate(&json!({
            "name": "   ",
            "contacts": [{ "type": "phone" }]
        })));

        assert_eq!(fields, vec!["name", "surname", "contacts"]);
    }

    #[test]
    fn one_contacts_error_for_many_bad_contacts() {
        let fields = error_fields(validate(&json!({
            "name": "A",
            "surname": "B",
            "contacts": [{ "type": "phone" }, { "value": "x" }, "not a contact"]
        })));

        assert_eq!(fields, vec!["contacts"]);
    }

    #[test]
    fn non_array_contacts_are_ignored() -> Result<(), AppError> {
        let fields = validate(&json!({ "name": "A", "surname": "B", "contacts": "phone" }))?;

        assert!(fields.contacts.is_empty());
        Ok(())
    }

    #[test]
    fn duplicate_contacts_are_kept_in_order() -> Result<(), AppError> {
        let fields = validate(&json!({
            "name": "A",
            "surname": "B",
            "contacts": [
                { "type": "phone", "value": "1" },
                { "type": "phone", "value": "1" },
                { "type": "email", "value": "a@b.c" }
            ]
        }))?;

        assert_eq!(fields.contacts.len(), 3);
        assert_eq!(fields.contacts[2].kind, "email");
        Ok(())
    }

    #[test]
    fn coerces_scalars_to_text() {
        assert_eq!(coerce_text(Some(&json!(42))), "42");
        assert_eq!(coerce_text(Some(&json!(true))), "true");
        assert_eq!(coerce_text(Some(&json!(0))), "");
        assert_eq!(coerce_text(Some(&json!(0.0))), "");
        assert_eq!(coerce_text(Some(&json!(false))), "");
        assert_eq!(coerce_text(Some(&Value::Null)), "");
        assert_eq!(coerce_text(Some(&json!({ "a": 1 }))), "");
        assert_eq!(coerce_text(None), "");
    }

    #[test]
    fn falsy_scalars_fail_required_fields() {
        let fields = error_fields(validate(&json!({ "name": 0, "surname": false })));

        assert_eq!(fields, vec!["name", "surname"]);
    }

    #[test]
    fn non_object_input_fails_as_empty_client() {
        let fields = error_fields(validate(&json!([1, 2, 3])));

        assert_eq!(fields, vec!["name", "surname"]);
    }
}
