use crate::prelude::ClientRecord;

/// Normalizes a raw search term. Blank terms mean "no filter".
pub fn normalize_search_term(term: Option<&str>) -> Option<String> {
    term.map(|t| t.trim().to_lowercase()).filter(|t| !t.is_empty())
}

/// Case-insensitive substring match over name, surname, last name and contact values.
/// `needle` must already be normalized with [`normalize_search_term`].
pub fn client_matches(client: &ClientRecord, needle: &str) -> bool {
    [&client.name, &client.surname, &client.last_name]
        .into_iter()
        .chain(client.contacts.iter().map(|c| &c.value))
        .any(|field| field.to_lowercase().contains(needle))
}

pub fn filter_clients(clients: Vec<ClientRecord>, term: Option<&str>) -> Vec<ClientRecord> {
    match normalize_search_term(term) {
        Some(needle) => clients
            .into_iter()
            .filter(|c| client_matches(c, &needle))
            .collect(),
        None => clients,
    }
}
