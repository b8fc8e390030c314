use std::collections::HashMap;

/// Decodes `key=value&key2=value2`. A key without `=value` maps to "".
pub fn query_params(query: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

pub fn search_param(query: Option<&str>) -> Option<String> {
    query_params(query?).remove("search")
}
