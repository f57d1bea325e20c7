use tracing::warn;

fn parse(search: &str) -> Vec<(String, String)> {
    let search = search.strip_prefix('?').unwrap_or(search);
    serde_urlencoded::from_str::<Vec<(String, String)>>(search).unwrap_or_else(|e| {
        warn!("Ignoring malformed query string '{}': {}", search, e);
        Vec::new()
    })
}

// Spaces are written as %20 rather than `+`; a literal `+` is already %2B.
fn render(pathname: &str, params: &[(String, String)]) -> String {
    let query = serde_urlencoded::to_string(params)
        .unwrap_or_default()
        .replace('+', "%20");
    format!("{}?{}", pathname, query)
}

/// Set `key` to `value` in the query string and build the resulting URL.
///
/// An existing key keeps its position; every other occurrence of it is dropped.
pub fn form_url_query(pathname: &str, search: &str, key: &str, value: &str) -> String {
    let mut params = parse(search);
    match params.iter().position(|(k, _)| k == key) {
        Some(index) => {
            params[index].1 = value.to_string();
            let mut seen = false;
            params.retain(|(k, _)| {
                if k != key {
                    return true;
                }
                let keep = !seen;
                seen = true;
                keep
            });
        }
        None => params.push((key.to_string(), value.to_string())),
    }
    render(pathname, &params)
}

/// Remove every occurrence of `keys_to_remove` from the query string
pub fn remove_keys_from_query(pathname: &str, search: &str, keys_to_remove: &[&str]) -> String {
    let mut params = parse(search);
    params.retain(|(k, _)| !keys_to_remove.contains(&k.as_str()));
    render(pathname, &params)
}
