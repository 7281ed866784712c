use custdash_bridge::user::Address;

/// Letter shown in a customer's avatar: the uppercased first character of the
/// name, or `?` for a blank name.
pub fn avatar_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_owned())
}

/// Absolute URL for a website as the data source stores it (a bare host name
/// such as `hildegard.org`).
pub fn website_url(website: &str) -> String {
    let website = website.trim();
    if website.starts_with("http://") || website.starts_with("https://") {
        website.to_owned()
    } else {
        format!("https://{website}")
    }
}

fn join_non_empty(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Two display lines for an address: `suite, street` and `city, zipcode`.
/// Empty parts are skipped.
pub fn address_lines(address: &Address) -> [String; 2] {
    [
        join_non_empty(&[address.suite.as_str(), address.street.as_str()]),
        join_non_empty(&[address.city.as_str(), address.zipcode.as_str()]),
    ]
}
