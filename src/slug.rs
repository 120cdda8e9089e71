//! Item name normalization into the API's URL slug format

/// Turn a free-text item name into a warframe.market slug.
///
/// Trims, lowercases and replaces each space with an underscore. Nothing
/// else is validated; the API decides whether the slug exists.
pub fn normalize_item_name(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "_")
}

#[cfg(test)]
#[path = "slug_tests.rs"]
mod tests;
