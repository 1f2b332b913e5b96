// src/outlet.rs
use crate::config::consts::OUTLET_NAMES;

/// Human label for an outlet key. Unknown keys show up uppercased.
pub fn display_name(key: &str) -> String {
    OUTLET_NAMES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, name)| s!(*name))
        .unwrap_or_else(|| key.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_keys() {
        assert_eq!(display_name("hani"), "한겨레");
        assert_eq!(display_name("chosun"), "조선일보");
        assert_eq!(display_name("nyt"), "NYT");
        assert_eq!(display_name(""), "");
    }
}
