//! Catalog lookups over the static estimation tables.
//!
//! Two helpers with deliberately different failure behaviour:
//! - [`lookup_or_default`] resolves unknown keys to a caller-supplied neutral value
//! - [`required_lookup`] fails with [`EstimateError::InvalidKey`]

use super::EstimateError;

/// A closed catalog of categorical keys accepted from wizard input.
pub trait CatalogKey: Copy + PartialEq + 'static {
    /// Human-readable catalog name used in error messages.
    const CATALOG: &'static str;

    /// Every member of the catalog, in display order.
    const ALL: &'static [Self];

    /// Wire representation of this key.
    fn key(self) -> &'static str;

    /// Parse a wire key. Matching is exact (case and whitespace sensitive).
    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.key() == key)
    }
}

/// Value lookup against a parsed key.
pub fn lookup<K: CatalogKey>(table: &[(K, f64)], key: K) -> Option<f64> {
    table
        .iter()
        .find(|(entry, _)| *entry == key)
        .map(|(_, value)| *value)
}

/// Look up a wire key, falling back to `default` when the key is unknown
/// or has no entry in `table`.
pub fn lookup_or_default<K: CatalogKey>(table: &[(K, f64)], key: &str, default: f64) -> f64 {
    K::from_key(key)
        .and_then(|k| lookup(table, k))
        .unwrap_or(default)
}

/// Look up a wire key that has no sane fallback.
pub fn required_lookup<K: CatalogKey>(table: &[(K, f64)], key: &str) -> Result<f64, EstimateError> {
    K::from_key(key)
        .and_then(|k| lookup(table, k))
        .ok_or_else(|| EstimateError::InvalidKey {
            catalog: K::CATALOG,
            key: key.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Shade {
        Light,
        Dark,
        Unpriced,
    }

    impl CatalogKey for Shade {
        const CATALOG: &'static str = "shade";
        const ALL: &'static [Self] = &[Self::Light, Self::Dark, Self::Unpriced];

        fn key(self) -> &'static str {
            match self {
                Self::Light => "light",
                Self::Dark => "dark",
                Self::Unpriced => "unpriced",
            }
        }
    }

    const PRICES: &[(Shade, f64)] = &[(Shade::Light, 1.5), (Shade::Dark, 2.0)];

    #[test]
    fn from_key_is_exact() {
        assert_eq!(Shade::from_key("dark"), Some(Shade::Dark));
        assert_eq!(Shade::from_key("Dark"), None);
        assert_eq!(Shade::from_key(" dark"), None);
    }

    #[test]
    fn lookup_or_default_falls_back() {
        assert_eq!(lookup_or_default(PRICES, "light", 9.0), 1.5);
        assert_eq!(lookup_or_default(PRICES, "bogus", 9.0), 9.0);
        // In the catalog but missing from the table
        assert_eq!(lookup_or_default(PRICES, "unpriced", 9.0), 9.0);
    }

    #[test]
    fn required_lookup_names_the_catalog() {
        assert_eq!(required_lookup(PRICES, "dark").unwrap(), 2.0);

        let err = required_lookup(PRICES, "bogus").unwrap_err();
        assert_eq!(
            err,
            EstimateError::InvalidKey {
                catalog: "shade",
                key: "bogus".to_string()
            }
        );
        assert_eq!(err.to_string(), "Invalid shade: bogus");
    }
}
