use std::collections::HashMap;

/// Multi-valued query-string map, as produced by URL query parsing.
///
/// Lookups return the first value for a key, so `?type=a&type=b` reads as `a`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryValues {
    values: HashMap<String, Vec<String>>,
}

impl QueryValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value for `key`, keeping earlier values first.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.entry(key.into()).or_default().push(value.into());
    }

    /// First value recorded for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .and_then(|vals| vals.first())
            .map(String::as_str)
    }

    /// Every value recorded for `key`, in insertion order.
    #[must_use]
    pub fn get_all(&self, key: &str) -> &[String] {
        self.values.get(key).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (key, value) in iter {
            out.append(key, value);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_value_wins_on_get() {
        let q: QueryValues = [("type", "Residential"), ("type", "Commercial")]
            .into_iter()
            .collect();
        assert_eq!(q.get("type"), Some("Residential"));
        assert_eq!(q.get_all("type"), ["Residential", "Commercial"]);
        assert_eq!(q.get("missing"), None);
        assert!(q.get_all("missing").is_empty());
    }
}
