/// Insertion-ordered header map.
///
/// HTTP header names are kept verbatim (no case folding) and iteration
/// yields headers in the order they were first inserted. On a duplicate
/// name, `insert` keeps the first value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts a header if no header with this exact name exists yet.
    /// Returns `false` when the name was already present (first wins).
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.entries.push((name, value.into()));
        true
    }

    /// Sets a header, overwriting the existing value or appending.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_insert_wins_on_duplicate() {
        let mut headers = Headers::new();
        assert!(headers.insert("Host", "a"));
        assert!(!headers.insert("Host", "b"));
        assert_eq!(headers.get("Host"), Some("a"));
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn set_overwrites() {
        let mut headers = Headers::new();
        headers.insert("Content-Length", "7");
        headers.set("Content-Length", "12");
        assert_eq!(headers.get("Content-Length"), Some("12"));
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let mut headers = Headers::new();
        headers.insert("B", "2");
        headers.insert("A", "1");
        headers.insert("C", "3");
        let names: Vec<&str> = headers.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let mut headers = Headers::new();
        headers.insert("Content-Type", "text/html");
        assert_eq!(headers.get("content-type"), None);
    }
}
