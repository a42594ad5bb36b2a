use std::collections::BTreeMap;
use std::fmt;

/// Parameter bag handed to a view when it is mounted.
///
/// Keys are kept sorted so rendering and logging are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Props(BTreeMap<String, String>);

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for Props {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value:?}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_props_builder_and_lookup() {
        let props = Props::new().with("groupId", "42");
        assert_eq!(props.get("groupId"), Some("42"));
        assert_eq!(props.get("missing"), None);
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn test_props_display_is_sorted() {
        let props = Props::new().with("b", "2").with("a", "1");
        assert_eq!(props.to_string(), r#"{a: "1", b: "2"}"#);
        assert_eq!(Props::new().to_string(), "{}");
    }
}
