//! Resource identifiers for textures requested by widgets

use std::fmt;
use std::str::FromStr;

/// Namespace used when a location string has no `namespace:` prefix
pub const DEFAULT_NAMESPACE: &str = "gui";

/// Host resource identifier in `namespace:path` form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceLocation {
    namespace: String,
    path: String,
}

/// Error returned when a resource location string is malformed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid resource location '{0}'")]
pub struct ParseResourceLocationError(pub String);

impl ResourceLocation {
    /// Create a location from its parts
    pub fn new(namespace: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            path: path.into(),
        }
    }

    /// Namespace part
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Path part
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for ResourceLocation {
    type Err = ParseResourceLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace, path) = match s.split_once(':') {
            Some((namespace, path)) => (namespace, path),
            None => (DEFAULT_NAMESPACE, s),
        };

        if namespace.is_empty() || path.is_empty() || path.contains(':') {
            return Err(ParseResourceLocationError(s.to_string()));
        }

        Ok(Self::new(namespace, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_namespace() {
        let location: ResourceLocation = "inventory:textures/slot.png".parse().unwrap();
        assert_eq!(location.namespace(), "inventory");
        assert_eq!(location.path(), "textures/slot.png");
        assert_eq!(location.to_string(), "inventory:textures/slot.png");
    }

    #[test]
    fn test_parse_defaults_namespace() {
        let location: ResourceLocation = "textures/button.png".parse().unwrap();
        assert_eq!(location.namespace(), DEFAULT_NAMESPACE);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("".parse::<ResourceLocation>().is_err());
        assert!(":path".parse::<ResourceLocation>().is_err());
        assert!("ns:".parse::<ResourceLocation>().is_err());
        assert!("a:b:c".parse::<ResourceLocation>().is_err());
    }
}
