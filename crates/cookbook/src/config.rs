//! Configuration for the Cookbook.

use cookbook_core::DEFAULT_MAX_DEPTH;
use serde::{Deserialize, Serialize};

/// Configuration for the Cookbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CookbookConfig {
    /// Maximum number of recipes nested along one resolution path.
    pub max_depth: usize,
}

impl Default for CookbookConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: CookbookConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CookbookConfig::default());

        let config: CookbookConfig = serde_json::from_str(r#"{ "maxDepth": 8 }"#).unwrap();
        assert_eq!(config.max_depth, 8);
    }
}
