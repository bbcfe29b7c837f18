//! Snippet resolution tunables.

use serde::{Deserialize, Serialize};

/// Configuration for snippet window computation.
///
/// Meant to be embedded in the consuming application's configuration file;
/// every field has a default, so an empty table is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetConfig {
    /// Maximum lines per snippet window, ending at the anchor line.
    #[serde(default = "default_context_lines")]
    pub context_lines: usize,
}

fn default_context_lines() -> usize {
    5
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            context_lines: default_context_lines(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_window_is_five_lines() {
        assert_eq!(SnippetConfig::default().context_lines, 5);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: SnippetConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SnippetConfig::default());

        let config: SnippetConfig = serde_json::from_str(r#"{ "context_lines": 3 }"#).unwrap();
        assert_eq!(config.context_lines, 3);
    }
}
