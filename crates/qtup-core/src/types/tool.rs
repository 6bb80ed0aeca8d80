//! Tool specifications parsed from `name[,variant]` tokens.

use std::fmt;
use std::str::FromStr;

use crate::error::{QtupError, QtupResult};

/// A single tool to install alongside (or instead of) the SDK itself.
///
/// Tokens are comma-delimited: the tool name comes first, the variant is the
/// last element when more than one is present. Multiple tools are
/// space-delimited at the outer level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSpec {
    /// Tool name understood by the installer (e.g. "tools_cmake")
    pub name: String,
    /// Variant within the tool, when one was given
    pub variant: Option<String>,
}

impl ToolSpec {
    /// Parse a space-delimited list of tool tokens
    pub fn parse_list(input: &str) -> QtupResult<Vec<ToolSpec>> {
        input.split_whitespace().map(str::parse).collect()
    }
}

impl FromStr for ToolSpec {
    type Err = QtupError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let elements: Vec<&str> = token.split(',').collect();
        let name = elements[0].trim();
        if name.is_empty() {
            return Err(QtupError::ConfigValidation {
                field: "tools".to_string(),
                reason: format!("Tool token '{}' has no name", token),
            });
        }

        let variant = if elements.len() > 1 {
            // name,version,variant forms keep only the trailing element
            let last = elements[elements.len() - 1].trim();
            if last.is_empty() {
                None
            } else {
                Some(last.to_string())
            }
        } else {
            None
        };

        Ok(ToolSpec {
            name: name.to_string(),
            variant,
        })
    }
}

impl fmt::Display for ToolSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.variant {
            Some(variant) => write!(f, "{},{}", self.name, variant),
            None => f.write_str(&self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_only() {
        let tool: ToolSpec = "wintools".parse().unwrap();
        assert_eq!(tool.name, "wintools");
        assert_eq!(tool.variant, None);
    }

    #[test]
    fn test_name_and_variant() {
        let tool: ToolSpec = "wintools,gcc_64".parse().unwrap();
        assert_eq!(tool.name, "wintools");
        assert_eq!(tool.variant.as_deref(), Some("gcc_64"));
    }

    #[test]
    fn test_three_elements_keep_first_and_last() {
        let tool: ToolSpec = "tools_ifw,4.6,qt.tools.ifw.46".parse().unwrap();
        assert_eq!(tool.name, "tools_ifw");
        assert_eq!(tool.variant.as_deref(), Some("qt.tools.ifw.46"));
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(",variant".parse::<ToolSpec>().is_err());
    }

    #[test]
    fn test_parse_list_space_delimited() {
        let tools = ToolSpec::parse_list("tools_cmake tools_ifw,qt.tools.ifw.46").unwrap();
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0].name, "tools_cmake");
        assert_eq!(tools[1].variant.as_deref(), Some("qt.tools.ifw.46"));
    }

    #[test]
    fn test_parse_list_empty_input() {
        assert!(ToolSpec::parse_list("").unwrap().is_empty());
        assert!(ToolSpec::parse_list("   ").unwrap().is_empty());
    }

    #[test]
    fn test_display_round_trip() {
        for token in ["wintools", "wintools,gcc_64"] {
            let tool: ToolSpec = token.parse().unwrap();
            assert_eq!(tool.to_string(), token);
        }
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        // Any rendered ToolSpec must parse back to itself
        #[test]
        fn tool_spec_round_trip(
            name in "[a-z][a-z0-9_]{0,20}",
            variant in prop::option::of("[a-z][a-z0-9_.]{0,20}")
        ) {
            let original = ToolSpec { name, variant };
            let parsed: ToolSpec = original.to_string().parse().unwrap();
            prop_assert_eq!(parsed, original);
        }
    }
}
