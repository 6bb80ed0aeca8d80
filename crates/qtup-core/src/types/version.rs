//! Version helpers for resolved SDK releases.
//!
//! The resolver only ever hands us exact dotted versions, but operator input
//! (config files, CLI flags) may abbreviate to "6.5" or even "6". Comparison
//! is always semantic (numeric per component), never lexicographic.

use semver::Version;

use crate::error::{QtupError, QtupResult};

/// Parse a dotted version, padding missing minor/patch components with zero
pub fn parse_version(input: &str) -> QtupResult<Version> {
    let trimmed = input.trim();
    let padded = match trimmed.matches('.').count() {
        0 => format!("{}.0.0", trimmed),
        1 => format!("{}.0", trimmed),
        _ => trimmed.to_string(),
    };

    Version::parse(&padded).map_err(|e| QtupError::Version {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

/// Directory name a release is unpacked under.
///
/// Equal to the version itself, except the 5.9.0 release which historically
/// shipped under "5.9".
pub fn version_dir(version: &str) -> &str {
    if version == "5.9.0" {
        "5.9"
    } else {
        version
    }
}

/// Whether a resolved version belongs to the major series 6 or later
pub fn is_major_6_or_later(version: &str) -> QtupResult<bool> {
    Ok(parse_version(version)?.major >= 6)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_version() {
        let v = parse_version("5.15.2").unwrap();
        assert_eq!((v.major, v.minor, v.patch), (5, 15, 2));
    }

    #[test]
    fn test_parse_pads_missing_components() {
        assert_eq!(parse_version("6.5").unwrap(), Version::new(6, 5, 0));
        assert_eq!(parse_version("6").unwrap(), Version::new(6, 0, 0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_version("latest").is_err());
        assert!(parse_version("").is_err());
    }

    #[test]
    fn test_comparison_is_numeric_not_lexicographic() {
        // "5.9.0" > "5.15.0" lexicographically; semantically it must not be
        assert!(parse_version("5.9.0").unwrap() < parse_version("5.15.0").unwrap());
    }

    #[test]
    fn test_version_dir_exception() {
        assert_eq!(version_dir("5.9.0"), "5.9");
        assert_eq!(version_dir("5.9.1"), "5.9.1");
        assert_eq!(version_dir("6.2.0"), "6.2.0");
    }

    #[test]
    fn test_major_branch() {
        assert!(!is_major_6_or_later("5.15.2").unwrap());
        assert!(is_major_6_or_later("6.0.0").unwrap());
        assert!(is_major_6_or_later("6.2.0").unwrap());
    }
}
