//! Default architecture selection.
//!
//! Applied only when the user supplied no architecture. The policy is a
//! table keyed on host and resolved version; hosts other than windows and
//! android get no default at all, and the installer is invoked without an
//! arch token for them.

use semver::Version;

use qtup_core::types::version::parse_version;
use qtup_core::types::HostOs;

use crate::ResolverResult;

/// Default architecture for a host and resolved version.
///
/// Evaluated in table order, first match wins:
///
/// | host    | version    | arch              |
/// |---------|------------|-------------------|
/// | windows | >= 5.15.0  | win64_msvc2019_64 |
/// | windows | < 5.6.0    | win64_msvc2013_64 |
/// | windows | < 5.9.0    | win64_msvc2015_64 |
/// | windows | otherwise  | win64_msvc2017_64 |
/// | android | any        | android_armv7     |
/// | other   | any        | none              |
pub fn default_arch(host: HostOs, version: &str) -> ResolverResult<Option<String>> {
    let arch = match host {
        HostOs::Windows => Some(windows_toolchain(&parse_version(version)?)),
        HostOs::Android => Some("android_armv7"),
        _ => None,
    };

    Ok(arch.map(str::to_string))
}

/// The MSVC toolchain shipped for a given windows release line.
///
/// The >= 5.15.0 check comes first; the ranges below it are mutually
/// exclusive, so the order cannot change the outcome, but this is how the
/// policy is documented and tested.
fn windows_toolchain(version: &Version) -> &'static str {
    if *version >= Version::new(5, 15, 0) {
        "win64_msvc2019_64"
    } else if *version < Version::new(5, 6, 0) {
        "win64_msvc2013_64"
    } else if *version < Version::new(5, 9, 0) {
        "win64_msvc2015_64"
    } else {
        "win64_msvc2017_64"
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        // Every version at or above 5.15.0 selects the 2019 toolchain,
        // not just the boundary
        #[test]
        fn windows_msvc2019_from_5_15_onwards(
            major in 5u64..10,
            minor in 0u64..30,
            patch in 0u64..20
        ) {
            let version = Version::new(major, minor, patch);
            prop_assume!(version >= Version::new(5, 15, 0));

            let arch = default_arch(HostOs::Windows, &version.to_string()).unwrap();
            prop_assert_eq!(arch.as_deref(), Some("win64_msvc2019_64"));
        }

        // Below 5.15.0 the 2019 toolchain is never selected
        #[test]
        fn windows_pre_5_15_never_msvc2019(
            minor in 0u64..15,
            patch in 0u64..20
        ) {
            let version = Version::new(5, minor, patch);
            prop_assume!(version < Version::new(5, 15, 0));

            let arch = default_arch(HostOs::Windows, &version.to_string()).unwrap();
            prop_assert_ne!(arch.as_deref(), Some("win64_msvc2019_64"));
        }
    }
}
