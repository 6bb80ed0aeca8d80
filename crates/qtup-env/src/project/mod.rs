//! Pure computation of environment mutations.
//!
//! Each rule is independently conditional on the host, the version major,
//! or whether tools were requested. The only ordering that matters is the
//! PATH prepend for `<sdk>/bin`, which is emitted last so appliers can keep
//! it in front of everything a job saw before.

use camino::Utf8Path;

use qtup_core::types::version::is_major_6_or_later;
use qtup_core::types::{EnvMutation, HostOs};

use crate::EnvResult;

/// Compute the full mutation list for an installed SDK
pub fn compute_mutations(
    install_root: &Utf8Path,
    sdk_path: &Utf8Path,
    version: &str,
    host: HostOs,
    tools_requested: bool,
) -> EnvResult<Vec<EnvMutation>> {
    let mut mutations = Vec::new();

    if tools_requested {
        mutations.push(EnvMutation::set("IQTA_TOOLS", install_root.join("Tools")));
    }

    if host == HostOs::Linux {
        mutations.push(EnvMutation::append_colon(
            "LD_LIBRARY_PATH",
            sdk_path.join("lib"),
        ));
    }

    if host != HostOs::Windows {
        mutations.push(EnvMutation::append_colon(
            "PKG_CONFIG_PATH",
            sdk_path.join("lib/pkgconfig"),
        ));
    }

    if is_major_6_or_later(version)? {
        mutations.push(EnvMutation::set("Qt6_DIR", sdk_path.as_str()));
    } else {
        // The miscased name shipped first; consumers that never migrated
        // still read it
        mutations.push(EnvMutation::set("Qt5_Dir", sdk_path.as_str()));
        mutations.push(EnvMutation::set("Qt5_DIR", sdk_path.as_str()));
    }

    mutations.push(EnvMutation::set("QT_PLUGIN_PATH", sdk_path.join("plugins")));
    mutations.push(EnvMutation::set("QML2_IMPORT_PATH", sdk_path.join("qml")));
    mutations.push(EnvMutation::prepend_path(sdk_path.join("bin")));

    Ok(mutations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qtup_core::types::EnvOp;

    fn mutations(version: &str, host: HostOs, tools: bool) -> Vec<EnvMutation> {
        compute_mutations(
            Utf8Path::new("/opt/qt"),
            Utf8Path::new("/opt/qt/5.15.2/gcc_64"),
            version,
            host,
            tools,
        )
        .unwrap()
    }

    fn names(mutations: &[EnvMutation]) -> Vec<&str> {
        mutations.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn test_qt5_emits_both_casings_and_no_qt6() {
        let mutations = mutations("5.15.2", HostOs::Linux, false);
        let names = names(&mutations);
        assert!(names.contains(&"Qt5_Dir"));
        assert!(names.contains(&"Qt5_DIR"));
        assert!(!names.contains(&"Qt6_DIR"));
    }

    #[test]
    fn test_qt6_emits_only_major_6_name() {
        let mutations = mutations("6.2.0", HostOs::Linux, false);
        let names = names(&mutations);
        assert!(names.contains(&"Qt6_DIR"));
        assert!(!names.contains(&"Qt5_Dir"));
        assert!(!names.contains(&"Qt5_DIR"));
    }

    #[test]
    fn test_linux_appends_library_path() {
        let mutations = mutations("5.15.2", HostOs::Linux, false);
        let lib = mutations
            .iter()
            .find(|m| m.name == "LD_LIBRARY_PATH")
            .unwrap();
        assert_eq!(lib.op, EnvOp::AppendColon);
        assert_eq!(lib.value, "/opt/qt/5.15.2/gcc_64/lib");
    }

    #[test]
    fn test_mac_gets_pkg_config_but_not_library_path() {
        let names_mac = names(&mutations("5.15.2", HostOs::Mac, false))
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>();
        assert!(names_mac.contains(&"PKG_CONFIG_PATH".to_string()));
        assert!(!names_mac.contains(&"LD_LIBRARY_PATH".to_string()));
    }

    #[test]
    fn test_windows_gets_neither_search_path() {
        let mutations = mutations("5.15.2", HostOs::Windows, false);
        let names = names(&mutations);
        assert!(!names.contains(&"PKG_CONFIG_PATH"));
        assert!(!names.contains(&"LD_LIBRARY_PATH"));
    }

    #[test]
    fn test_tools_root_only_when_requested() {
        assert!(!names(&mutations("5.15.2", HostOs::Linux, false)).contains(&"IQTA_TOOLS"));

        let with_tools = mutations("5.15.2", HostOs::Linux, true);
        let tools = with_tools.iter().find(|m| m.name == "IQTA_TOOLS").unwrap();
        assert_eq!(tools.op, EnvOp::Set);
        assert_eq!(tools.value, "/opt/qt/Tools");
    }

    #[test]
    fn test_plugin_and_qml_paths_always_present() {
        for host in [HostOs::Linux, HostOs::Mac, HostOs::Windows] {
            let mutations = mutations("6.2.0", host, false);
            let names = names(&mutations);
            assert!(names.contains(&"QT_PLUGIN_PATH"));
            assert!(names.contains(&"QML2_IMPORT_PATH"));
        }
    }

    #[test]
    fn test_bin_prepend_is_last() {
        let mutations = mutations("6.2.0", HostOs::Linux, true);
        let last = mutations.last().unwrap();
        assert_eq!(last.op, EnvOp::PrependPath);
        assert_eq!(last.value, "/opt/qt/5.15.2/gcc_64/bin");
    }

    #[test]
    fn test_unparseable_version_emits_nothing() {
        let result = compute_mutations(
            Utf8Path::new("/opt/qt"),
            Utf8Path::new("/opt/qt/x/y"),
            "not-a-version",
            HostOs::Linux,
            false,
        );
        assert!(result.is_err());
    }
}
