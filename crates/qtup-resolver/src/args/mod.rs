//! Installer argument assembly.

use camino::Utf8Path;

use qtup_core::types::InstallRequest;

/// Ordered argument vector for an SDK install.
///
/// The installer is positional-argument-sensitive: host, target, version
/// first, then the arch token when the triple carries one that the
/// invocation invariant admits, then `-m` and the modules, the output
/// directory pair, and finally the verbatim extra arguments.
pub fn build_install_args(request: &InstallRequest, output_dir: &Utf8Path) -> Vec<String> {
    let triple = &request.triple;
    let mut args = vec![
        triple.host.as_str().to_string(),
        triple.target.clone(),
        request.version.clone(),
    ];

    if let Some(arch) = triple.arch_for_install() {
        args.push(arch.to_string());
    }

    if !request.modules.is_empty() {
        args.push("-m".to_string());
        args.extend(request.modules.iter().cloned());
    }

    args.push("--outputdir".to_string());
    args.push(output_dir.to_string());

    args.extend(request.extra_args.iter().cloned());

    args
}
