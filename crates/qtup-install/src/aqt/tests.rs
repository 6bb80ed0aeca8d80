#![cfg(unix)]
//! Unit tests for the aqt runner, driven against stub installer scripts.

use std::os::unix::fs::PermissionsExt;

use camino::{Utf8Path, Utf8PathBuf};

use super::*;

/// Write an executable stub script and return its path
fn write_stub(dir: &Utf8Path, name: &str, script: &str) -> Utf8PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, script).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

fn temp_dir() -> (tempfile::TempDir, Utf8PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap();
    (dir, path)
}

#[tokio::test]
async fn test_run_capture_trims_stdout() {
    let (_guard, dir) = temp_dir();
    let stub = write_stub(&dir, "aqt", "#!/bin/sh\necho '  6.5.3  '\n");

    let runner = AqtRunner::with_program(stub);
    let answer = runner.run_capture(&["list-qt".to_string()]).await.unwrap();
    assert_eq!(answer, "6.5.3");
}

#[tokio::test]
async fn test_install_qt_prepends_subcommand() {
    let (_guard, dir) = temp_dir();
    let log = dir.join("calls.log");
    let script = format!("#!/bin/sh\necho \"$@\" >> {}\n", log);
    let stub = write_stub(&dir, "aqt", &script);

    let runner = AqtRunner::with_program(stub);
    let args: Vec<String> = ["linux", "desktop", "6.5.3"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    runner.install_qt(&args).await.unwrap();

    let calls = std::fs::read_to_string(&log).unwrap();
    assert_eq!(calls.trim(), "install-qt linux desktop 6.5.3");
}

#[tokio::test]
async fn test_install_tool_argument_order() {
    let (_guard, dir) = temp_dir();
    let log = dir.join("calls.log");
    let script = format!("#!/bin/sh\necho \"$@\" >> {}\n", log);
    let stub = write_stub(&dir, "aqt", &script);

    let runner = AqtRunner::with_program(stub);
    let tool: ToolSpec = "tools_ifw,qt.tools.ifw.46".parse().unwrap();
    let output_dir = Utf8Path::new("/opt/qt");
    runner
        .install_tool(HostOs::Linux, "desktop", &tool, output_dir)
        .await
        .unwrap();

    let calls = std::fs::read_to_string(&log).unwrap();
    assert_eq!(
        calls.trim(),
        "install-tool linux desktop tools_ifw qt.tools.ifw.46 --outputdir /opt/qt"
    );
}

#[tokio::test]
async fn test_install_tool_without_variant() {
    let (_guard, dir) = temp_dir();
    let log = dir.join("calls.log");
    let script = format!("#!/bin/sh\necho \"$@\" >> {}\n", log);
    let stub = write_stub(&dir, "aqt", &script);

    let runner = AqtRunner::with_program(stub);
    let tool: ToolSpec = "tools_cmake".parse().unwrap();
    runner
        .install_tool(HostOs::Mac, "desktop", &tool, Utf8Path::new("/opt/qt"))
        .await
        .unwrap();

    let calls = std::fs::read_to_string(&log).unwrap();
    assert_eq!(
        calls.trim(),
        "install-tool mac desktop tools_cmake --outputdir /opt/qt"
    );
}

#[tokio::test]
async fn test_install_tools_collects_failures_and_keeps_going() {
    let (_guard, dir) = temp_dir();
    let log = dir.join("calls.log");
    let script = format!(
        "#!/bin/sh\necho \"$@\" >> {}\ncase \"$*\" in *tools_bad*) exit 3;; esac\nexit 0\n",
        log
    );
    let stub = write_stub(&dir, "aqt", &script);

    let runner = AqtRunner::with_program(stub);
    let tools = vec![
        "tools_cmake".parse::<ToolSpec>().unwrap(),
        "tools_bad".parse::<ToolSpec>().unwrap(),
        "tools_ninja".parse::<ToolSpec>().unwrap(),
    ];
    let result = runner
        .install_tools(HostOs::Linux, "desktop", &tools, Utf8Path::new("/opt/qt"))
        .await;

    match result {
        Err(QtupError::ToolsFailed { failed }) => {
            assert_eq!(failed, vec!["tools_bad".to_string()]);
        },
        other => panic!("Expected ToolsFailed, got {:?}", other),
    }

    // Every tool was attempted: the failure did not abort the sequence
    let calls = std::fs::read_to_string(&log).unwrap();
    assert_eq!(calls.lines().count(), 3);
    assert!(calls.lines().last().unwrap().contains("tools_ninja"));
}

#[tokio::test]
async fn test_install_tools_empty_list_is_ok() {
    let runner = AqtRunner::with_program("/nonexistent/aqt");
    let result = runner
        .install_tools(HostOs::Linux, "desktop", &[], Utf8Path::new("/opt/qt"))
        .await;
    assert!(result.is_ok());
}
