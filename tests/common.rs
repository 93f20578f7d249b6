use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// A roadpath command isolated from the user's config and environment
pub fn roadpath(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("roadpath");
    cmd.env("ROADPATH_CONFIG_DIR", config_dir)
        .env_remove("ROADPATH_NETWORK")
        .env_remove("ROADPATH_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Four cities on the equator one degree apart (111 km per hop), a far
/// northern shortcut X, and an isolated city Z.
///
/// A-B-C-D is cheap but three hops; A-X-D is two hops but long.
#[allow(dead_code)]
pub const LINE_NETWORK: &str = r#"
[[cities]]
id = "A"
lat = 0.0
lon = 0.0

[[cities]]
id = "B"
lat = 0.0
lon = 1.0

[[cities]]
id = "C"
lat = 0.0
lon = 2.0

[[cities]]
id = "D"
lat = 0.0
lon = 3.0

[[cities]]
id = "X"
lat = 10.0
lon = 1.5

[[cities]]
id = "Z"
lat = -5.0
lon = 1.5

[[roads]]
from = "A"
to = "B"

[[roads]]
from = "B"
to = "C"

[[roads]]
from = "C"
to = "D"

[[roads]]
from = "A"
to = "X"

[[roads]]
from = "X"
to = "D"
"#;

#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}
