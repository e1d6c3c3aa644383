//! Test utilities for cargokit-hvigor-lib.
//!
//! Builds a throwaway plugin install with a fake build tool launcher, so tests
//! can exercise the real spawn path without the cargokit build tool.

use std::path::{Path, PathBuf};

/// A plugin install laid out the way the hvigor package ships it:
/// `cargokit/hvigor/src/plugin` with `run_build_tool.sh` in `cargokit/`.
pub struct FakePlugin {
  pub plugin_dir: PathBuf,
}

impl FakePlugin {
  /// Create the layout under `root` with a launcher running `body`.
  ///
  /// The launcher is written without execute permission so the permission
  /// fix is exercised too.
  #[cfg(unix)]
  pub fn new(root: &Path, body: &str) -> Self {
    let cargokit = root.join("cargokit");
    let plugin_dir = cargokit.join("hvigor").join("src").join("plugin");
    std::fs::create_dir_all(&plugin_dir).unwrap();

    write_script(&cargokit.join("run_build_tool.sh"), body);

    Self { plugin_dir }
  }
}

/// Write a `/bin/sh` script with mode 0644.
#[cfg(unix)]
pub fn write_script(path: &Path, body: &str) {
  use std::os::unix::fs::PermissionsExt;

  std::fs::write(path, format!("#!/bin/sh\n{}\n", body)).unwrap();
  std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o644)).unwrap();
}

/// Script body that records its arguments and selected variables into
/// `$CARGOKIT_OUTPUT_DIR/record.txt`.
pub const RECORDING_TOOL: &str = r#"
mkdir -p "$CARGOKIT_OUTPUT_DIR"
{
  echo "args=$*"
  echo "platforms=$CARGOKIT_TARGET_PLATFORMS"
  echo "configuration=$CARGOKIT_CONFIGURATION"
  echo "manifest=$CARGOKIT_MANIFEST_DIR"
  echo "inherited=$CARGOKIT_TEST_INHERITED"
} > "$CARGOKIT_OUTPUT_DIR/record.txt"
"#;

/// Read the record written by [`RECORDING_TOOL`].
pub fn read_record(output_dir: &Path) -> String {
  std::fs::read_to_string(output_dir.join("record.txt")).unwrap()
}
