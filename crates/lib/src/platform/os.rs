use std::fmt;

/// Operating system families that decide how the build tool is launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsFamily {
  Unix,
  Windows,
}

/// Build tool launcher script per OS family.
const BUILD_TOOL_SCRIPTS: &[(OsFamily, &str)] = &[
  (OsFamily::Windows, "run_build_tool.cmd"),
  (OsFamily::Unix, "run_build_tool.sh"),
];

impl OsFamily {
  /// Detect the OS family of the running process.
  ///
  /// Anything that is not Windows is treated as Unix, matching how the
  /// launcher scripts are shipped.
  pub fn current() -> Self {
    match std::env::consts::FAMILY {
      "windows" => Self::Windows,
      _ => Self::Unix,
    }
  }

  /// Returns the lowercase string identifier for this family
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Unix => "unix",
      Self::Windows => "windows",
    }
  }

  /// File name of the build tool launcher for this family.
  pub fn build_tool_script(&self) -> &'static str {
    BUILD_TOOL_SCRIPTS
      .iter()
      .find(|(family, _)| family == self)
      .map(|(_, name)| *name)
      .unwrap_or("run_build_tool.sh")
  }
}

impl fmt::Display for OsFamily {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn script_names_follow_family() {
    assert_eq!(OsFamily::Windows.build_tool_script(), "run_build_tool.cmd");
    assert_eq!(OsFamily::Unix.build_tool_script(), "run_build_tool.sh");
  }

  #[test]
  fn every_family_has_a_script() {
    for family in [OsFamily::Unix, OsFamily::Windows] {
      assert!(BUILD_TOOL_SCRIPTS.iter().any(|(f, _)| *f == family));
    }
  }

  #[test]
  fn current_matches_compile_target() {
    #[cfg(windows)]
    assert_eq!(OsFamily::current(), OsFamily::Windows);
    #[cfg(unix)]
    assert_eq!(OsFamily::current(), OsFamily::Unix);
  }
}
