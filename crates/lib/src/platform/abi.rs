use std::fmt;

/// Native ABIs the build tool produces libraries for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OhosAbi {
  Arm,
  Arm64,
  X86_64,
}

impl OhosAbi {
  /// Every ABI, in the order handed to the build tool.
  ///
  /// Each invocation requests all of them, whichever target triggered it.
  pub const ALL: [OhosAbi; 3] = [Self::Arm, Self::Arm64, Self::X86_64];

  /// Returns the platform identifier understood by the build tool
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Arm => "ohos-arm",
      Self::Arm64 => "ohos-arm64",
      Self::X86_64 => "ohos-x64",
    }
  }
}

impl fmt::Display for OhosAbi {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Comma-joined identifiers of every ABI (e.g., "ohos-arm,ohos-arm64,ohos-x64")
pub fn target_platforms() -> String {
  OhosAbi::ALL.iter().map(OhosAbi::as_str).collect::<Vec<_>>().join(",")
}
