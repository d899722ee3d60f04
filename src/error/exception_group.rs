use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

/// Exception error category.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExceptionGroup {
  /// Invalid arguments, including an unsupported bind on a cell payload.
  BadArg,
  /// One or more branches of a parallel composition failed.
  Branch,
  /// A channel operation hit a closed queue or rendezvous.
  Closed,
  /// A system limit was reached (e.g. no thread could be spawned).
  SysCap,
  /// Invalid system state or operation.
  SysInv,
}

impl Display for ExceptionGroup {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    match self {
      Self::BadArg => f.write_str("badarg"),
      Self::Branch => f.write_str("branch"),
      Self::Closed => f.write_str("closed"),
      Self::SysCap => f.write_str("system_limit"),
      Self::SysInv => f.write_str("system_invariant"),
    }
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use crate::error::ExceptionGroup;

  #[test]
  fn test_display() {
    assert_eq!(format!("{}", ExceptionGroup::BadArg), "badarg");
    assert_eq!(format!("{}", ExceptionGroup::Branch), "branch");
    assert_eq!(format!("{}", ExceptionGroup::Closed), "closed");
    assert_eq!(format!("{}", ExceptionGroup::SysCap), "system_limit");
    assert_eq!(format!("{}", ExceptionGroup::SysInv), "system_invariant");
  }
}
