use std::any::Any;
use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;
use std::io;

use crate::error::Exception;
use crate::error::ExceptionGroup;

// -----------------------------------------------------------------------------
// Branch Failure
// -----------------------------------------------------------------------------

/// A fault captured from one branch of a fork-join.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BranchFailure {
  branch: usize,
  group: Option<ExceptionGroup>,
  reason: String,
}

impl BranchFailure {
  /// Creates a new `BranchFailure` from the payload of a caught panic.
  pub fn from_payload(branch: usize, payload: &(dyn Any + Send)) -> Self {
    if let Some(exception) = Exception::from_payload(payload) {
      return Self {
        branch,
        group: Some(exception.group()),
        reason: exception.to_string(),
      };
    }

    let reason: String = if let Some(message) = payload.downcast_ref::<&'static str>() {
      (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
      message.clone()
    } else {
      "unknown panic payload".to_owned()
    };

    Self {
      branch,
      group: None,
      reason,
    }
  }

  /// Creates a new `BranchFailure` for a branch whose thread never started.
  pub(crate) fn spawn(branch: usize, error: io::Error) -> Self {
    Self {
      branch,
      group: Some(ExceptionGroup::SysCap),
      reason: format!("failed to spawn thread: {error}"),
    }
  }

  /// Returns the index of the failed branch.
  #[inline]
  pub const fn branch(&self) -> usize {
    self.branch
  }

  /// Returns the exception group, if the branch raised an [`Exception`].
  #[inline]
  pub const fn group(&self) -> Option<ExceptionGroup> {
    self.group
  }

  /// Returns a description of the fault.
  #[inline]
  pub fn reason(&self) -> &str {
    self.reason.as_str()
  }
}

impl Display for BranchFailure {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(f, "branch {} failed: {}", self.branch, self.reason)
  }
}

impl Error for BranchFailure {}

// -----------------------------------------------------------------------------
// Join Error
// -----------------------------------------------------------------------------

/// Error returned by [`Parallel::join`] when any branch failed.
///
/// Failures are ordered by branch index.
///
/// [`Parallel::join`]: crate::proc::Parallel::join
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JoinError {
  failures: Vec<BranchFailure>,
}

impl JoinError {
  #[inline]
  pub(crate) fn new(failures: Vec<BranchFailure>) -> Self {
    Self { failures }
  }

  /// Returns every captured branch failure.
  #[inline]
  pub fn failures(&self) -> &[BranchFailure] {
    &self.failures
  }

  /// Consumes the error, returning the captured branch failures.
  #[inline]
  pub fn into_failures(self) -> Vec<BranchFailure> {
    self.failures
  }
}

impl Display for JoinError {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(f, "{} branch(es) failed", self.failures.len())?;

    for failure in self.failures.iter() {
      write!(f, "; {failure}")?;
    }

    Ok(())
  }
}

impl Error for JoinError {}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
