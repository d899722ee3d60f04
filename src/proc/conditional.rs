use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::sync::Arc;

use crate::proc::Process;

type Predicate = Arc<dyn Fn() -> bool + Send + Sync>;

// -----------------------------------------------------------------------------
// If
// -----------------------------------------------------------------------------

/// Entry point for building a [`Conditional`].
#[derive(Clone)]
pub struct If {
  predicate: Predicate,
}

impl If {
  /// Creates a new `If` guarded by `predicate`.
  #[inline]
  pub fn new<F>(predicate: F) -> Self
  where
    F: Fn() -> bool + Send + Sync + 'static,
  {
    Self {
      predicate: Arc::new(predicate),
    }
  }

  /// Sets the process run when the predicate holds.
  #[inline]
  pub fn then(self, process: impl Into<Process>) -> Conditional {
    Conditional {
      predicate: self.predicate,
      then: process.into(),
      otherwise: None,
    }
  }
}

impl Debug for If {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.write_str("If(..)")
  }
}

// -----------------------------------------------------------------------------
// Conditional
// -----------------------------------------------------------------------------

/// A guarded choice between two processes.
///
/// The predicate is evaluated exactly once per invocation. Without an
/// `otherwise` branch, a false predicate does nothing.
#[derive(Clone)]
pub struct Conditional {
  predicate: Predicate,
  then: Process,
  otherwise: Option<Process>,
}

impl Conditional {
  /// Sets the process run when the predicate does not hold.
  #[inline]
  pub fn otherwise(mut self, process: impl Into<Process>) -> Self {
    self.otherwise = Some(process.into());
    self
  }

  /// Evaluates the predicate and runs the matching branch.
  pub fn invoke(&self) {
    if (self.predicate)() {
      self.then.invoke();
    } else if let Some(otherwise) = self.otherwise.as_ref() {
      otherwise.invoke();
    }
  }
}

impl Debug for Conditional {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.debug_struct("Conditional")
      .field("then", &self.then)
      .field("otherwise", &self.otherwise)
      .finish_non_exhaustive()
  }
}

impl From<Conditional> for Process {
  #[inline]
  fn from(other: Conditional) -> Self {
    Process::new(move || other.invoke())
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
