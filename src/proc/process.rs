use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::sync::Arc;
use std::thread::JoinHandle;

use crate::error::BranchFailure;
use crate::proc::Parallel;
use crate::proc::Replication;
use crate::proc::Sequence;
use crate::utils;

/// An atomic, composable unit of computation.
///
/// Cloning a `Process` is cheap and yields a process running the same
/// action. A process never introduces threads on its own; only
/// [`Process::run`] and [`Parallel`] do.
#[derive(Clone)]
pub struct Process {
  action: Arc<dyn Fn() + Send + Sync>,
}

impl Process {
  /// Creates a new `Process` running `action` on each invocation.
  #[inline]
  pub fn new<F>(action: F) -> Self
  where
    F: Fn() + Send + Sync + 'static,
  {
    Self {
      action: Arc::new(action),
    }
  }

  /// Returns the inert process.
  #[inline]
  pub fn nil() -> Self {
    Self::new(|| {})
  }

  /// Runs the process to completion on the calling thread.
  ///
  /// Faults raised by the action unwind through the caller.
  #[inline]
  pub fn invoke(&self) {
    (self.action)()
  }

  /// Runs the process on a dedicated thread and waits for it to finish.
  ///
  /// A fault raised by the action, or a failure to start the thread, is
  /// captured and returned.
  pub fn run(&self) -> Result<(), BranchFailure> {
    let this: Self = self.clone();
    let handle: JoinHandle<Result<(), BranchFailure>> =
      match utils::spawn(move || utils::catch_branch(0, || this.invoke())) {
        Ok(handle) => handle,
        Err(error) => return Err(BranchFailure::spawn(0, error)),
      };

    match handle.join() {
      Ok(result) => result,
      Err(payload) => Err(BranchFailure::from_payload(0, payload.as_ref())),
    }
  }

  /// Returns `!P`, the unbounded replication of this process.
  #[inline]
  pub fn replicate(self) -> Replication {
    Replication::new(self)
  }

  /// Returns the sequence running this process, then `next`.
  #[inline]
  pub fn then(self, next: impl Into<Process>) -> Sequence {
    Sequence::new().then(self).then(next)
  }

  /// Returns the parallel composition of this process and `other`.
  #[inline]
  pub fn par(self, other: impl Into<Process>) -> Parallel {
    Parallel::new().with(self).with(other)
  }

  /// Returns the parallel composition of `count` copies of this process.
  #[inline]
  pub fn times(self, count: usize) -> Parallel {
    Parallel::replicate(self, count)
  }
}

impl Debug for Process {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.write_str("Process(..)")
  }
}

impl Default for Process {
  #[inline]
  fn default() -> Self {
    Self::nil()
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
