use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::panic;
use std::panic::AssertUnwindSafe;
use triomphe::Arc;

use crate::error::Exception;
use crate::error::ExceptionGroup;
use crate::loom::sync::atomic::AtomicBool;
use crate::loom::sync::atomic::Ordering;
use crate::proc::Process;

// -----------------------------------------------------------------------------
// Stop Token
// -----------------------------------------------------------------------------

/// A shared signal asking a [`Replication`] to stop.
///
/// The flag is checked between iterations, so a body blocked on a channel
/// keeps its thread until that operation completes. Closing the channel
/// the body is blocked on ends the loop right away.
#[derive(Clone)]
pub struct StopToken {
  inner: Arc<AtomicBool>,
}

impl StopToken {
  /// Creates a new `StopToken` that has not been triggered.
  #[inline]
  pub fn new() -> Self {
    Self {
      inner: Arc::new(AtomicBool::new(false)),
    }
  }

  /// Asks every replication holding this token to stop.
  #[inline]
  pub fn stop(&self) {
    self.inner.store(true, Ordering::Release);
  }

  /// Returns `true` if [`StopToken::stop`] has been called.
  #[inline]
  pub fn is_stopped(&self) -> bool {
    self.inner.load(Ordering::Acquire)
  }
}

impl Debug for StopToken {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.debug_tuple("StopToken").field(&self.is_stopped()).finish()
  }
}

impl Default for StopToken {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

// -----------------------------------------------------------------------------
// Replication
// -----------------------------------------------------------------------------

/// Unbounded repetition of one process, `!P`.
///
/// Invoking a replication occupies the calling thread until its
/// [`StopToken`] is triggered or the body raises a `Closed` exception.
/// Any other fault propagates to the caller.
#[derive(Clone, Debug)]
pub struct Replication {
  process: Process,
  stop: StopToken,
}

impl Replication {
  /// Creates a new `Replication` of `process` with a fresh stop token.
  #[inline]
  pub fn new(process: impl Into<Process>) -> Self {
    Self::with_stop(process, StopToken::new())
  }

  /// Creates a new `Replication` of `process` controlled by `stop`.
  #[inline]
  pub fn with_stop(process: impl Into<Process>, stop: StopToken) -> Self {
    Self {
      process: process.into(),
      stop,
    }
  }

  /// Returns a handle to the token stopping this replication.
  #[inline]
  pub fn stop_token(&self) -> StopToken {
    self.stop.clone()
  }

  /// Returns the replicated process.
  #[inline]
  pub fn process(&self) -> &Process {
    &self.process
  }

  /// Invokes the body until stopped.
  pub fn invoke(&self) {
    let mut iterations: u64 = 0;

    'replicate: while !self.stop.is_stopped() {
      match panic::catch_unwind(AssertUnwindSafe(|| self.process.invoke())) {
        Ok(()) => iterations += 1,
        Err(payload) if Exception::payload_is(payload.as_ref(), ExceptionGroup::Closed) => {
          tracing::trace!(target: "picalc", iterations, "replication input closed");
          break 'replicate;
        }
        Err(payload) => panic::resume_unwind(payload),
      }
    }

    tracing::trace!(target: "picalc", iterations, "replication stopped");
  }
}

impl From<Replication> for Process {
  #[inline]
  fn from(other: Replication) -> Self {
    Process::new(move || other.invoke())
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
