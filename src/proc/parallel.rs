use std::io;
use std::thread::JoinHandle;
use tracing::Level;
use tracing::Span;
use tracing::debug;
use tracing::error;
use tracing::span;

use crate::consts::CAP_PROCESS_LIST;
use crate::error::BranchFailure;
use crate::error::JoinError;
use crate::proc::Process;
use crate::raise;
use crate::utils;

type BranchHandle = JoinHandle<Result<(), BranchFailure>>;

/// Concurrent composition of processes with a fork-join barrier.
///
/// Invoking a parallel composition spawns one platform thread per branch
/// and returns only after every branch has finished. Branches have no
/// relative ordering.
#[derive(Clone, Debug)]
pub struct Parallel {
  branches: Vec<Process>,
}

impl Parallel {
  /// Creates an empty parallel composition.
  #[inline]
  pub fn new() -> Self {
    Self {
      branches: Vec::with_capacity(CAP_PROCESS_LIST),
    }
  }

  /// Creates a parallel composition of `count` copies of `process`.
  #[inline]
  pub fn replicate(process: impl Into<Process>, count: usize) -> Self {
    Self {
      branches: vec![process.into(); count],
    }
  }

  /// Adds `process` as a new branch.
  #[inline]
  pub fn with(mut self, process: impl Into<Process>) -> Self {
    self.push(process);
    self
  }

  /// Adds `process` as a new branch.
  #[inline]
  pub fn push(&mut self, process: impl Into<Process>) {
    self.branches.push(process.into());
  }

  /// Appends every branch of `other`, flattening the composition.
  #[inline]
  pub fn merge(mut self, other: Parallel) -> Self {
    self.branches.extend(other.branches);
    self
  }

  /// Returns the number of branches.
  #[inline]
  pub fn len(&self) -> usize {
    self.branches.len()
  }

  /// Returns `true` if there are no branches.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.branches.is_empty()
  }

  /// Runs every branch on its own thread and waits for all of them.
  ///
  /// Faults are captured per branch. A branch whose thread could not be
  /// spawned fails with a `SysCap` group. The error lists every failed
  /// branch, ordered by branch index, and is only returned once every
  /// started branch has been joined.
  pub fn join(&self) -> Result<(), JoinError> {
    self.join_with(|index, branch| {
      utils::spawn(move || utils::catch_branch(index, || branch.invoke()))
    })
  }

  fn join_with<F>(&self, spawn: F) -> Result<(), JoinError>
  where
    F: Fn(usize, Process) -> io::Result<BranchHandle>,
  {
    let span: Span = span!(
      target: "picalc",
      Level::DEBUG,
      "parallel::join",
      branches = self.branches.len(),
    );

    let spawned: Vec<Result<BranchHandle, BranchFailure>> = self
      .branches
      .iter()
      .cloned()
      .enumerate()
      .map(|(index, branch)| {
        spawn(index, branch).map_err(|error| BranchFailure::spawn(index, error))
      })
      .collect();

    debug!(target: "picalc", parent: &span, "forked");

    // Every started branch is joined, even when a sibling failed to start.
    let failures: Vec<BranchFailure> = spawned
      .into_iter()
      .enumerate()
      .filter_map(|(index, spawned)| match spawned.map(JoinHandle::join) {
        Ok(Ok(Ok(()))) => None,
        Ok(Ok(Err(failure))) => Some(failure),
        Ok(Err(payload)) => Some(BranchFailure::from_payload(index, payload.as_ref())),
        Err(failure) => Some(failure),
      })
      .collect();

    debug!(
      target: "picalc",
      parent: &span,
      failures = failures.len(),
      "joined",
    );

    if failures.is_empty() {
      return Ok(());
    }

    for failure in failures.iter() {
      error!(
        target: "picalc",
        parent: &span,
        branch = failure.branch(),
        reason = failure.reason(),
        "branch failed",
      );
    }

    Err(JoinError::new(failures))
  }

  /// Runs every branch and waits for all of them.
  ///
  /// Captured branch faults are re-raised on the calling thread as a
  /// single `Branch` exception.
  pub fn invoke(&self) {
    if let Err(error) = self.join() {
      raise!(Error, Branch, error);
    }
  }
}

impl Default for Parallel {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl FromIterator<Process> for Parallel {
  fn from_iter<I>(iter: I) -> Self
  where
    I: IntoIterator<Item = Process>,
  {
    Self {
      branches: iter.into_iter().collect(),
    }
  }
}

impl From<Parallel> for Process {
  #[inline]
  fn from(other: Parallel) -> Self {
    Process::new(move || other.invoke())
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
