use crate::consts::CAP_PROCESS_LIST;
use crate::proc::Process;

/// Ordered composition of processes.
///
/// Invoking a sequence runs every element in order on the invoking thread.
/// A fault raised by one element unwinds immediately; later elements never
/// run.
#[derive(Clone, Debug)]
pub struct Sequence {
  processes: Vec<Process>,
}

impl Sequence {
  /// Creates an empty sequence.
  #[inline]
  pub fn new() -> Self {
    Self {
      processes: Vec::with_capacity(CAP_PROCESS_LIST),
    }
  }

  /// Appends `process` to the end of the sequence.
  #[inline]
  pub fn then(mut self, process: impl Into<Process>) -> Self {
    self.push(process);
    self
  }

  /// Appends `process` to the end of the sequence.
  #[inline]
  pub fn push(&mut self, process: impl Into<Process>) {
    self.processes.push(process.into());
  }

  /// Returns the number of steps in the sequence.
  #[inline]
  pub fn len(&self) -> usize {
    self.processes.len()
  }

  /// Returns `true` if the sequence has no steps.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.processes.is_empty()
  }

  /// Runs every step, in order, on the calling thread.
  pub fn invoke(&self) {
    for process in self.processes.iter() {
      process.invoke();
    }
  }
}

impl Default for Sequence {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl FromIterator<Process> for Sequence {
  fn from_iter<I>(iter: I) -> Self
  where
    I: IntoIterator<Item = Process>,
  {
    Self {
      processes: iter.into_iter().collect(),
    }
  }
}

impl From<Sequence> for Process {
  #[inline]
  fn from(other: Sequence) -> Self {
    Process::new(move || other.invoke())
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use std::panic;
  use std::panic::AssertUnwindSafe;
  use std::sync::Arc;
  use std::thread;
  use std::thread::ThreadId;

  use parking_lot::Mutex;

  use crate::proc::Process;
  use crate::proc::Sequence;
  use crate::raise;

  type Log = Arc<Mutex<Vec<(&'static str, ThreadId)>>>;

  fn record(log: &Log, label: &'static str) -> Process {
    let log: Log = Arc::clone(log);
    Process::new(move || log.lock().push((label, thread::current().id())))
  }

  #[test]
  fn test_runs_in_order_on_one_thread() {
    let log: Log = Log::default();
    let sequence: Sequence = Sequence::new()
      .then(record(&log, "p1"))
      .then(record(&log, "p2"))
      .then(record(&log, "p3"));

    sequence.invoke();

    let caller: ThreadId = thread::current().id();
    let entries = log.lock();

    assert_eq!(
      entries.iter().map(|(label, _)| *label).collect::<Vec<_>>(),
      ["p1", "p2", "p3"]
    );
    assert!(entries.iter().all(|(_, thread)| *thread == caller));
  }

  #[test]
  fn test_fault_stops_remaining_steps() {
    let log: Log = Log::default();
    let sequence: Sequence = Sequence::new()
      .then(record(&log, "p1"))
      .then(Process::new(|| raise!(Error, SysInv, "step failed")))
      .then(record(&log, "p3"));

    assert!(panic::catch_unwind(AssertUnwindSafe(|| sequence.invoke())).is_err());
    assert_eq!(log.lock().len(), 1);
  }

  #[test]
  fn test_from_iter_and_len() {
    let sequence: Sequence = (0..4).map(|_| Process::nil()).collect();

    assert_eq!(sequence.len(), 4);
    assert!(!sequence.is_empty());
    assert!(Sequence::default().is_empty());
  }

  #[test]
  fn test_into_process() {
    let log: Log = Log::default();
    let process: Process = Sequence::new()
      .then(record(&log, "a"))
      .then(record(&log, "b"))
      .into();

    process.invoke();
    process.invoke();

    assert_eq!(log.lock().len(), 4);
  }
}
