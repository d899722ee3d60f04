use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::sync::Arc;

use crate::cell::Cell;
use crate::chan::Sink;
use crate::chan::Source;
use crate::proc::Process;

// -----------------------------------------------------------------------------
// In
// -----------------------------------------------------------------------------

/// A [`Source`] bound to a target cell.
///
/// Each invocation writes one freshly received value into the cell.
pub struct In<T> {
  source: Arc<dyn Source<T>>,
  target: Cell<T>,
}

impl<T> In<T> {
  /// Creates a new `In` writing values from `source` into `target`.
  #[inline]
  pub fn new<S>(source: S, target: &Cell<T>) -> Self
  where
    S: Source<T> + 'static,
  {
    Self {
      source: Arc::new(source),
      target: target.clone(),
    }
  }

  /// Receives one value into the target cell.
  #[inline]
  pub fn invoke(&self) {
    self.target.set(self.source.receive());
  }
}

impl<T> Clone for In<T> {
  #[inline]
  fn clone(&self) -> Self {
    Self {
      source: Arc::clone(&self.source),
      target: self.target.clone(),
    }
  }
}

impl<T> Debug for In<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.write_str("In(..)")
  }
}

impl<T> From<In<T>> for Process
where
  T: Send + 'static,
{
  #[inline]
  fn from(other: In<T>) -> Self {
    Process::new(move || other.invoke())
  }
}

// -----------------------------------------------------------------------------
// Out
// -----------------------------------------------------------------------------

/// A [`Sink`] bound to a source cell.
///
/// Each invocation passes a copy of the cell's current value to the sink.
pub struct Out<T> {
  sink: Arc<dyn Sink<T>>,
  source: Cell<T>,
}

impl<T> Out<T> {
  /// Creates a new `Out` sending values from `source` into `sink`.
  #[inline]
  pub fn new<S>(sink: S, source: &Cell<T>) -> Self
  where
    S: Sink<T> + 'static,
  {
    Self {
      sink: Arc::new(sink),
      source: source.clone(),
    }
  }

  /// Sends the current value of the source cell.
  #[inline]
  pub fn invoke(&self)
  where
    T: Clone,
  {
    self.sink.send(self.source.get());
  }
}

impl<T> Clone for Out<T> {
  #[inline]
  fn clone(&self) -> Self {
    Self {
      sink: Arc::clone(&self.sink),
      source: self.source.clone(),
    }
  }
}

impl<T> Debug for Out<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.write_str("Out(..)")
  }
}

impl<T> From<Out<T>> for Process
where
  T: Clone + Send + 'static,
{
  #[inline]
  fn from(other: Out<T>) -> Self {
    Process::new(move || other.invoke())
  }
}

// -----------------------------------------------------------------------------
// Input Channel
// -----------------------------------------------------------------------------

/// A reusable input adapter awaiting a target cell.
pub struct InputChannel<T> {
  source: Arc<dyn Source<T>>,
}

impl<T> InputChannel<T>
where
  T: Send + 'static,
{
  /// Creates a new `InputChannel` receiving values from `source`.
  #[inline]
  pub fn new<S>(source: S) -> Self
  where
    S: Source<T> + 'static,
  {
    Self {
      source: Arc::new(source),
    }
  }

  /// Builds the process receiving one value into `target`.
  pub fn bind(&self, target: &Cell<T>) -> Process {
    Process::from(In {
      source: Arc::clone(&self.source),
      target: target.clone(),
    })
  }
}

impl<T> Clone for InputChannel<T> {
  #[inline]
  fn clone(&self) -> Self {
    Self {
      source: Arc::clone(&self.source),
    }
  }
}

impl<T> Debug for InputChannel<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.write_str("InputChannel(..)")
  }
}

// -----------------------------------------------------------------------------
// Output Channel
// -----------------------------------------------------------------------------

/// A reusable output adapter awaiting a source cell.
pub struct OutputChannel<T> {
  sink: Arc<dyn Sink<T>>,
}

impl<T> OutputChannel<T>
where
  T: Clone + Send + 'static,
{
  /// Creates a new `OutputChannel` sending values into `sink`.
  #[inline]
  pub fn new<S>(sink: S) -> Self
  where
    S: Sink<T> + 'static,
  {
    Self {
      sink: Arc::new(sink),
    }
  }

  /// Builds the process sending the value of `source`.
  pub fn bind(&self, source: &Cell<T>) -> Process {
    Process::from(Out {
      sink: Arc::clone(&self.sink),
      source: source.clone(),
    })
  }
}

impl<T> Clone for OutputChannel<T> {
  #[inline]
  fn clone(&self) -> Self {
    Self {
      sink: Arc::clone(&self.sink),
    }
  }
}

impl<T> Debug for OutputChannel<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.write_str("OutputChannel(..)")
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use std::sync::Arc;
  use std::sync::atomic::AtomicI32;
  use std::sync::atomic::Ordering;

  use parking_lot::Mutex;

  use crate::cell::Cell;
  use crate::chan::In;
  use crate::chan::InputChannel;
  use crate::chan::Out;
  use crate::chan::OutputChannel;
  use crate::proc::Process;

  fn counter() -> impl Fn() -> i32 + Send + Sync + 'static {
    let next: Arc<AtomicI32> = Arc::new(AtomicI32::new(0));
    move || next.fetch_add(1, Ordering::SeqCst) + 1
  }

  #[test]
  fn test_in_writes_fresh_value_per_invocation() {
    let target: Cell<i32> = Cell::new(0);
    let process: Process = In::new(counter(), &target).into();

    process.invoke();
    assert_eq!(target.get(), 1);

    process.invoke();
    assert_eq!(target.get(), 2);
  }

  #[test]
  fn test_out_reads_current_value() {
    let seen: Arc<Mutex<Vec<i32>>> = Arc::default();
    let source: Cell<i32> = Cell::new(5);

    let sink = {
      let seen = Arc::clone(&seen);
      move |x: i32| seen.lock().push(x)
    };

    let process: Process = Out::new(sink, &source).into();

    process.invoke();
    source.set(6);
    process.invoke();

    assert_eq!(*seen.lock(), [5, 6]);
  }

  #[test]
  fn test_factories_defer_binding() {
    let input: InputChannel<i32> = InputChannel::new(counter());
    let a: Cell<i32> = Cell::new(0);
    let b: Cell<i32> = Cell::new(0);

    input.bind(&a).invoke();
    input.bind(&b).invoke();

    // Both processes share one source.
    assert_eq!(a.get(), 1);
    assert_eq!(b.get(), 2);
  }

  #[test]
  fn test_input_then_output() {
    let seen: Arc<Mutex<Vec<String>>> = Arc::default();
    let cell: Cell<String> = Cell::new(String::new());

    let input: InputChannel<String> = InputChannel::new(|| String::from("hello"));
    let output: OutputChannel<String> = {
      let seen = Arc::clone(&seen);
      OutputChannel::new(move |x: String| seen.lock().push(x))
    };

    (input.bind(&cell) * output.bind(&cell)).invoke();

    assert_eq!(*seen.lock(), ["hello"]);
  }
}
