use std::collections::VecDeque;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use tracing::trace;
use triomphe::Arc;

use crate::cell::Bind;
use crate::cell::Capability;
use crate::cell::Cell;
use crate::cell::Payload;
use crate::chan::Sink;
use crate::chan::Source;
use crate::chan::wait::wait_while;
use crate::error::ClosedChannel;
use crate::error::ConstructionError;
use crate::error::fatal;
use crate::loom::sync::Condvar;
use crate::loom::sync::Mutex;
use crate::loom::sync::MutexGuard;
use crate::proc::Process;
use crate::raise;
use crate::runtime::Runtime;

struct QueueState<T> {
  items: VecDeque<T>,
  closed: bool,
}

struct QueueInner<T> {
  state: Mutex<QueueState<T>>,
  not_empty: Condvar,
  not_full: Condvar,
  capacity: usize,
}

/// A bounded, blocking FIFO buffer.
///
/// [`pop`] blocks while the queue is empty and [`push`] blocks while it is
/// full. Items leave in exactly the order they were accepted. Cloning a
/// queue yields another handle to the same buffer.
///
/// [`pop`]: Queue::pop
/// [`push`]: Queue::push
pub struct Queue<T> {
  inner: Arc<QueueInner<T>>,
}

impl<T> Queue<T> {
  /// Creates a new `Queue` holding at most `capacity` items.
  ///
  /// # Errors
  ///
  /// Returns [`ConstructionError::ZeroCapacity`] if `capacity` is zero.
  pub fn new(capacity: usize) -> Result<Self, ConstructionError> {
    if capacity == 0 {
      return Err(ConstructionError::ZeroCapacity);
    }

    Ok(Self {
      inner: Arc::new(QueueInner {
        state: Mutex::new(QueueState {
          items: VecDeque::with_capacity(capacity),
          closed: false,
        }),
        not_empty: Condvar::new(),
        not_full: Condvar::new(),
        capacity,
      }),
    })
  }

  /// Returns the maximum number of buffered items.
  #[inline]
  pub fn capacity(&self) -> usize {
    self.inner.capacity
  }

  /// Returns the number of buffered items.
  #[inline]
  pub fn len(&self) -> usize {
    self.lock().items.len()
  }

  /// Returns `true` if no items are buffered.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.lock().items.is_empty()
  }

  /// Returns `true` if the queue is at capacity.
  #[inline]
  pub fn is_full(&self) -> bool {
    self.lock().items.len() >= self.inner.capacity
  }

  /// Returns `true` if the queue has been closed.
  #[inline]
  pub fn is_closed(&self) -> bool {
    self.lock().closed
  }

  /// Removes the oldest item, blocking while the queue is empty.
  ///
  /// Items buffered before the queue was closed are still delivered.
  ///
  /// # Errors
  ///
  /// Returns [`ClosedChannel`] once the queue is closed and drained.
  pub fn pop(&self) -> Result<T, ClosedChannel> {
    let mut guard: MutexGuard<'_, QueueState<T>> = self.lock();

    wait_while(&self.inner.not_empty, &mut guard, "queue::pop", |state| {
      state.items.is_empty() && !state.closed
    });

    let Some(item) = guard.items.pop_front() else {
      return Err(ClosedChannel::empty());
    };

    trace!(target: "picalc", len = guard.items.len(), "queue pop");

    drop(guard);

    self.inner.not_full.notify_one();

    Ok(item)
  }

  /// Appends `item`, blocking while the queue is full.
  ///
  /// # Errors
  ///
  /// Returns [`ClosedChannel`] holding `item` if the queue is closed.
  pub fn push(&self, item: T) -> Result<(), ClosedChannel<T>> {
    let mut guard: MutexGuard<'_, QueueState<T>> = self.lock();
    let capacity: usize = self.inner.capacity;

    wait_while(&self.inner.not_full, &mut guard, "queue::push", |state| {
      state.items.len() >= capacity && !state.closed
    });

    if guard.closed {
      return Err(ClosedChannel::new(item));
    }

    guard.items.push_back(item);

    trace!(target: "picalc", len = guard.items.len(), "queue push");

    drop(guard);

    self.inner.not_empty.notify_one();

    Ok(())
  }

  /// Removes the oldest item if one is buffered.
  pub fn try_pop(&self) -> Option<T> {
    let item: Option<T> = self.lock().items.pop_front();

    if item.is_some() {
      self.inner.not_full.notify_one();
    }

    item
  }

  /// Appends `item` if the queue has room and is open.
  ///
  /// # Errors
  ///
  /// Hands `item` back if the queue is full or closed.
  pub fn try_push(&self, item: T) -> Result<(), T> {
    let mut guard: MutexGuard<'_, QueueState<T>> = self.lock();

    if guard.closed || guard.items.len() >= self.inner.capacity {
      return Err(item);
    }

    guard.items.push_back(item);

    drop(guard);

    self.inner.not_empty.notify_one();

    Ok(())
  }

  /// Closes the queue and wakes every blocked caller.
  ///
  /// Pending and future pushes fail. Pops keep draining buffered items,
  /// then fail.
  pub fn close(&self) {
    let mut guard: MutexGuard<'_, QueueState<T>> = self.lock();

    if guard.closed {
      return;
    }

    guard.closed = true;

    trace!(target: "picalc", buffered = guard.items.len(), "queue closed");

    drop(guard);

    self.inner.not_empty.notify_all();
    self.inner.not_full.notify_all();
  }

  /// Returns a snapshot of the buffered items, oldest first.
  pub fn to_vec(&self) -> Vec<T>
  where
    T: Clone,
  {
    self.lock().items.iter().cloned().collect()
  }

  #[inline]
  fn lock(&self) -> MutexGuard<'_, QueueState<T>> {
    self.inner.state.lock()
  }
}

// -----------------------------------------------------------------------------
// Process Builders
// -----------------------------------------------------------------------------

impl<T> Queue<T>
where
  T: Send + 'static,
{
  /// Builds a process popping one item into `target`.
  ///
  /// Raises a `Closed` exception if the queue is closed and drained.
  pub fn pop_into(&self, target: &Cell<T>) -> Process {
    let this: Self = self.clone();
    let target: Cell<T> = target.clone();

    Process::new(move || target.set(this.receive()))
  }

  /// Builds a process pushing the current value of `source`.
  ///
  /// Raises a `Closed` exception if the queue is closed.
  pub fn push_from(&self, source: &Cell<T>) -> Process
  where
    T: Clone,
  {
    let this: Self = self.clone();
    let source: Cell<T> = source.clone();

    Process::new(move || this.send(source.get()))
  }
}

// -----------------------------------------------------------------------------
// Trait Impls
// -----------------------------------------------------------------------------

impl<T> Clone for Queue<T> {
  #[inline]
  fn clone(&self) -> Self {
    Self {
      inner: Arc::clone(&self.inner),
    }
  }
}

impl<T> Debug for Queue<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    let guard: MutexGuard<'_, QueueState<T>> = self.lock();

    f.debug_struct("Queue")
      .field("len", &guard.items.len())
      .field("capacity", &self.inner.capacity)
      .field("closed", &guard.closed)
      .finish()
  }
}

impl<T> Default for Queue<T> {
  /// Creates a queue with the configured default capacity.
  fn default() -> Self {
    let capacity: usize = Runtime::config().rt_queue_capacity.max(1);

    match Self::new(capacity) {
      Ok(queue) => queue,
      Err(error) => fatal!(error),
    }
  }
}

impl<T> Source<T> for Queue<T>
where
  T: Send,
{
  fn receive(&self) -> T {
    match self.pop() {
      Ok(item) => item,
      Err(error) => raise!(Error, Closed, error),
    }
  }
}

impl<T> Sink<T> for Queue<T>
where
  T: Send,
{
  fn send(&self, item: T) {
    if let Err(error) = self.push(item) {
      raise!(Error, Closed, error);
    }
  }
}

impl<T> Payload<T> for Queue<T>
where
  T: Send + 'static,
{
  fn capability(&mut self, bind: Bind) -> Capability<'_, T> {
    match bind {
      Bind::Call => Capability::Callable(Box::new(self.clone())),
      Bind::Index => Capability::Indexable(Box::new(self.clone())),
    }
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use std::panic;
  use std::panic::AssertUnwindSafe;
  use std::sync::mpsc;
  use std::sync::mpsc::TryRecvError;
  use std::thread;

  use crate::cell::Cell;
  use crate::chan::Queue;
  use crate::error::ConstructionError;
  use crate::error::Exception;
  use crate::error::ExceptionGroup;

  #[test]
  fn test_zero_capacity() {
    assert_eq!(Queue::<i32>::new(0).unwrap_err(), ConstructionError::ZeroCapacity);
  }

  #[test]
  fn test_default_capacity() {
    assert_eq!(Queue::<i32>::default().capacity(), 10);
  }

  #[test]
  fn test_fifo() {
    let queue: Queue<i32> = Queue::new(4).unwrap();

    queue.push(1).unwrap();
    queue.push(2).unwrap();
    queue.push(3).unwrap();

    assert_eq!(queue.len(), 3);
    assert_eq!(queue.pop().unwrap(), 1);
    assert_eq!(queue.pop().unwrap(), 2);
    assert_eq!(queue.pop().unwrap(), 3);
    assert!(queue.is_empty());
  }

  #[test]
  fn test_try_ops() {
    let queue: Queue<i32> = Queue::new(1).unwrap();

    assert_eq!(queue.try_pop(), None);
    assert_eq!(queue.try_push(1), Ok(()));
    assert!(queue.is_full());
    assert_eq!(queue.try_push(2), Err(2));
    assert_eq!(queue.try_pop(), Some(1));
  }

  #[test]
  fn test_push_blocks_when_full() {
    let queue: Queue<i32> = Queue::new(2).unwrap();
    let (done_tx, done_rx) = mpsc::channel::<()>();

    queue.push(1).unwrap();
    queue.push(2).unwrap();

    let handle = {
      let queue = queue.clone();

      thread::spawn(move || {
        queue.push(3).unwrap();
        done_tx.send(()).unwrap();
      })
    };

    // Nothing can complete the push until a slot is freed below.
    assert_eq!(done_rx.try_recv(), Err(TryRecvError::Empty));
    assert_eq!(queue.len(), queue.capacity());

    assert_eq!(queue.pop().unwrap(), 1);

    done_rx.recv().unwrap();
    handle.join().unwrap();

    assert_eq!(queue.to_vec(), [2, 3]);
  }

  #[test]
  fn test_pop_blocks_when_empty() {
    let queue: Queue<i32> = Queue::new(1).unwrap();
    let (item_tx, item_rx) = mpsc::channel::<i32>();

    let handle = {
      let queue = queue.clone();
      thread::spawn(move || item_tx.send(queue.pop().unwrap()).unwrap())
    };

    assert_eq!(item_rx.try_recv(), Err(TryRecvError::Empty));

    queue.push(7).unwrap();

    assert_eq!(item_rx.recv().unwrap(), 7);
    handle.join().unwrap();
  }

  #[test]
  fn test_close_drains_then_fails() {
    let queue: Queue<i32> = Queue::new(2).unwrap();

    queue.push(1).unwrap();
    queue.close();

    assert!(queue.is_closed());
    assert_eq!(queue.push(2).unwrap_err().into_inner(), 2);
    assert_eq!(queue.pop().unwrap(), 1);
    assert!(queue.pop().is_err());
  }

  #[test]
  fn test_close_wakes_blocked_pop() {
    let queue: Queue<i32> = Queue::new(1).unwrap();

    let handle = {
      let queue = queue.clone();
      thread::spawn(move || queue.pop())
    };

    queue.close();

    assert!(handle.join().unwrap().is_err());
  }

  #[test]
  fn test_builders() {
    let queue: Queue<String> = Queue::new(1).unwrap();
    let source: Cell<String> = Cell::new(String::from("a"));
    let target: Cell<String> = Cell::default();

    queue.push_from(&source).invoke();
    queue.pop_into(&target).invoke();

    assert_eq!(target.get(), "a");
  }

  #[test]
  fn test_closed_source_raises() {
    let queue: Queue<i32> = Queue::new(1).unwrap();
    let target: Cell<i32> = Cell::new(0);

    queue.close();

    let process = queue.pop_into(&target);
    let error = panic::catch_unwind(AssertUnwindSafe(|| process.invoke())).unwrap_err();

    assert!(Exception::payload_is(error.as_ref(), ExceptionGroup::Closed));
  }

  #[test]
  fn test_cell_holding_queue() {
    let queue: Queue<i32> = Queue::new(2).unwrap();
    let chan: Cell<Queue<i32>> = Cell::new(queue.clone());
    let value: Cell<i32> = Cell::new(5);

    // x[y] pushes, x(y) pops.
    chan.index(&value).invoke();
    assert_eq!(queue.to_vec(), [5]);

    value.set(0);
    chan.call(&value).invoke();
    assert_eq!(value.get(), 5);
    assert!(queue.is_empty());
  }
}
