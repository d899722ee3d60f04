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
use crate::consts::RENDEZVOUS_CAPACITY;
use crate::error::ClosedChannel;
use crate::loom::sync::Condvar;
use crate::loom::sync::Mutex;
use crate::loom::sync::MutexGuard;
use crate::proc::Process;
use crate::raise;

type Transform<T, R> = Box<dyn Fn(T) -> R + Send + Sync>;

struct SlotState<T> {
  item: Option<T>,
  closed: bool,
}

struct RendezvousInner<T, R> {
  state: Mutex<SlotState<T>>,
  not_empty: Condvar,
  not_full: Condvar,
  transform: Transform<T, R>,
}

/// A single-slot synchronous hand-off point.
///
/// [`deposit`] blocks while the slot is occupied and [`take`] blocks while
/// it is empty. The optional transform maps a deposited `T` to the `R`
/// handed to the taker; it runs on the taker's thread after the slot lock
/// is released.
///
/// [`deposit`]: Rendezvous::deposit
/// [`take`]: Rendezvous::take
pub struct Rendezvous<T, R = T> {
  inner: Arc<RendezvousInner<T, R>>,
}

impl<T> Rendezvous<T>
where
  T: 'static,
{
  /// Creates a new, empty `Rendezvous`.
  #[inline]
  pub fn new() -> Self {
    Self::with_transform(|item| item)
  }
}

impl<T, R> Rendezvous<T, R> {
  /// Creates a new, empty `Rendezvous` applying `transform` on take.
  pub fn with_transform<F>(transform: F) -> Self
  where
    F: Fn(T) -> R + Send + Sync + 'static,
  {
    Self {
      inner: Arc::new(RendezvousInner {
        state: Mutex::new(SlotState {
          item: None,
          closed: false,
        }),
        not_empty: Condvar::new(),
        not_full: Condvar::new(),
        transform: Box::new(transform),
      }),
    }
  }

  /// Returns the number of items the slot can hold.
  #[inline]
  pub const fn capacity(&self) -> usize {
    RENDEZVOUS_CAPACITY
  }

  /// Returns `true` if an item is waiting to be taken.
  #[inline]
  pub fn is_full(&self) -> bool {
    self.lock().item.is_some()
  }

  /// Returns `true` if the rendezvous has been closed.
  #[inline]
  pub fn is_closed(&self) -> bool {
    self.lock().closed
  }

  /// Takes the deposited item, blocking while the slot is empty.
  ///
  /// An item deposited before the rendezvous was closed is still
  /// delivered.
  ///
  /// # Errors
  ///
  /// Returns [`ClosedChannel`] once the rendezvous is closed and empty.
  pub fn take(&self) -> Result<R, ClosedChannel> {
    let mut guard: MutexGuard<'_, SlotState<T>> = self.lock();

    wait_while(&self.inner.not_empty, &mut guard, "rendezvous::take", |state| {
      state.item.is_none() && !state.closed
    });

    let Some(item) = guard.item.take() else {
      return Err(ClosedChannel::empty());
    };

    drop(guard);

    trace!(target: "picalc", "rendezvous take");

    self.inner.not_full.notify_one();

    Ok((self.inner.transform)(item))
  }

  /// Places `item` in the slot, blocking while the slot is occupied.
  ///
  /// # Errors
  ///
  /// Returns [`ClosedChannel`] holding `item` if the rendezvous is closed.
  pub fn deposit(&self, item: T) -> Result<(), ClosedChannel<T>> {
    let mut guard: MutexGuard<'_, SlotState<T>> = self.lock();

    wait_while(&self.inner.not_full, &mut guard, "rendezvous::deposit", |state| {
      state.item.is_some() && !state.closed
    });

    if guard.closed {
      return Err(ClosedChannel::new(item));
    }

    guard.item = Some(item);

    drop(guard);

    trace!(target: "picalc", "rendezvous deposit");

    self.inner.not_empty.notify_one();

    Ok(())
  }

  /// Closes the rendezvous and wakes every blocked caller.
  pub fn close(&self) {
    let mut guard: MutexGuard<'_, SlotState<T>> = self.lock();

    if guard.closed {
      return;
    }

    guard.closed = true;

    trace!(target: "picalc", occupied = guard.item.is_some(), "rendezvous closed");

    drop(guard);

    self.inner.not_empty.notify_all();
    self.inner.not_full.notify_all();
  }

  #[inline]
  fn lock(&self) -> MutexGuard<'_, SlotState<T>> {
    self.inner.state.lock()
  }
}

// -----------------------------------------------------------------------------
// Process Builders
// -----------------------------------------------------------------------------

impl<T, R> Rendezvous<T, R>
where
  T: Send + 'static,
  R: Send + 'static,
{
  /// Builds a process taking one item into `target`.
  ///
  /// Raises a `Closed` exception if the rendezvous is closed and empty.
  pub fn take_into(&self, target: &Cell<R>) -> Process {
    let this: Self = self.clone();
    let target: Cell<R> = target.clone();

    Process::new(move || target.set(this.receive()))
  }

  /// Builds a process depositing the current value of `source`.
  ///
  /// Raises a `Closed` exception if the rendezvous is closed.
  pub fn deposit_from(&self, source: &Cell<T>) -> Process
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

impl<T, R> Clone for Rendezvous<T, R> {
  #[inline]
  fn clone(&self) -> Self {
    Self {
      inner: Arc::clone(&self.inner),
    }
  }
}

impl<T, R> Debug for Rendezvous<T, R> {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    let guard: MutexGuard<'_, SlotState<T>> = self.lock();

    f.debug_struct("Rendezvous")
      .field("full", &guard.item.is_some())
      .field("closed", &guard.closed)
      .finish()
  }
}

impl<T> Default for Rendezvous<T>
where
  T: 'static,
{
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<T, R> Source<R> for Rendezvous<T, R>
where
  T: Send,
  R: Send,
{
  fn receive(&self) -> R {
    match self.take() {
      Ok(item) => item,
      Err(error) => raise!(Error, Closed, error),
    }
  }
}

impl<T, R> Sink<T> for Rendezvous<T, R>
where
  T: Send,
  R: Send,
{
  fn send(&self, item: T) {
    if let Err(error) = self.deposit(item) {
      raise!(Error, Closed, error);
    }
  }
}

impl<T> Payload<T> for Rendezvous<T>
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
