use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::mem;
use triomphe::Arc;

use crate::cell::Bind;
use crate::cell::Capability;
use crate::cell::Payload;
use crate::chan::Sink;
use crate::chan::Source;
use crate::loom::sync::Mutex;
use crate::proc::Process;
use crate::raise;

/// A shared, lock-protected value holder.
///
/// Every access locks the cell for the duration of that single access.
/// Sequences of accesses are *not* atomic: a read followed by a write may
/// interleave with writes from other threads. Use [`Cell::with_mut`] when
/// a read-modify-write must be atomic.
pub struct Cell<T> {
  inner: Arc<Mutex<T>>,
}

impl<T> Cell<T> {
  /// Creates a new `Cell` holding `value`.
  #[inline]
  pub fn new(value: T) -> Self {
    Self {
      inner: Arc::new(Mutex::new(value)),
    }
  }

  /// Replaces the value, visible through every alias.
  #[inline]
  pub fn set(&self, value: T) {
    *self.inner.lock() = value;
  }

  /// Replaces the value, returning the previous one.
  #[inline]
  pub fn replace(&self, value: T) -> T {
    mem::replace(&mut *self.inner.lock(), value)
  }

  /// Calls `f` with a shared reference to the value, under the lock.
  #[inline]
  pub fn with<F, R>(&self, f: F) -> R
  where
    F: FnOnce(&T) -> R,
  {
    f(&self.inner.lock())
  }

  /// Calls `f` with a mutable reference to the value, under the lock.
  #[inline]
  pub fn with_mut<F, R>(&self, f: F) -> R
  where
    F: FnOnce(&mut T) -> R,
  {
    f(&mut self.inner.lock())
  }

  /// Returns `true` if both handles alias the same storage.
  #[inline]
  pub fn ptr_eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.inner, &other.inner)
  }

  /// Returns a copy of the value.
  #[inline]
  pub fn get(&self) -> T
  where
    T: Clone,
  {
    self.inner.lock().clone()
  }

  /// Takes the value, leaving `T::default()` in its place.
  #[inline]
  pub fn take(&self) -> T
  where
    T: Default,
  {
    mem::take(&mut *self.inner.lock())
  }

  /// Resets the value to `T::default()`.
  #[inline]
  pub fn reset(&self)
  where
    T: Default,
  {
    self.set(T::default());
  }

  /// Returns a handle to new storage holding a copy of the value.
  ///
  /// The returned cell no longer aliases `self`.
  #[inline]
  pub fn detach(&self) -> Self
  where
    T: Clone,
  {
    Self::new(self.get())
  }
}

// -----------------------------------------------------------------------------
// Process Builders
// -----------------------------------------------------------------------------

impl<T> Cell<T>
where
  T: Send + 'static,
{
  /// Builds a process assigning `value` to this cell.
  pub fn put(&self, value: T) -> Process
  where
    T: Clone + Sync,
  {
    let this: Self = self.clone();
    Process::new(move || this.set(value.clone()))
  }

  /// Builds a process copying the value of `from` into this cell.
  pub fn receive<U>(&self, from: &Cell<U>) -> Process
  where
    U: Clone + Into<T> + Send + 'static,
  {
    let this: Self = self.clone();
    let from: Cell<U> = from.clone();

    Process::new(move || {
      let value: T = from.get().into();
      this.set(value);
    })
  }

  /// Builds a process copying the value of this cell into `to`.
  pub fn send<U>(&self, to: &Cell<U>) -> Process
  where
    T: Clone + Into<U>,
    U: Send + 'static,
  {
    let this: Self = self.clone();
    let to: Cell<U> = to.clone();

    Process::new(move || {
      let value: U = this.get().into();
      to.set(value);
    })
  }

  /// Builds the process `self(other)`.
  ///
  /// - [`Capability::Plain`]: copies `other` into this cell.
  /// - [`Capability::Callable`]: receives one value from the payload into
  ///   `other`, blocking without holding either cell's lock.
  /// - [`Capability::Indexable`]: raises a `BadArg` exception when invoked.
  pub fn call<U>(&self, other: &Cell<U>) -> Process
  where
    T: Payload<U>,
    U: Clone + Send + 'static,
  {
    let this: Self = self.clone();
    let other: Cell<U> = other.clone();

    Process::new(move || this.bind_call(&other))
  }

  /// Builds the process `self[other]`.
  ///
  /// - [`Capability::Plain`]: copies this cell into `other`.
  /// - [`Capability::Indexable`]: sends the value of `other` into the
  ///   payload, blocking without holding either cell's lock.
  /// - [`Capability::Callable`]: raises a `BadArg` exception when invoked.
  pub fn index<U>(&self, other: &Cell<U>) -> Process
  where
    T: Payload<U>,
    U: Clone + Send + 'static,
  {
    let this: Self = self.clone();
    let other: Cell<U> = other.clone();

    Process::new(move || this.bind_index(&other))
  }

  fn bind_call<U>(&self, other: &Cell<U>)
  where
    T: Payload<U>,
    U: Clone,
  {
    let source: Option<Box<dyn Source<U>>> = match self.inner.lock().capability(Bind::Call) {
      Capability::Plain(_) => None,
      Capability::Callable(source) => Some(source),
      Capability::Indexable(_) => raise!(Error, BadArg, "cell payload cannot be called"),
    };

    if let Some(source) = source {
      other.set(source.receive());
      return;
    }

    // Read the partner first so the two locks are never held together.
    let value: U = other.get();

    if let Capability::Plain(slot) = self.inner.lock().capability(Bind::Call) {
      *slot = value;
    }
  }

  fn bind_index<U>(&self, other: &Cell<U>)
  where
    T: Payload<U>,
    U: Clone,
  {
    let route: Result<Box<dyn Sink<U>>, U> = match self.inner.lock().capability(Bind::Index) {
      Capability::Plain(slot) => Err(slot.clone()),
      Capability::Indexable(sink) => Ok(sink),
      Capability::Callable(_) => raise!(Error, BadArg, "cell payload cannot be indexed"),
    };

    match route {
      Ok(sink) => sink.send(other.get()),
      Err(value) => other.set(value),
    }
  }
}

impl<T> Clone for Cell<T> {
  #[inline]
  fn clone(&self) -> Self {
    Self {
      inner: Arc::clone(&self.inner),
    }
  }
}

impl<T> Debug for Cell<T>
where
  T: Debug,
{
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    self.with(|value| f.debug_tuple("Cell").field(value).finish())
  }
}

impl<T> Default for Cell<T>
where
  T: Default,
{
  #[inline]
  fn default() -> Self {
    Self::new(T::default())
  }
}

impl<T> From<T> for Cell<T> {
  #[inline]
  fn from(other: T) -> Self {
    Self::new(other)
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
