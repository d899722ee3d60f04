/// A producer of values, the receiving end of a channel.
///
/// Implemented for every `Fn() -> T` closure.
pub trait Source<T>: Send + Sync {
  /// Produces the next value, blocking if none is available.
  fn receive(&self) -> T;
}

/// A consumer of values, the sending end of a channel.
///
/// Implemented for every `Fn(T)` closure.
pub trait Sink<T>: Send + Sync {
  /// Consumes `item`, blocking if it cannot be accepted yet.
  fn send(&self, item: T);
}

impl<T, F> Source<T> for F
where
  F: Fn() -> T + Send + Sync,
{
  #[inline]
  fn receive(&self) -> T {
    self()
  }
}

impl<T, F> Sink<T> for F
where
  F: Fn(T) + Send + Sync,
{
  #[inline]
  fn send(&self, item: T) {
    self(item)
  }
}
