use std::error::Error;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

/// Error returned by an operation on a closed [`Queue`] or [`Rendezvous`].
///
/// Sending operations hand the rejected item back; receiving operations
/// carry `()`.
///
/// [`Queue`]: crate::chan::Queue
/// [`Rendezvous`]: crate::chan::Rendezvous
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ClosedChannel<T = ()> {
  item: T,
}

impl ClosedChannel {
  #[inline]
  pub(crate) const fn empty() -> Self {
    Self { item: () }
  }
}

impl<T> ClosedChannel<T> {
  #[inline]
  pub(crate) const fn new(item: T) -> Self {
    Self { item }
  }

  /// Returns the item that could not be sent.
  #[inline]
  pub fn into_inner(self) -> T {
    self.item
  }
}

impl<T> Debug for ClosedChannel<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    f.write_str("ClosedChannel(..)")
  }
}

impl<T> Display for ClosedChannel<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    f.write_str("operation on a closed channel")
  }
}

impl<T> Error for ClosedChannel<T> {}
