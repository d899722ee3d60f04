use std::collections::VecDeque;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

use crate::chan::Sink;
use crate::chan::Source;

// -----------------------------------------------------------------------------
// Bind
// -----------------------------------------------------------------------------

/// The direction of a bind on a [`Cell`].
///
/// [`Cell`]: crate::cell::Cell
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Bind {
  /// `x(y)`, built by [`Cell::call`].
  ///
  /// [`Cell::call`]: crate::cell::Cell::call
  Call,
  /// `x[y]`, built by [`Cell::index`].
  ///
  /// [`Cell::index`]: crate::cell::Cell::index
  Index,
}

// -----------------------------------------------------------------------------
// Capability
// -----------------------------------------------------------------------------

/// How a cell payload takes part in a bind.
pub enum Capability<'a, U> {
  /// The payload is a plain value, copied to or from the partner cell.
  Plain(&'a mut U),
  /// The payload yields values; `x(y)` receives from it into `y`.
  Callable(Box<dyn Source<U>>),
  /// The payload absorbs values; `x[y]` sends `y` into it.
  Indexable(Box<dyn Sink<U>>),
}

impl<U> Capability<'_, U> {
  /// Returns `true` if the capability is [`Capability::Plain`].
  #[inline]
  pub const fn is_plain(&self) -> bool {
    matches!(self, Self::Plain(_))
  }
}

impl<U> Debug for Capability<'_, U> {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    match self {
      Self::Plain(_) => f.write_str("Plain"),
      Self::Callable(_) => f.write_str("Callable"),
      Self::Indexable(_) => f.write_str("Indexable"),
    }
  }
}

// -----------------------------------------------------------------------------
// Payload
// -----------------------------------------------------------------------------

/// A value that can be stored in a [`Cell`] bound against a `Cell<U>`.
///
/// The payload's author picks the capability. Plain value types opt in
/// with [`plain_payload!`]; channel types hand out their own endpoints.
///
/// `capability` is called with the cell lock held and must not block.
/// Endpoints returned by [`Capability::Callable`] and
/// [`Capability::Indexable`] are used after the lock is released.
///
/// [`Cell`]: crate::cell::Cell
/// [`plain_payload!`]: crate::plain_payload
pub trait Payload<U>: Send + 'static {
  /// Returns the capability used for a bind in the given direction.
  fn capability(&mut self, bind: Bind) -> Capability<'_, U>;
}

/// Implements [`Payload`] for types that are copied by value.
///
/// # Examples
///
/// ```
/// #[derive(Clone, Default)]
/// struct Point {
///   x: i32,
///   y: i32,
/// }
///
/// picalc::plain_payload!(Point);
/// ```
///
/// [`Payload`]: crate::cell::Payload
#[macro_export]
macro_rules! plain_payload {
  ($($ty:ty),+ $(,)?) => {
    $(
      impl $crate::cell::Payload<$ty> for $ty {
        #[inline]
        fn capability(&mut self, _bind: $crate::cell::Bind) -> $crate::cell::Capability<'_, $ty> {
          $crate::cell::Capability::Plain(self)
        }
      }
    )+
  };
}

plain_payload!(
  (),
  bool,
  char,
  f32,
  f64,
  i8,
  i16,
  i32,
  i64,
  i128,
  isize,
  u8,
  u16,
  u32,
  u64,
  u128,
  usize,
  String,
);

impl<T> Payload<Option<T>> for Option<T>
where
  T: Send + 'static,
{
  #[inline]
  fn capability(&mut self, _bind: Bind) -> Capability<'_, Option<T>> {
    Capability::Plain(self)
  }
}

impl<T> Payload<Vec<T>> for Vec<T>
where
  T: Send + 'static,
{
  #[inline]
  fn capability(&mut self, _bind: Bind) -> Capability<'_, Vec<T>> {
    Capability::Plain(self)
  }
}

impl<T> Payload<VecDeque<T>> for VecDeque<T>
where
  T: Send + 'static,
{
  #[inline]
  fn capability(&mut self, _bind: Bind) -> Capability<'_, VecDeque<T>> {
    Capability::Plain(self)
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
