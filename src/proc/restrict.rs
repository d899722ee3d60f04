use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::sync::Arc;

use crate::cell::Cell;
use crate::consts::CAP_PROCESS_LIST;
use crate::proc::Process;

/// A name that can be made fresh.
trait Fresh: Send + Sync {
  fn refresh(&self);
}

impl<T> Fresh for Cell<T>
where
  T: Default + Send,
{
  #[inline]
  fn refresh(&self) {
    self.reset();
  }
}

/// Name restriction, `(νx) P`.
///
/// Invoking a restriction resets every named cell to its default value,
/// so a process sequenced after it always starts from fresh names:
///
/// ```
/// use picalc::cell::Cell;
/// use picalc::proc::Restrict;
///
/// let x: Cell<i32> = Cell::new(5);
/// let p = Restrict::new().name(&x) * x.put(1);
///
/// p.invoke();
/// assert_eq!(x.get(), 1);
/// ```
#[derive(Clone)]
pub struct Restrict {
  names: Vec<Arc<dyn Fresh>>,
}

impl Restrict {
  /// Creates a restriction binding no names.
  #[inline]
  pub fn new() -> Self {
    Self {
      names: Vec::with_capacity(CAP_PROCESS_LIST),
    }
  }

  /// Adds `cell` to the restricted names.
  pub fn name<T>(mut self, cell: &Cell<T>) -> Self
  where
    T: Default + Send + 'static,
  {
    self.names.push(Arc::new(cell.clone()));
    self
  }

  /// Returns the number of restricted names.
  #[inline]
  pub fn len(&self) -> usize {
    self.names.len()
  }

  /// Returns `true` if no names are restricted.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.names.is_empty()
  }

  /// Resets every restricted name.
  pub fn invoke(&self) {
    for name in self.names.iter() {
      name.refresh();
    }
  }
}

impl Debug for Restrict {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.debug_struct("Restrict")
      .field("names", &self.names.len())
      .finish()
  }
}

impl Default for Restrict {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl From<Restrict> for Process {
  #[inline]
  fn from(other: Restrict) -> Self {
    Process::new(move || other.invoke())
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use crate::cell::Cell;
  use crate::proc::Process;
  use crate::proc::Restrict;

  #[test]
  fn test_resets_names() {
    let a: Cell<i32> = Cell::new(1);
    let b: Cell<String> = Cell::new(String::from("b"));

    let restrict: Restrict = Restrict::new().name(&a).name(&b);

    assert_eq!(restrict.len(), 2);

    restrict.invoke();

    assert_eq!(a.get(), 0);
    assert_eq!(b.get(), "");
  }

  #[test]
  fn test_fresh_per_invocation() {
    let x: Cell<Vec<i32>> = Cell::default();
    let body: Process = Process::new({
      let x = x.clone();
      move || x.with_mut(|items| items.push(1))
    });

    let process: Process = (Restrict::new().name(&x) * body).into();

    process.invoke();
    process.invoke();

    assert_eq!(x.get(), [1]);
  }

  #[test]
  fn test_empty() {
    let restrict: Restrict = Restrict::default();

    assert!(restrict.is_empty());
    Process::from(restrict).invoke();
  }
}
