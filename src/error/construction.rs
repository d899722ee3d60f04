use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

/// Error returned when a primitive is built from invalid parameters.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConstructionError {
  /// A bounded queue was given a capacity of zero.
  ZeroCapacity,
}

impl Display for ConstructionError {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    match self {
      Self::ZeroCapacity => f.write_str("queue capacity must be at least 1"),
    }
  }
}

impl Error for ConstructionError {}
