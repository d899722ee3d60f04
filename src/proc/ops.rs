use std::ops::BitOr;
use std::ops::BitXor;
use std::ops::Mul;
use std::ops::Not;

use crate::proc::Conditional;
use crate::proc::Parallel;
use crate::proc::Process;
use crate::proc::Replication;
use crate::proc::Restrict;
use crate::proc::Sequence;

// -----------------------------------------------------------------------------
// Leaf Operators
// -----------------------------------------------------------------------------

macro_rules! impl_ops {
  ($($ty:ty),+ $(,)?) => {
    $(
      impl<P> Mul<P> for $ty
      where
        P: Into<Process>,
      {
        type Output = Sequence;

        #[inline]
        fn mul(self, other: P) -> Self::Output {
          Sequence::new().then(self).then(other)
        }
      }

      impl<P> BitOr<P> for $ty
      where
        P: Into<Process>,
      {
        type Output = Parallel;

        #[inline]
        fn bitor(self, other: P) -> Self::Output {
          Parallel::new().with(self).with(other)
        }
      }

      impl BitXor<usize> for $ty {
        type Output = Parallel;

        #[inline]
        fn bitxor(self, count: usize) -> Self::Output {
          Parallel::replicate(self, count)
        }
      }

      impl Not for $ty {
        type Output = Replication;

        #[inline]
        fn not(self) -> Self::Output {
          Replication::new(self)
        }
      }
    )+
  };
}

impl_ops!(Process, Replication, Conditional, Restrict);

// -----------------------------------------------------------------------------
// Sequence
// -----------------------------------------------------------------------------

impl<P> Mul<P> for Sequence
where
  P: Into<Process>,
{
  type Output = Sequence;

  #[inline]
  fn mul(self, other: P) -> Self::Output {
    self.then(other)
  }
}

impl<P> BitOr<P> for Sequence
where
  P: Into<Process>,
{
  type Output = Parallel;

  #[inline]
  fn bitor(self, other: P) -> Self::Output {
    Parallel::new().with(self).with(other)
  }
}

impl BitXor<usize> for Sequence {
  type Output = Parallel;

  #[inline]
  fn bitxor(self, count: usize) -> Self::Output {
    Parallel::replicate(self, count)
  }
}

impl Not for Sequence {
  type Output = Replication;

  #[inline]
  fn not(self) -> Self::Output {
    Replication::new(self)
  }
}

// -----------------------------------------------------------------------------
// Parallel
// -----------------------------------------------------------------------------

impl<P> Mul<P> for Parallel
where
  P: Into<Process>,
{
  type Output = Sequence;

  #[inline]
  fn mul(self, other: P) -> Self::Output {
    Sequence::new().then(self).then(other)
  }
}

impl<P> BitOr<P> for Parallel
where
  P: Into<Process>,
{
  type Output = Parallel;

  #[inline]
  fn bitor(self, other: P) -> Self::Output {
    self.with(other)
  }
}

impl BitXor<usize> for Parallel {
  type Output = Parallel;

  #[inline]
  fn bitxor(self, count: usize) -> Self::Output {
    Parallel::replicate(self, count)
  }
}

impl Not for Parallel {
  type Output = Replication;

  #[inline]
  fn not(self) -> Self::Output {
    Replication::new(self)
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
