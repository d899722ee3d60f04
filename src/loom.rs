#[cfg(not(loom))]
pub(crate) mod export {
  pub(crate) mod sync {
    pub(crate) use parking_lot::Condvar;
    pub(crate) use parking_lot::Mutex;
    pub(crate) use parking_lot::MutexGuard;

    pub(crate) mod atomic {
      pub(crate) use std::sync::atomic::AtomicBool;
      pub(crate) use std::sync::atomic::Ordering;
    }
  }
}

#[cfg(loom)]
pub(crate) mod export {
  pub(crate) mod sync {
    pub(crate) use self::shim::Condvar;
    pub(crate) use self::shim::Mutex;
    pub(crate) use self::shim::MutexGuard;

    pub(crate) mod atomic {
      pub(crate) use loom::sync::atomic::AtomicBool;
      pub(crate) use loom::sync::atomic::Ordering;
    }

    // loom mirrors the `std::sync` API; the crate is written against the
    // `parking_lot` one. These wrappers bridge the two.
    mod shim {
      use std::ops::Deref;
      use std::ops::DerefMut;
      use std::sync::PoisonError;
      use std::time::Duration;

      pub(crate) struct Mutex<T> {
        inner: loom::sync::Mutex<T>,
      }

      impl<T> Mutex<T> {
        #[inline]
        pub(crate) fn new(value: T) -> Self {
          Self {
            inner: loom::sync::Mutex::new(value),
          }
        }

        #[inline]
        pub(crate) fn lock(&self) -> MutexGuard<'_, T> {
          MutexGuard {
            inner: Some(self.inner.lock().unwrap_or_else(PoisonError::into_inner)),
          }
        }
      }

      pub(crate) struct MutexGuard<'a, T> {
        inner: Option<loom::sync::MutexGuard<'a, T>>,
      }

      impl<T> Deref for MutexGuard<'_, T> {
        type Target = T;

        #[inline]
        fn deref(&self) -> &Self::Target {
          match self.inner.as_deref() {
            Some(inner) => inner,
            None => unreachable!("guard is only vacant during a condvar wait"),
          }
        }
      }

      impl<T> DerefMut for MutexGuard<'_, T> {
        #[inline]
        fn deref_mut(&mut self) -> &mut Self::Target {
          match self.inner.as_deref_mut() {
            Some(inner) => inner,
            None => unreachable!("guard is only vacant during a condvar wait"),
          }
        }
      }

      #[derive(Clone, Copy, Debug)]
      pub(crate) struct WaitTimeoutResult(bool);

      impl WaitTimeoutResult {
        #[inline]
        pub(crate) fn timed_out(&self) -> bool {
          self.0
        }
      }

      pub(crate) struct Condvar {
        inner: loom::sync::Condvar,
      }

      impl Condvar {
        #[inline]
        pub(crate) fn new() -> Self {
          Self {
            inner: loom::sync::Condvar::new(),
          }
        }

        pub(crate) fn wait<T>(&self, guard: &mut MutexGuard<'_, T>) {
          let Some(inner) = guard.inner.take() else {
            unreachable!("guard is only vacant during a condvar wait");
          };

          guard.inner = Some(self.inner.wait(inner).unwrap_or_else(PoisonError::into_inner));
        }

        // loom has no notion of wall-clock time; a bounded wait is a plain wait.
        pub(crate) fn wait_for<T>(
          &self,
          guard: &mut MutexGuard<'_, T>,
          _timeout: Duration,
        ) -> WaitTimeoutResult {
          self.wait(guard);
          WaitTimeoutResult(false)
        }

        #[inline]
        pub(crate) fn notify_one(&self) -> bool {
          self.inner.notify_one();
          true
        }

        #[inline]
        pub(crate) fn notify_all(&self) -> usize {
          self.inner.notify_all();
          0
        }
      }
    }
  }
}

#[doc(inline)]
pub(crate) use self::export::*;
