use std::time::Duration;
use std::time::Instant;
use tracing::warn;

use crate::loom::sync::Condvar;
use crate::loom::sync::MutexGuard;
use crate::runtime::Runtime;

/// Blocks on `condvar` while `blocked` holds for the guarded state.
///
/// If a deadlock warning threshold is configured, a wait outlasting it
/// logs one warning and keeps waiting.
pub(crate) fn wait_while<T, F>(
  condvar: &Condvar,
  guard: &mut MutexGuard<'_, T>,
  operation: &'static str,
  blocked: F,
) where
  F: Fn(&T) -> bool,
{
  let Some(threshold) = Runtime::config().rt_deadlock_warning else {
    while blocked(&**guard) {
      condvar.wait(guard);
    }

    return;
  };

  let start: Instant = Instant::now();
  let mut warned: bool = false;

  while blocked(&**guard) {
    if !condvar.wait_for(guard, threshold).timed_out() || warned {
      continue;
    }

    let waited: Duration = start.elapsed();

    if blocked(&**guard) && waited >= threshold {
      warned = true;

      warn!(
        target: "picalc",
        operation,
        waited = ?waited,
        "deadlock suspected: no partner arrived",
      );
    }
  }
}
