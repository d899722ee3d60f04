use std::io;
use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering;
use std::thread::Builder;
use std::thread::JoinHandle;

use crate::runtime::Runtime;
use crate::runtime::RuntimeConfig;

/// Spawns a named platform thread using the installed runtime configuration.
pub(crate) fn spawn<F, T>(f: F) -> io::Result<JoinHandle<T>>
where
  F: FnOnce() -> T + Send + 'static,
  T: Send + 'static,
{
  let config: &RuntimeConfig = Runtime::config();

  Builder::new()
    .name(next_thread_name(&config.rt_thread_name))
    .stack_size(config.rt_thread_stack_size)
    .spawn(f)
}

/// Generates a unique name for the next spawned thread.
#[inline]
fn next_thread_name(prefix: &str) -> String {
  format!("{prefix}-{:0>2}", next_thread_id())
}

#[inline]
fn next_thread_id() -> u32 {
  static ID: AtomicU32 = AtomicU32::new(1);
  ID.fetch_add(1, Ordering::Relaxed)
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use std::thread;

  use super::next_thread_name;
  use super::spawn;

  #[test]
  fn test_thread_names_are_unique() {
    let a: String = next_thread_name("test");
    let b: String = next_thread_name("test");

    assert!(a.starts_with("test-"));
    assert_ne!(a, b);
  }

  #[test]
  fn test_spawn_names_thread() {
    let name: Option<String> = spawn(|| thread::current().name().map(str::to_owned))
      .unwrap()
      .join()
      .unwrap();

    assert!(name.unwrap().starts_with("picalc-"));
  }
}
