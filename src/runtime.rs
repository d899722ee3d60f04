use std::sync::LazyLock;
use std::sync::OnceLock;
use std::time::Duration;

use crate::consts;

static CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();
static DEFAULT: LazyLock<RuntimeConfig> = LazyLock::new(RuntimeConfig::new);

// -----------------------------------------------------------------------------
// Runtime
// -----------------------------------------------------------------------------

/// Process-wide runtime API.
pub struct Runtime;

impl Runtime {
  /// Returns the installed runtime configuration.
  ///
  /// Falls back to [`RuntimeConfig::default`] until one is installed.
  /// Reading never installs anything.
  #[inline]
  pub fn config() -> &'static RuntimeConfig {
    match CONFIG.get() {
      Some(config) => config,
      None => LazyLock::force(&DEFAULT),
    }
  }

  /// Returns `true` if a configuration has been installed.
  #[inline]
  pub fn is_configured() -> bool {
    CONFIG.get().is_some()
  }

  /// Installs `config` as the process-wide configuration.
  ///
  /// Returns the rejected configuration if one is already installed.
  pub(crate) fn install(config: RuntimeConfig) -> Result<(), RuntimeConfig> {
    CONFIG.set(config)
  }
}

// -----------------------------------------------------------------------------
// Runtime Config
// -----------------------------------------------------------------------------

#[derive(Clone, Debug)]
pub struct RuntimeConfig {
  // ---------------------------------------------------------------------------
  // Thread Configuration
  // ---------------------------------------------------------------------------
  pub rt_thread_name: String,
  pub rt_thread_stack_size: usize,
  // ---------------------------------------------------------------------------
  // Channel Configuration
  // ---------------------------------------------------------------------------
  pub rt_queue_capacity: usize,
  pub rt_deadlock_warning: Option<Duration>,
  // ---------------------------------------------------------------------------
  // Tracing Subscriber Configuration
  // ---------------------------------------------------------------------------
  pub tracing_source_file: bool,
  pub tracing_source_line: bool,
  pub tracing_source_name: bool,
  pub tracing_thread_info: bool,
  pub tracing_verbose: bool,
  pub tracing_very_verbose: bool,
}

impl RuntimeConfig {
  #[inline]
  pub fn new() -> Self {
    Self {
      rt_thread_name: consts::DEFAULT_THREAD_NAME.to_owned(),
      rt_thread_stack_size: consts::DEFAULT_THREAD_STACK_SIZE,
      rt_queue_capacity: consts::DEFAULT_QUEUE_CAPACITY,
      rt_deadlock_warning: consts::DEFAULT_DEADLOCK_WARNING,
      tracing_source_file: false,
      tracing_source_line: false,
      tracing_source_name: false,
      tracing_thread_info: true,
      tracing_verbose: false,
      tracing_very_verbose: false,
    }
  }

  #[inline]
  pub const fn tracing_filter(&self) -> tracing::Level {
    if self.tracing_very_verbose {
      tracing::Level::TRACE
    } else if self.tracing_verbose {
      tracing::Level::DEBUG
    } else {
      tracing::Level::INFO
    }
  }
}

impl Default for RuntimeConfig {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
