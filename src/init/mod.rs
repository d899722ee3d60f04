//! Runtime initialization and entry point.
//!
//! [`run`] executes a root process on a dedicated runtime thread after
//! installing the process-wide [`RuntimeConfig`] and the tracing
//! subscriber. Primitives used without going through this module fall
//! back to [`RuntimeConfig::default`].
//!
//! ```
//! use picalc::cell::Cell;
//! use picalc::init;
//!
//! let x: Cell<i32> = Cell::new(0);
//!
//! init::run(x.put(1)).unwrap();
//! assert_eq!(x.get(), 1);
//! ```

use std::time::Duration;
use tracing::Level;
use tracing::Span;
use tracing::debug;
use tracing::error;
use tracing::info;
use tracing::span;

use crate::error::BranchFailure;
use crate::error::Exception;
use crate::proc::Process;
use crate::runtime::Runtime;
use crate::runtime::RuntimeConfig;
use crate::utils::measure_fn;

/// Runs `process` to completion with the default configuration.
///
/// This is the same as calling `run_opts(process, Default::default())`.
#[inline]
pub fn run(process: impl Into<Process>) -> Result<(), BranchFailure> {
  run_opts(process, RuntimeConfig::default())
}

/// Runs `process` to completion on a dedicated runtime thread.
///
/// `config` only takes effect on the first call that installs it; later
/// calls keep the installed configuration.
///
/// # Errors
///
/// Returns the [`BranchFailure`] raised by the process, if any.
pub fn run_opts(process: impl Into<Process>, config: RuntimeConfig) -> Result<(), BranchFailure> {
  install(config);

  let span: Span = span!(target: "picalc", Level::DEBUG, "init::run");
  let process: Process = process.into();

  debug!(target: "picalc", parent: &span, "running");

  let (result, elapsed): (Result<(), BranchFailure>, Duration) = measure_fn(|| process.run());

  match result {
    Ok(()) => {
      info!(
        target: "picalc",
        parent: &span,
        elapsed = ?elapsed,
        "process finished",
      );

      Ok(())
    }
    Err(failure) => {
      error!(
        target: "picalc",
        parent: &span,
        elapsed = ?elapsed,
        error = %failure,
        "process failed",
      );

      Err(failure)
    }
  }
}

/// Installs `config` and the tracing subscriber, once per process.
///
/// Returns `false` if an earlier call already installed a configuration.
pub fn install(config: RuntimeConfig) -> bool {
  if let Err(rejected) = Runtime::install(config) {
    debug!(
      target: "picalc",
      thread_name = %rejected.rt_thread_name,
      "runtime already configured",
    );

    return false;
  }

  if let Err(error) = init_tracing_subscriber(Runtime::config()) {
    eprintln!("failed to set tracing subscriber:");
    eprintln!("    {}", error.error());
  }

  true
}

/// Builds the global tracing subscriber configuration.
#[cfg(feature = "tracing")]
fn init_tracing_subscriber(config: &RuntimeConfig) -> Result<(), Exception> {
  use tracing_subscriber::FmtSubscriber;
  use tracing_subscriber::fmt::format;
  use tracing_subscriber::util::SubscriberInitExt;

  FmtSubscriber::builder()
    .event_format(format().compact())
    .log_internal_errors(true)
    .with_ansi(true)
    .with_file(config.tracing_source_file)
    .with_level(true)
    .with_line_number(config.tracing_source_line)
    .with_max_level(config.tracing_filter())
    .with_target(config.tracing_source_name)
    .with_thread_ids(config.tracing_thread_info)
    .with_thread_names(config.tracing_thread_info)
    .finish()
    .try_init()
    .map_err(error)
}

#[cfg(not(feature = "tracing"))]
fn init_tracing_subscriber(_config: &RuntimeConfig) -> Result<(), Exception> {
  Ok(())
}

/// Returns a generic `SysInv` exception with the given error message.
#[cfg(feature = "tracing")]
#[cold]
fn error<E>(error: E) -> Exception
where
  E: std::fmt::Display,
{
  use crate::error::ExceptionClass;
  use crate::error::ExceptionGroup;

  Exception::new(ExceptionClass::Error, ExceptionGroup::SysInv, error)
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
