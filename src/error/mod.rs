//! Exception handling and error types for the process runtime.
//!
//! Faults inside a running [`Process`] are raised as panics carrying an
//! [`Exception`] payload. Composition operators decide what happens next:
//!
//! - [`Sequence`] lets the fault unwind, so the remaining steps never run.
//! - [`Parallel`] catches it per branch and reports a [`JoinError`] once
//!   every branch has been joined.
//! - [`Replication`] treats a [`Closed`] exception as the end of its input
//!   and stops looping.
//!
//! Blocking channel operations called directly (outside a process) return
//! [`ClosedChannel`] instead of raising.
//!
//! # Raising Exceptions
//!
//! ```
//! use picalc::raise;
//!
//! fn validate(count: usize) {
//!   if count == 0 {
//!     raise!(Error, BadArg, "count must be positive");
//!   }
//! }
//! ```
//!
//! [`Process`]: crate::proc::Process
//! [`Sequence`]: crate::proc::Sequence
//! [`Parallel`]: crate::proc::Parallel
//! [`Replication`]: crate::proc::Replication
//! [`Closed`]: ExceptionGroup::Closed

mod branch;
mod closed;
mod construction;
mod exception;
mod exception_class;
mod exception_group;

pub use self::branch::BranchFailure;
pub use self::branch::JoinError;
pub use self::closed::ClosedChannel;
pub use self::construction::ConstructionError;
pub use self::exception::Exception;
pub use self::exception_class::ExceptionClass;
pub use self::exception_group::ExceptionGroup;

// -----------------------------------------------------------------------------
// raise!
// -----------------------------------------------------------------------------

/// Raises an exception with the specified class, group, and message.
///
/// The [`Exception`] is the panic payload, so join points can recover its
/// group with [`Exception::from_payload`].
///
/// # Examples
///
/// ```
/// # use picalc::raise;
/// # use std::panic;
/// let result = panic::catch_unwind(|| raise!(Error, SysInv, "broken"));
/// assert!(result.is_err());
/// ```
#[macro_export]
macro_rules! raise {
  ($class:ident, $group:ident, $error:expr $(,)?) => {
    ::std::panic::panic_any($crate::error::Exception::new(
      $crate::error::ExceptionClass::$class,
      $crate::error::ExceptionGroup::$group,
      $error,
    ))
  };
}

// -----------------------------------------------------------------------------
// fatal!
// -----------------------------------------------------------------------------

/// Displays a system error message and aborts the program.
///
/// Reserved for broken internal invariants; never for user faults.
macro_rules! fatal {
  ($error:expr) => {{
    ::std::eprintln!(
      "{}:{}: (SysInv) a system invariant has been broken: {}",
      ::std::file!(),
      ::std::line!(),
      $error,
    );

    ::std::process::abort();
  }};
}

pub(crate) use fatal;

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
