//! Shared mutable cells used as bindable names.
//!
//! A [`Cell`] is a handle to one lock-protected value. Cloning a cell
//! yields an alias: every handle reads and writes the same storage, which
//! lives as long as the longest-lived handle.
//!
//! # Binding
//!
//! Cells build communication processes in two directions, following the
//! process-calculus reading of `x(y)` (receive on `x` into `y`) and `x[y]`
//! (send `y` on `x`):
//!
//! - [`Cell::call`]: `x(y)`
//! - [`Cell::index`]: `x[y]`
//!
//! What a bind does depends on the [`Capability`] the payload reports
//! through [`Payload`]. Plain values are copied between cells; channel
//! payloads such as [`Queue`] and [`Rendezvous`] communicate through
//! themselves instead.
//!
//! [`Queue`]: crate::chan::Queue
//! [`Rendezvous`]: crate::chan::Rendezvous

mod cell;
mod payload;

pub use self::cell::Cell;
pub use self::payload::Bind;
pub use self::payload::Capability;
pub use self::payload::Payload;
