//! Channels and channel adapters.
//!
//! # Primitives
//!
//! - [`Rendezvous`]: single-slot synchronous hand-off
//! - [`Queue`]: bounded FIFO buffer
//!
//! Both follow the classic bounded-buffer protocol: one lock and two wait
//! conditions (not-empty and not-full). Both can be closed, which wakes
//! every blocked caller.
//!
//! # Adapters
//!
//! Any [`Source`] or [`Sink`] (including plain closures) becomes a process
//! once it is bound to a [`Cell`]:
//!
//! ```
//! use picalc::cell::Cell;
//! use picalc::chan::InputChannel;
//! use picalc::chan::OutputChannel;
//!
//! let value: Cell<i32> = Cell::new(0);
//! let input = InputChannel::new(|| 42);
//! let output = OutputChannel::new(|x: i32| assert_eq!(x, 42));
//!
//! let process = input.bind(&value) * output.bind(&value);
//! process.invoke();
//! ```
//!
//! [`Cell`]: crate::cell::Cell

mod adapter;
mod queue;
mod rendezvous;
mod source;
mod wait;

pub use self::adapter::In;
pub use self::adapter::InputChannel;
pub use self::adapter::Out;
pub use self::adapter::OutputChannel;
pub use self::queue::Queue;
pub use self::rendezvous::Rendezvous;
pub use self::source::Sink;
pub use self::source::Source;
