//! picalc - pi-calculus style concurrency primitives for Rust.
//!
//! picalc provides composable processes (sequence, parallel, replication,
//! conditional, restriction), shared cells used as bindable names, and two
//! blocking channels (a single-slot rendezvous and a bounded queue), all
//! running on platform threads.
//!
//! # Quick Start
//!
//! ```
//! use picalc::cell::Cell;
//! use picalc::chan::Queue;
//! use picalc::init;
//!
//! let queue: Queue<i32> = Queue::new(2).unwrap();
//! let a: Cell<i32> = Cell::new(7);
//! let b: Cell<i32> = Cell::new(0);
//!
//! let process = queue.push_from(&a) * queue.pop_into(&b);
//!
//! init::run(process).unwrap();
//! assert_eq!(b.get(), 7);
//! ```
//!
//! # Core Modules
//!
//! - [`proc`]: Processes and composition operators
//! - [`cell`]: Shared cells and capability-dispatched binds
//! - [`chan`]: Channels and channel adapters
//! - [`init`]: Runtime initialization and entry point
//! - [`runtime`]: Runtime configuration
//! - [`error`]: Exception system
//! - [`consts`]: Runtime configuration constants

mod loom;
mod utils;

pub mod cell;
pub mod chan;
pub mod consts;
pub mod error;
pub mod init;
pub mod proc;
pub mod runtime;
