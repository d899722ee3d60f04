//! Utility types and functions used throughout the runtime.
//!
//! # Contents
//!
//! - [`spawn`]: Named platform threads configured from [`RuntimeConfig`]
//! - [`catch_branch`]: Panic capture for a single fork-join branch
//! - [`measure_fn`]: Execution timing
//!
//! [`RuntimeConfig`]: crate::runtime::RuntimeConfig

mod measure;
mod thread;
mod unwind;

pub(crate) use self::measure::measure_fn;
pub(crate) use self::thread::spawn;
pub(crate) use self::unwind::catch_branch;
