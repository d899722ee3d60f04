use std::time::Duration;

// -----------------------------------------------------------------------------
// Channels
// -----------------------------------------------------------------------------

/// Capacity of a [`Queue`] built with [`Queue::default`].
///
/// [`Queue`]: crate::chan::Queue
/// [`Queue::default`]: crate::chan::Queue::default
pub const DEFAULT_QUEUE_CAPACITY: usize = 10;

/// Capacity of a [`Rendezvous`] slot.
///
/// [`Rendezvous`]: crate::chan::Rendezvous
pub const RENDEZVOUS_CAPACITY: usize = 1;

/// How long a channel wait may block before a deadlock is suspected.
///
/// `None` disables the diagnostic.
pub const DEFAULT_DEADLOCK_WARNING: Option<Duration> = None;

// -----------------------------------------------------------------------------
// Threads
// -----------------------------------------------------------------------------

/// Prefix of the names given to threads spawned by the runtime.
pub const DEFAULT_THREAD_NAME: &str = "picalc";

/// Stack size (in bytes) for threads spawned by the runtime.
pub const DEFAULT_THREAD_STACK_SIZE: usize = 2 * 1024 * 1024;

/// Number of pre-allocated branches in a [`Parallel`] or [`Sequence`].
///
/// [`Parallel`]: crate::proc::Parallel
/// [`Sequence`]: crate::proc::Sequence
pub const CAP_PROCESS_LIST: usize = 4;
