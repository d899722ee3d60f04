//! Processes and their composition operators.
//!
//! A [`Process`] wraps one zero-argument action. Every operator in this
//! module builds a new process tree out of existing ones; nothing runs
//! until the root is invoked.
//!
//! | Notation | Rust                     | Execution                              |
//! |----------|--------------------------|----------------------------------------|
//! | `0`      | [`Process::nil`]         | does nothing                           |
//! | `P . Q`  | `p * q`                  | [`Sequence`], in order, same thread    |
//! | `P \| Q` | `p \| q`                 | [`Parallel`], one thread per branch    |
//! | `P^n`    | `p ^ n`                  | [`Parallel`] of `n` copies             |
//! | `!P`     | `!p`                     | [`Replication`], until stopped         |
//! | `(νx) P` | `Restrict::new().name(&x) * p` | [`Restrict`], fresh `x` per run |
//!
//! Conditionals are built with [`If`]:
//!
//! ```
//! use picalc::proc::If;
//! use picalc::proc::Process;
//!
//! let branch = If::new(|| true)
//!   .then(Process::new(|| println!("yes")))
//!   .otherwise(Process::new(|| println!("no")));
//!
//! Process::from(branch).invoke();
//! ```

mod conditional;
mod ops;
mod parallel;
mod process;
mod replication;
mod restrict;
mod sequence;

pub use self::conditional::Conditional;
pub use self::conditional::If;
pub use self::parallel::Parallel;
pub use self::process::Process;
pub use self::replication::Replication;
pub use self::replication::StopToken;
pub use self::restrict::Restrict;
pub use self::sequence::Sequence;
