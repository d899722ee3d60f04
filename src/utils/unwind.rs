use std::panic;
use std::panic::AssertUnwindSafe;

use crate::error::BranchFailure;

/// Runs `f`, capturing a panic as the failure of `branch`.
///
/// Processes only share state through locked cells and channels, so
/// observing that state after a caught panic is sound.
#[inline]
pub(crate) fn catch_branch<F>(branch: usize, f: F) -> Result<(), BranchFailure>
where
  F: FnOnce(),
{
  panic::catch_unwind(AssertUnwindSafe(f))
    .map_err(|payload| BranchFailure::from_payload(branch, payload.as_ref()))
}
