//! Busy-flag guard shared by the workflows.

use crate::{error::Result, ProfileHubClientError};
use std::sync::atomic::{AtomicBool, Ordering};

/// Holds a workflow's busy flag for the duration of one operation.
///
/// The flag is the moral equivalent of a disabled submit control: a second
/// submission while one is outstanding is rejected, not queued. The flag
/// clears when the guard drops, so a hung remote call keeps it set.
pub(crate) struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        if flag
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(ProfileHubClientError::OperationInFlight);
        }
        Ok(Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_is_rejected_until_the_first_drops() {
        let flag = AtomicBool::new(false);

        let guard = BusyGuard::acquire(&flag).unwrap();
        assert!(matches!(
            BusyGuard::acquire(&flag),
            Err(ProfileHubClientError::OperationInFlight)
        ));

        drop(guard);
        assert!(BusyGuard::acquire(&flag).is_ok());
    }
}
