//! Call preconditions, checked before any other effect of a public entry

use crate::infrastructure::errors::{Result, RouterError};
use crate::types::Timestamp;

/// Fail with `DeadlineExceeded` when `now` is strictly past `deadline`.
///
/// A call at exactly the deadline instant is still valid; one time unit
/// later it is not.
pub fn check_deadline(now: Timestamp, deadline: Timestamp) -> Result<()> {
    if now > deadline {
        return Err(RouterError::DeadlineExceeded { now, deadline });
    }
    Ok(())
}
