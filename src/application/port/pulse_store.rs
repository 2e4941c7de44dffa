// SPDX-License-Identifier: MPL-2.0
//! Pulse store port: the external delete operation.

use crate::domain::pulse::{Pulse, UserId};
use crate::error::DeleteError;

/// Settlement of a delete request, reported back to the viewer.
pub type DeleteOutcome = Result<(), DeleteError>;

/// Owner of the pulse sequence.
///
/// The viewer only ever asks for a deletion; the store decides whether it
/// happens and publishes the updated sequence through its own channel.
pub trait PulseStore: Send + Sync {
    /// Deletes `pulse` on behalf of `requested_by`.
    ///
    /// # Errors
    ///
    /// Returns [`DeleteError::NotOwner`] if `requested_by` did not author the
    /// pulse, [`DeleteError::NotFound`] if it is already gone, and
    /// [`DeleteError::Storage`] if the backing storage fails.
    fn delete(&self, pulse: &Pulse, requested_by: Option<&UserId>) -> DeleteOutcome;
}
