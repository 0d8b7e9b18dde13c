//! One-shot device-geolocation requests.
//!
//! The device location API is an external collaborator, reached through
//! the `GeoLocator` trait. A locate request either produces a single
//! fix or fails with a user-visible notice; there is no automatic retry
//! and a failure never clears a previously acquired fix (that policy is
//! enforced in `view::ViewState::apply_locate`).

use async_trait::async_trait;

use crate::model::{LocateError, UserPosition};

/// Device-geolocation collaborator. One call, one fix or one error.
#[async_trait(?Send)]
pub trait GeoLocator {
    async fn locate(&self) -> Result<UserPosition, LocateError>;
}

/// User-facing notice text for a failed locate request.
pub fn locate_notice(err: &LocateError) -> String {
    match err {
        LocateError::Denied => "Location access denied".to_string(),
        LocateError::Unavailable(reason) => format!("Could not determine location: {reason}"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
