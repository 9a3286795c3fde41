//! Capability trait and error.

use crate::permission::{PermissionDecision, PermissionState};
use async_trait::async_trait;
use thiserror::Error;

/// Notification capability error type.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// The platform rejected the permission request (e.g. blocked by
    /// policy).
    #[error("permission request rejected: {0}")]
    RequestRejected(String),

    /// The capability is absent on this platform.
    #[error("notifications are not supported on this platform")]
    Unsupported,
}

/// External notification-permission capability.
///
/// The request suspends until the user decides; callers must tolerate
/// arbitrary delay, or the user never responding. Not `Send`: browser
/// futures are single-threaded.
#[async_trait(?Send)]
pub trait NotificationCapability {
    /// Current observable permission state.
    fn state(&self) -> PermissionState;

    /// Ask the user for permission.
    async fn request(&self) -> Result<PermissionDecision, NotifyError>;
}
