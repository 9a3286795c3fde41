//! Notification capability boundary for the ShopNow storefront.
//!
//! The browser permission API is external to this repository. This crate
//! models it as a narrow capability: an observable permission state and one
//! suspending request operation that resolves to granted or denied, or
//! fails with a capability error. The prompt flow on top decides when the
//! opt-in card is offered and turns request outcomes into renderer-facing
//! results.

mod capability;
mod permission;
mod prompt;

pub use capability::{NotificationCapability, NotifyError};
pub use permission::{PermissionDecision, PermissionState};
pub use prompt::{NotificationPrompt, PromptOutcome};
