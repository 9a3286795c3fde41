//! Browser notification capability.

use async_trait::async_trait;
use shopnow_notify::{NotificationCapability, NotifyError, PermissionDecision, PermissionState};

/// Notification capability backed by the browser `Notification` API.
///
/// On non-wasm targets the capability reports `Unsupported`, so the opt-in
/// prompt is never offered.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNotifications;

#[async_trait(?Send)]
impl NotificationCapability for BrowserNotifications {
    fn state(&self) -> PermissionState {
        imp::state()
    }

    async fn request(&self) -> Result<PermissionDecision, NotifyError> {
        imp::request().await
    }
}

#[cfg(target_arch = "wasm32")]
mod imp {
    use super::*;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Notification, NotificationPermission};

    pub fn state() -> PermissionState {
        let Some(window) = web_sys::window() else {
            return PermissionState::Unsupported;
        };
        let has_api = js_sys::Reflect::has(&window, &JsValue::from_str("Notification"))
            .unwrap_or(false);
        if !has_api {
            return PermissionState::Unsupported;
        }
        match Notification::permission() {
            NotificationPermission::Default => PermissionState::Default,
            NotificationPermission::Granted => PermissionState::Granted,
            NotificationPermission::Denied => PermissionState::Denied,
            _ => PermissionState::Unsupported,
        }
    }

    pub async fn request() -> Result<PermissionDecision, NotifyError> {
        let promise = Notification::request_permission()
            .map_err(|e| NotifyError::RequestRejected(format!("{e:?}")))?;
        let decision = JsFuture::from(promise)
            .await
            .map_err(|e| NotifyError::RequestRejected(format!("{e:?}")))?;
        match decision.as_string().as_deref() {
            Some("granted") => Ok(PermissionDecision::Granted),
            _ => Ok(PermissionDecision::Denied),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use super::*;

    pub fn state() -> PermissionState {
        PermissionState::Unsupported
    }

    pub async fn request() -> Result<PermissionDecision, NotifyError> {
        Err(NotifyError::Unsupported)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_capability_is_unsupported_off_the_browser() {
        assert_eq!(BrowserNotifications.state(), PermissionState::Unsupported);
    }
}
