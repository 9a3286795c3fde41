//! Opt-in prompt flow.

use crate::capability::NotifyError;
use crate::permission::{PermissionDecision, PermissionState};

/// Outcome of one prompt interaction, for the renderer to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Permission granted.
    Enabled,
    /// Permission denied. Informational, not an error.
    Denied,
    /// The request failed at the capability. Non-fatal.
    Failed,
}

/// State of the notification opt-in prompt.
///
/// The prompt is offered only while the permission state is undecided. It
/// is hidden by an explicit dismissal or by any request resolution, and
/// stays visible for as long as a pending request has no answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationPrompt {
    visible: bool,
}

impl NotificationPrompt {
    /// Build the prompt for a capability's current state.
    pub fn for_state(state: PermissionState) -> Self {
        Self {
            visible: state.is_undecided(),
        }
    }

    /// Whether the opt-in card should be shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Hide the prompt without requesting ("Not now").
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    /// Consume one request resolution and hide the prompt, whatever the
    /// answer was.
    pub fn resolve(
        &mut self,
        result: Result<PermissionDecision, NotifyError>,
    ) -> PromptOutcome {
        let outcome = match result {
            Ok(PermissionDecision::Granted) => {
                tracing::debug!("notification permission granted");
                PromptOutcome::Enabled
            }
            Ok(PermissionDecision::Denied) => {
                tracing::debug!("notification permission denied");
                PromptOutcome::Denied
            }
            Err(error) => {
                tracing::warn!(%error, "notification permission request failed");
                PromptOutcome::Failed
            }
        };
        self.visible = false;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::NotificationCapability;
    use async_trait::async_trait;

    enum Answer {
        Grant,
        Deny,
        Fail,
    }

    struct FixedCapability {
        state: PermissionState,
        answer: Answer,
    }

    #[async_trait(?Send)]
    impl NotificationCapability for FixedCapability {
        fn state(&self) -> PermissionState {
            self.state
        }

        async fn request(&self) -> Result<PermissionDecision, NotifyError> {
            match self.answer {
                Answer::Grant => Ok(PermissionDecision::Granted),
                Answer::Deny => Ok(PermissionDecision::Denied),
                Answer::Fail => Err(NotifyError::RequestRejected("blocked by policy".into())),
            }
        }
    }

    #[test]
    fn test_prompt_offered_only_when_undecided() {
        assert!(NotificationPrompt::for_state(PermissionState::Default).is_visible());
        assert!(!NotificationPrompt::for_state(PermissionState::Unsupported).is_visible());
        assert!(!NotificationPrompt::for_state(PermissionState::Granted).is_visible());
        assert!(!NotificationPrompt::for_state(PermissionState::Denied).is_visible());
    }

    #[test]
    fn test_dismiss_hides_without_a_request() {
        let mut prompt = NotificationPrompt::for_state(PermissionState::Default);
        prompt.dismiss();
        assert!(!prompt.is_visible());
    }

    #[tokio::test]
    async fn test_granted_request_enables_and_hides() {
        let capability = FixedCapability {
            state: PermissionState::Default,
            answer: Answer::Grant,
        };
        let mut prompt = NotificationPrompt::for_state(capability.state());
        assert!(prompt.is_visible());

        let outcome = prompt.resolve(capability.request().await);
        assert_eq!(outcome, PromptOutcome::Enabled);
        assert!(!prompt.is_visible());
    }

    #[tokio::test]
    async fn test_denied_request_hides_anyway() {
        let capability = FixedCapability {
            state: PermissionState::Default,
            answer: Answer::Deny,
        };
        let mut prompt = NotificationPrompt::for_state(capability.state());

        let outcome = prompt.resolve(capability.request().await);
        assert_eq!(outcome, PromptOutcome::Denied);
        assert!(!prompt.is_visible());
    }

    #[tokio::test]
    async fn test_capability_failure_is_caught_and_hides() {
        let capability = FixedCapability {
            state: PermissionState::Default,
            answer: Answer::Fail,
        };
        let mut prompt = NotificationPrompt::for_state(capability.state());

        let outcome = prompt.resolve(capability.request().await);
        assert_eq!(outcome, PromptOutcome::Failed);
        assert!(!prompt.is_visible());
    }
}
