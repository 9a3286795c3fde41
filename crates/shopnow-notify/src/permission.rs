//! Permission state model.

use std::fmt;

/// Observable permission state of the notification capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PermissionState {
    /// The platform offers no notification capability at all.
    Unsupported,
    /// Supported, but the user has not decided yet.
    #[default]
    Default,
    /// The user granted permission.
    Granted,
    /// The user denied permission.
    Denied,
}

impl PermissionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionState::Unsupported => "unsupported",
            PermissionState::Default => "default",
            PermissionState::Granted => "granted",
            PermissionState::Denied => "denied",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "unsupported" => Some(PermissionState::Unsupported),
            "default" => Some(PermissionState::Default),
            "granted" => Some(PermissionState::Granted),
            "denied" => Some(PermissionState::Denied),
            _ => None,
        }
    }

    /// Whether the opt-in prompt should be offered at all.
    pub fn is_undecided(&self) -> bool {
        matches!(self, PermissionState::Default)
    }
}

impl fmt::Display for PermissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolution of a single permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionDecision {
    Granted,
    Denied,
}
