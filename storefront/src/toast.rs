//! Transient acknowledgment messages.

use shopnow_commerce::CartEvent;
use shopnow_notify::PromptOutcome;

/// Visual flavor of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One transient message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Toast queue with monotonically increasing ids.
///
/// Toasts stay until dismissed; there is no timer.
#[derive(Debug, Default)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
    }

    /// Map a cart acknowledgment to its toast. Quantity updates have none.
    pub fn push_cart_event(&mut self, event: &CartEvent) {
        match event {
            CartEvent::Added { name, .. } => {
                self.push(ToastKind::Success, format!("{name} added to cart"));
            }
            CartEvent::Removed { .. } => {
                self.push(ToastKind::Success, "Item removed from cart");
            }
            CartEvent::QuantitySet { .. } => {}
        }
    }

    /// Map a prompt outcome to its toast.
    pub fn push_prompt_outcome(&mut self, outcome: PromptOutcome) {
        match outcome {
            PromptOutcome::Enabled => self.push(
                ToastKind::Success,
                "Notifications enabled! You'll get updates on new products and offers.",
            ),
            PromptOutcome::Denied => {
                self.push(ToastKind::Error, "Notification permission denied");
            }
            PromptOutcome::Failed => {
                self.push(ToastKind::Error, "Could not enable notifications");
            }
        }
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopnow_commerce::ProductId;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();
        queue.push(ToastKind::Success, "one");
        queue.push(ToastKind::Error, "two");
        assert_eq!(queue.toasts()[0].id, 0);
        assert_eq!(queue.toasts()[1].id, 1);
    }

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        let mut queue = ToastQueue::default();
        queue.push(ToastKind::Success, "one");
        queue.push(ToastKind::Success, "two");
        queue.dismiss(0);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].message, "two");
    }

    #[test]
    fn test_cart_events_map_to_messages() {
        let mut queue = ToastQueue::default();
        queue.push_cart_event(&CartEvent::Added {
            id: ProductId::new(1),
            name: "Smart Watch Pro".to_string(),
        });
        queue.push_cart_event(&CartEvent::QuantitySet {
            id: ProductId::new(1),
            quantity: 2,
        });
        queue.push_cart_event(&CartEvent::Removed {
            id: ProductId::new(1),
            name: "Smart Watch Pro".to_string(),
        });

        let messages: Vec<&str> = queue.toasts().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(
            messages,
            ["Smart Watch Pro added to cart", "Item removed from cart"]
        );
    }
}
