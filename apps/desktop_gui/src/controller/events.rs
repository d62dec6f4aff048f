//! UI actions and notification toasts for the desktop directory view.

use std::time::{Duration, Instant};

use shared::{
    domain::{DepartmentFilter, EmployeeId},
    notification::{Notification, Severity},
};

/// Everything a frame can ask of the directory. Collected while rendering,
/// dispatched once the frame's borrows of the controller are released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    OpenAddForm,
    OpenEditForm(EmployeeId),
    CancelForm,
    SubmitForm,
    Delete(EmployeeId),
    SetDepartmentFilter(DepartmentFilter),
}

impl UiAction {
    pub fn name(&self) -> &'static str {
        match self {
            UiAction::OpenAddForm => "open_add_form",
            UiAction::OpenEditForm(_) => "open_edit_form",
            UiAction::CancelForm => "cancel_form",
            UiAction::SubmitForm => "submit_form",
            UiAction::Delete(_) => "delete",
            UiAction::SetDepartmentFilter(_) => "set_department_filter",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    notification: Notification,
    expires_at: Instant,
}

impl Toast {
    pub fn severity(&self) -> Severity {
        self.notification.severity
    }

    pub fn title(&self) -> &str {
        &self.notification.title
    }

    pub fn message(&self) -> &str {
        &self.notification.message
    }
}

#[derive(Debug)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    ttl: Duration,
}

impl ToastQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            ttl,
        }
    }

    pub fn push_all(&mut self, notifications: impl IntoIterator<Item = Notification>, now: Instant) {
        let expires_at = now + self.ttl;
        self.toasts
            .extend(notifications.into_iter().map(|notification| Toast {
                notification,
                expires_at,
            }));
    }

    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|toast| toast.expires_at > now);
    }

    pub fn dismiss(&mut self, index: usize) {
        if index < self.toasts.len() {
            self.toasts.remove(index);
        }
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Time until the soonest toast expires, for scheduling the next repaint.
    pub fn next_expiry(&self, now: Instant) -> Option<Duration> {
        self.toasts
            .iter()
            .map(|toast| toast.expires_at.saturating_duration_since(now))
            .min()
    }
}
