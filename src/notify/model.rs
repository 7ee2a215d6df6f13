//! Notification payloads pushed to dashboard clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What happened, from the dashboard's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    InspectionScheduled,
    InspectionCompleted,
    ListingStatusChanged,
    OnboardingStepCompleted,
    DocumentReviewUpdated,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::InspectionScheduled => "inspection_scheduled",
            Self::InspectionCompleted => "inspection_completed",
            Self::ListingStatusChanged => "listing_status_changed",
            Self::OnboardingStepCompleted => "onboarding_step_completed",
            Self::DocumentReviewUpdated => "document_review_updated",
        };
        write!(f, "{s}")
    }
}

/// A single server-push notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    /// Target user; `None` broadcasts to everyone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<Uuid>,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            recipient: None,
            title: title.into(),
            body: body.into(),
            created_at: Utc::now(),
        }
    }

    /// Address the notification to a single user.
    pub fn for_user(mut self, user_id: Uuid) -> Self {
        self.recipient = Some(user_id);
        self
    }

    /// Whether a stream subscribed as `viewer` should receive this.
    ///
    /// An anonymous stream (no viewer id) only sees broadcasts.
    pub fn is_visible_to(&self, viewer: Option<Uuid>) -> bool {
        match self.recipient {
            None => true,
            Some(recipient) => viewer == Some(recipient),
        }
    }
}
