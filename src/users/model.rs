//! User domain model — the snapshot the onboarding engine derives state from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::onboarding::OnboardingStep;

/// Platform role. Every role-dependent decision in the crate is an
/// exhaustive match over this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Client,
    Agent,
    Inspector,
    CompanyAdmin,
    PlatformAdmin,
}

impl Role {
    /// All roles, in a fixed order.
    pub const ALL: [Role; 5] = [
        Role::Client,
        Role::Agent,
        Role::Inspector,
        Role::CompanyAdmin,
        Role::PlatformAdmin,
    ];
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Client => "CLIENT",
            Self::Agent => "AGENT",
            Self::Inspector => "INSPECTOR",
            Self::CompanyAdmin => "COMPANY_ADMIN",
            Self::PlatformAdmin => "PLATFORM_ADMIN",
        };
        write!(f, "{s}")
    }
}

/// Review status for email and identity verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    NotStarted,
    Pending,
    Verified,
    Rejected,
}

impl Default for VerificationStatus {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// Review status for uploaded documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentsStatus {
    NotStarted,
    UnderReview,
    Approved,
    Rejected,
}

impl Default for DocumentsStatus {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// A user record as loaded from storage.
///
/// The onboarding engine only ever reads this; flag transitions (marking the
/// email verified, approving documents) belong to the external verification
/// subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub role: Role,
    pub email_verification: VerificationStatus,
    pub phone_verified: bool,
    pub profile_setup_completed: bool,
    pub identity_verification: VerificationStatus,
    pub documents_verification: DocumentsStatus,
    pub terms_accepted: bool,
    pub privacy_policy_accepted: bool,
    pub onboarding_completed: bool,
    /// Last step the user was shown, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onboarding_step: Option<OnboardingStep>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// A fresh user with no verification progress.
    pub fn new(role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            email_verification: VerificationStatus::default(),
            phone_verified: false,
            profile_setup_completed: false,
            identity_verification: VerificationStatus::default(),
            documents_verification: DocumentsStatus::default(),
            terms_accepted: false,
            privacy_policy_accepted: false,
            onboarding_completed: false,
            onboarding_step: None,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_has_no_progress() {
        let user = User::new(Role::Client);
        assert_eq!(user.email_verification, VerificationStatus::NotStarted);
        assert!(!user.phone_verified);
        assert!(!user.profile_setup_completed);
        assert_eq!(user.documents_verification, DocumentsStatus::NotStarted);
        assert!(!user.onboarding_completed);
        assert!(user.onboarding_step.is_none());
    }

    #[test]
    fn role_display_matches_serde() {
        for role in Role::ALL {
            let display = format!("{role}");
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(
                format!("\"{display}\""),
                json,
                "Display and serde should match for {role:?}"
            );
        }
    }

    #[test]
    fn status_enums_use_wire_casing() {
        let verified: VerificationStatus = serde_json::from_str("\"VERIFIED\"").unwrap();
        assert_eq!(verified, VerificationStatus::Verified);

        let docs: DocumentsStatus = serde_json::from_str("\"UNDER_REVIEW\"").unwrap();
        assert_eq!(docs, DocumentsStatus::UnderReview);

        // UNDER_REVIEW belongs to the documents enum only
        assert!(serde_json::from_str::<VerificationStatus>("\"UNDER_REVIEW\"").is_err());
    }

    #[test]
    fn user_serde_roundtrip() {
        let mut user = User::new(Role::Agent);
        user.email_verification = VerificationStatus::Verified;
        user.onboarding_step = Some(OnboardingStep::ProfileSetup);

        let json = serde_json::to_string(&user).unwrap();
        let parsed: User = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.role, Role::Agent);
        assert_eq!(parsed.email_verification, VerificationStatus::Verified);
        assert_eq!(parsed.onboarding_step, Some(OnboardingStep::ProfileSetup));
    }
}
