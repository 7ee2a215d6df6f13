//! Onboarding steps and the flag predicates that mark them satisfied.

use serde::{Deserialize, Serialize};

use crate::users::model::{DocumentsStatus, User, VerificationStatus};

/// One stage in the onboarding sequence.
///
/// `Completed` is a stored marker value for `User::onboarding_step`; the
/// requirement catalog only covers the six actionable steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OnboardingStep {
    EmailVerification,
    PhoneVerification,
    ProfileSetup,
    IdentityVerification,
    DocumentUpload,
    TermsAcceptance,
    Completed,
}

impl OnboardingStep {
    /// Whether the user's stored flags satisfy this step.
    ///
    /// This is the authoritative step-to-flag mapping; everything the engine
    /// derives is built on it.
    pub fn is_satisfied_by(&self, user: &User) -> bool {
        match self {
            Self::EmailVerification => user.email_verification == VerificationStatus::Verified,
            Self::PhoneVerification => user.phone_verified,
            Self::ProfileSetup => user.profile_setup_completed,
            Self::IdentityVerification => {
                user.identity_verification == VerificationStatus::Verified
            }
            Self::DocumentUpload => user.documents_verification == DocumentsStatus::Approved,
            Self::TermsAcceptance => user.terms_accepted && user.privacy_policy_accepted,
            Self::Completed => user.onboarding_completed,
        }
    }
}

impl std::fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::EmailVerification => "EMAIL_VERIFICATION",
            Self::PhoneVerification => "PHONE_VERIFICATION",
            Self::ProfileSetup => "PROFILE_SETUP",
            Self::IdentityVerification => "IDENTITY_VERIFICATION",
            Self::DocumentUpload => "DOCUMENT_UPLOAD",
            Self::TermsAcceptance => "TERMS_ACCEPTANCE",
            Self::Completed => "COMPLETED",
        };
        write!(f, "{s}")
    }
}
