//! Onboarding progress system.
//!
//! A user's onboarding status is never stored: it is derived on every read
//! from the verification flags on the [`crate::users::model::User`] record.
//! The static requirement catalog says which steps a role must pass; the
//! progress engine folds catalog and flags into a render-ready
//! [`OnboardingState`] the dashboard widgets consume.

pub mod catalog;
pub mod progress;
pub mod routes;
pub mod steps;

pub use catalog::{CATALOG, Requirement, RequirementView, requirements_for_role};
pub use progress::{OnboardingState, RequirementStatus, compute_onboarding_state};
pub use routes::{OnboardingRouteState, onboarding_routes};
pub use steps::OnboardingStep;
