//! Onboarding progress engine.
//!
//! Pure derivation: every function here reads an already-loaded [`User`]
//! snapshot and computes, never writes. [`compute_onboarding_state`] is the
//! entry point; the other functions are the individual derivations it
//! composes, exposed for callers that only need one of them.

use std::collections::HashSet;

use serde::Serialize;

use crate::users::model::{DocumentsStatus, Role, User, VerificationStatus};

use super::catalog::{CATALOG, requirements_for_role};
use super::steps::OnboardingStep;

/// A catalog requirement annotated with the user's completion of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequirementStatus {
    pub step: OnboardingStep,
    pub title: &'static str,
    pub description: &'static str,
    pub required: bool,
    pub depends_on: &'static [OnboardingStep],
    pub completed: bool,
}

/// Render-ready onboarding state, derived on every read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OnboardingState {
    pub current_step: OnboardingStep,
    pub completed_steps: Vec<OnboardingStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_step: Option<OnboardingStep>,
    pub can_proceed: bool,
    pub is_completed: bool,
    pub completion_percentage: u8,
    pub blockers: Vec<String>,
    pub requirements: Vec<RequirementStatus>,
}

/// The role-filtered requirement list, annotated with completion, in catalog
/// order.
pub fn requirements_for(user: &User) -> Vec<RequirementStatus> {
    requirements_for_role(user.role)
        .map(|req| RequirementStatus {
            step: req.step,
            title: req.title,
            description: req.description,
            required: req.required,
            depends_on: req.depends_on,
            completed: req.step.is_satisfied_by(user),
        })
        .collect()
}

/// Every catalog step whose flag predicate holds, in catalog order.
///
/// Deliberately not filtered by role: a flag that happens to be set counts
/// even when the step is irrelevant to the user's role. The role-filtered
/// list in [`requirements_for`] is what percentage and next-step read, so
/// the extra entries never leak into those outputs.
pub fn completed_steps(user: &User) -> Vec<OnboardingStep> {
    CATALOG
        .iter()
        .map(|req| req.step)
        .filter(|step| step.is_satisfied_by(user))
        .collect()
}

/// The user's stored step, defaulting to the start of the sequence.
pub fn current_step(user: &User) -> OnboardingStep {
    user.onboarding_step
        .unwrap_or(OnboardingStep::EmailVerification)
}

/// First required, incomplete requirement whose dependencies are all met.
///
/// A required-but-blocked entry is skipped rather than returned, so a later
/// unblocked step can win even while earlier ones remain incomplete. `None`
/// means everything required is either completed or blocked.
pub fn next_step(user: &User) -> Option<OnboardingStep> {
    let done: HashSet<OnboardingStep> = completed_steps(user).into_iter().collect();
    requirements_for_role(user.role)
        .filter(|req| req.required && !done.contains(&req.step))
        .find(|req| req.depends_on.iter().all(|dep| done.contains(dep)))
        .map(|req| req.step)
}

/// Whether the user can act on [`next_step`] right now.
///
/// Re-checks the dependency set of the returned step; holds whenever a next
/// step exists.
pub fn can_proceed(user: &User) -> bool {
    let done: HashSet<OnboardingStep> = completed_steps(user).into_iter().collect();
    match next_step(user) {
        Some(step) => CATALOG
            .iter()
            .find(|req| req.step == step)
            .is_some_and(|req| req.depends_on.iter().all(|dep| done.contains(dep))),
        None => false,
    }
}

/// Whether onboarding is finished.
///
/// The stored flag is authoritative once set; otherwise completion is derived
/// from the role-filtered required steps.
pub fn is_completed(user: &User) -> bool {
    if user.onboarding_completed {
        return true;
    }
    requirements_for_role(user.role)
        .filter(|req| req.required)
        .all(|req| req.step.is_satisfied_by(user))
}

/// Share of role-required steps completed, 0–100.
pub fn completion_percentage(user: &User) -> u8 {
    let (done, total) = requirements_for_role(user.role)
        .filter(|req| req.required)
        .fold((0usize, 0usize), |(done, total), req| {
            let completed = req.step.is_satisfied_by(user) as usize;
            (done + completed, total + 1)
        });
    ratio_percent(done, total)
}

/// `round(100 * done / total)`; a role with zero required steps counts as
/// fully complete.
fn ratio_percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    (100.0 * done as f64 / total as f64).round() as u8
}

/// Human-readable obstructions, in a fixed check order.
///
/// Independent of the step walk: each message comes from inspecting specific
/// fields directly. Multiple blockers can co-occur; callers typically show
/// only the first.
pub fn blockers(user: &User) -> Vec<String> {
    let mut out = Vec::new();

    if user.email_verification != VerificationStatus::Verified {
        out.push("Email verification required".to_string());
    }

    let professional = matches!(
        user.role,
        Role::Agent | Role::Inspector | Role::CompanyAdmin
    );
    if professional && !user.phone_verified {
        out.push("Phone verification required".to_string());
    }

    if matches!(user.role, Role::Agent | Role::Inspector) {
        match user.identity_verification {
            VerificationStatus::Rejected => out.push(
                "Identity verification was rejected — please contact support".to_string(),
            ),
            VerificationStatus::Pending => {
                out.push("Identity verification is under review".to_string());
            }
            VerificationStatus::NotStarted | VerificationStatus::Verified => {}
        }
    }

    match user.documents_verification {
        DocumentsStatus::Rejected => {
            out.push("Document verification was rejected — please resubmit".to_string());
        }
        DocumentsStatus::UnderReview => out.push("Documents are under review".to_string()),
        DocumentsStatus::NotStarted | DocumentsStatus::Approved => {}
    }

    out
}

/// Compose the full onboarding state for a user snapshot.
pub fn compute_onboarding_state(user: &User) -> OnboardingState {
    OnboardingState {
        current_step: current_step(user),
        completed_steps: completed_steps(user),
        next_step: next_step(user),
        can_proceed: can_proceed(user),
        is_completed: is_completed(user),
        completion_percentage: completion_percentage(user),
        blockers: blockers(user),
        requirements: requirements_for(user),
    }
}
