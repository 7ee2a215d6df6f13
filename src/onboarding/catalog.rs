//! Static requirement catalog — which steps apply to which roles.

use serde::Serialize;

use crate::users::model::Role;

use super::steps::OnboardingStep;

/// A catalog entry binding a step to the roles it applies to and the steps
/// it depends on.
#[derive(Debug, Clone, Copy)]
pub struct Requirement {
    pub step: OnboardingStep,
    pub title: &'static str,
    pub description: &'static str,
    pub required: bool,
    pub depends_on: &'static [OnboardingStep],
    pub roles: &'static [Role],
}

impl Requirement {
    /// Whether this requirement applies to `role`.
    pub fn applies_to(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

const ALL_ROLES: &[Role] = &[
    Role::Client,
    Role::Agent,
    Role::Inspector,
    Role::CompanyAdmin,
    Role::PlatformAdmin,
];

const NON_ADMIN_ROLES: &[Role] = &[
    Role::Client,
    Role::Agent,
    Role::Inspector,
    Role::CompanyAdmin,
];

/// The requirement catalog, in declaration order.
///
/// Order matters: the walk in `next_step` and every annotated listing follow
/// this order as-is, never re-sorted. PLATFORM_ADMIN appears only in the
/// first entry, so admins are complete once their email is verified.
pub const CATALOG: &[Requirement] = &[
    Requirement {
        step: OnboardingStep::EmailVerification,
        title: "Verify your email",
        description: "Confirm the address you registered with by clicking the link we sent you.",
        required: true,
        depends_on: &[],
        roles: ALL_ROLES,
    },
    Requirement {
        step: OnboardingStep::PhoneVerification,
        title: "Verify your phone number",
        description: "Add a phone number and confirm it with the code we text you.",
        // Surfaced as a blocker for professional roles but never gates
        // progression or the completion percentage.
        required: false,
        depends_on: &[OnboardingStep::EmailVerification],
        roles: NON_ADMIN_ROLES,
    },
    Requirement {
        step: OnboardingStep::ProfileSetup,
        title: "Complete your profile",
        description: "Fill in your display name, photo, and contact preferences.",
        required: true,
        depends_on: &[OnboardingStep::EmailVerification],
        roles: NON_ADMIN_ROLES,
    },
    Requirement {
        step: OnboardingStep::IdentityVerification,
        title: "Verify your identity",
        description: "Upload a government-issued ID so we can confirm who you are.",
        required: true,
        depends_on: &[OnboardingStep::ProfileSetup],
        roles: &[Role::Agent, Role::Inspector],
    },
    Requirement {
        step: OnboardingStep::DocumentUpload,
        title: "Upload your credentials",
        description: "Provide your license and certification documents for review.",
        required: true,
        depends_on: &[OnboardingStep::IdentityVerification],
        roles: &[Role::Agent, Role::Inspector, Role::CompanyAdmin],
    },
    Requirement {
        step: OnboardingStep::TermsAcceptance,
        title: "Accept the terms",
        description: "Review and accept the terms of service and privacy policy.",
        required: true,
        depends_on: &[OnboardingStep::ProfileSetup],
        roles: NON_ADMIN_ROLES,
    },
];

/// Role-filtered view of the catalog, in declaration order.
pub fn requirements_for_role(role: Role) -> impl Iterator<Item = &'static Requirement> {
    CATALOG.iter().filter(move |r| r.applies_to(role))
}

/// Catalog entry as served by the requirements endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct RequirementView {
    pub step: OnboardingStep,
    pub title: &'static str,
    pub description: &'static str,
    pub required: bool,
    pub depends_on: &'static [OnboardingStep],
}

impl From<&'static Requirement> for RequirementView {
    fn from(req: &'static Requirement) -> Self {
        Self {
            step: req.step,
            title: req.title,
            description: req.description,
            required: req.required,
            depends_on: req.depends_on,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_six_entries_in_order() {
        let steps: Vec<OnboardingStep> = CATALOG.iter().map(|r| r.step).collect();
        assert_eq!(
            steps,
            vec![
                OnboardingStep::EmailVerification,
                OnboardingStep::PhoneVerification,
                OnboardingStep::ProfileSetup,
                OnboardingStep::IdentityVerification,
                OnboardingStep::DocumentUpload,
                OnboardingStep::TermsAcceptance,
            ]
        );
    }

    #[test]
    fn phone_is_the_only_optional_entry() {
        for req in CATALOG {
            assert_eq!(
                req.required,
                req.step != OnboardingStep::PhoneVerification,
                "unexpected required flag for {}",
                req.step
            );
        }
    }

    #[test]
    fn platform_admin_only_needs_email() {
        let steps: Vec<OnboardingStep> = requirements_for_role(Role::PlatformAdmin)
            .map(|r| r.step)
            .collect();
        assert_eq!(steps, vec![OnboardingStep::EmailVerification]);
    }

    #[test]
    fn client_skips_identity_and_documents() {
        let steps: Vec<OnboardingStep> = requirements_for_role(Role::Client)
            .map(|r| r.step)
            .collect();
        assert_eq!(
            steps,
            vec![
                OnboardingStep::EmailVerification,
                OnboardingStep::PhoneVerification,
                OnboardingStep::ProfileSetup,
                OnboardingStep::TermsAcceptance,
            ]
        );
    }

    #[test]
    fn agent_and_inspector_share_the_full_track() {
        for role in [Role::Agent, Role::Inspector] {
            let steps: Vec<OnboardingStep> =
                requirements_for_role(role).map(|r| r.step).collect();
            assert_eq!(steps.len(), 6, "{role} should see every catalog entry");
        }
    }

    #[test]
    fn company_admin_skips_identity_only() {
        let steps: Vec<OnboardingStep> = requirements_for_role(Role::CompanyAdmin)
            .map(|r| r.step)
            .collect();
        assert!(!steps.contains(&OnboardingStep::IdentityVerification));
        assert!(steps.contains(&OnboardingStep::DocumentUpload));
    }

    #[test]
    fn dependencies_reference_earlier_catalog_entries() {
        for (idx, req) in CATALOG.iter().enumerate() {
            for dep in req.depends_on {
                let dep_idx = CATALOG
                    .iter()
                    .position(|r| r.step == *dep)
                    .expect("dependency must be a catalog step");
                assert!(
                    dep_idx < idx,
                    "{} depends on {} which is declared later",
                    req.step,
                    dep
                );
            }
        }
    }
}
