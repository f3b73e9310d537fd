//! Registration manager
//!
//! Validates and stores the single per-device user profile. Presence of
//! a stored profile is the sole gate for schedule mutation.

use chrono::{DateTime, Local};
use confmate_store::{Store, UserProfile};
use confmate_util::{CompanionError, ParticipantId, Result};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Candidate profile input, as entered in the registration form
#[derive(Debug, Clone, Default)]
pub struct ProfileDraft {
    pub name: String,
    pub email: String,
    pub organization: String,
    pub bio: String,
}

/// First failing validation rule for a profile draft.
///
/// Rules are checked in a fixed order so the user-facing message is
/// deterministic; each variant's message is the exact prompt shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("Please enter your full name")]
    EmptyName,

    #[error("Please enter your email address")]
    EmptyEmail,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter your organization")]
    EmptyOrganization,

    #[error("Please enter your professional bio")]
    EmptyBio,

    #[error("Please provide a more detailed bio (at least 50 characters)")]
    BioTooShort,
}

/// Minimum bio length in characters
pub const MIN_BIO_CHARS: usize = 50;

/// Manages the on-device user profile
pub struct RegistrationManager {
    store: Arc<dyn Store>,
}

impl RegistrationManager {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Load the stored profile. Storage read failures log a warning and
    /// read as absent; callers never see a read error here.
    pub fn load_profile(&self) -> Option<UserProfile> {
        match self.store.load_profile() {
            Ok(profile) => profile,
            Err(e) => {
                warn!(error = %e, "Failed to read stored profile, treating as absent");
                None
            }
        }
    }

    /// Whether a profile exists (presence test, not a capability check)
    pub fn is_registered(&self) -> bool {
        self.load_profile().is_some()
    }

    /// Check a draft against the registration rules, returning the first
    /// failure in rule order.
    ///
    /// The bio length is measured on the draft as entered, before any
    /// trimming happens at submit time.
    pub fn validate(draft: &ProfileDraft) -> std::result::Result<(), ValidationFailure> {
        if draft.name.trim().is_empty() {
            return Err(ValidationFailure::EmptyName);
        }
        if draft.email.trim().is_empty() {
            return Err(ValidationFailure::EmptyEmail);
        }
        if !draft.email.contains('@') {
            return Err(ValidationFailure::InvalidEmail);
        }
        if draft.organization.trim().is_empty() {
            return Err(ValidationFailure::EmptyOrganization);
        }
        if draft.bio.trim().is_empty() {
            return Err(ValidationFailure::EmptyBio);
        }
        if draft.bio.chars().count() < MIN_BIO_CHARS {
            return Err(ValidationFailure::BioTooShort);
        }
        Ok(())
    }

    /// Validate, trim, and store the profile, replacing any prior record.
    ///
    /// A fresh `participantId` is generated on every successful submit,
    /// including updates to an existing registration.
    pub fn submit(&self, draft: &ProfileDraft, now: DateTime<Local>) -> Result<UserProfile> {
        Self::validate(draft).map_err(|e| CompanionError::validation(e.to_string()))?;

        let profile = UserProfile {
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
            organization: draft.organization.trim().to_string(),
            bio: draft.bio.trim().to_string(),
            registration_date: now,
            participant_id: ParticipantId::generate(now),
        };

        self.store
            .save_profile(&profile)
            .map_err(|e| CompanionError::storage(e.to_string()))?;

        info!(participant_id = %profile.participant_id, "Profile stored");
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use confmate_store::SqliteStore;

    fn manager() -> RegistrationManager {
        RegistrationManager::new(Arc::new(SqliteStore::in_memory().unwrap()))
    }

    fn valid_draft() -> ProfileDraft {
        ProfileDraft {
            name: "Amina Wanjiru".into(),
            email: "amina@example.org".into(),
            organization: "Example Org".into(),
            bio: "Researcher working on gender-equitable AI policy across East Africa.".into(),
        }
    }

    #[test]
    fn validate_accepts_valid_draft() {
        assert!(RegistrationManager::validate(&valid_draft()).is_ok());
    }

    #[test]
    fn validate_reports_first_failing_rule() {
        let mut d = valid_draft();
        d.name = "   ".into();
        assert_eq!(
            RegistrationManager::validate(&d),
            Err(ValidationFailure::EmptyName)
        );

        let mut d = valid_draft();
        d.email = "".into();
        assert_eq!(
            RegistrationManager::validate(&d),
            Err(ValidationFailure::EmptyEmail)
        );

        let mut d = valid_draft();
        d.email = "not-an-email".into();
        assert_eq!(
            RegistrationManager::validate(&d),
            Err(ValidationFailure::InvalidEmail)
        );

        let mut d = valid_draft();
        d.organization = "".into();
        assert_eq!(
            RegistrationManager::validate(&d),
            Err(ValidationFailure::EmptyOrganization)
        );

        let mut d = valid_draft();
        d.bio = "  ".into();
        assert_eq!(
            RegistrationManager::validate(&d),
            Err(ValidationFailure::EmptyBio)
        );
    }

    #[test]
    fn validate_bio_length_boundary() {
        let mut d = valid_draft();
        d.bio = "x".repeat(49);
        assert_eq!(
            RegistrationManager::validate(&d),
            Err(ValidationFailure::BioTooShort)
        );

        d.bio = "x".repeat(50);
        assert!(RegistrationManager::validate(&d).is_ok());
    }

    #[test]
    fn validation_messages_are_exact() {
        assert_eq!(
            ValidationFailure::BioTooShort.to_string(),
            "Please provide a more detailed bio (at least 50 characters)"
        );
        assert_eq!(
            ValidationFailure::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn submit_trims_and_stores() {
        let mgr = manager();
        assert!(!mgr.is_registered());

        let draft = ProfileDraft {
            name: "  Amina Wanjiru  ".into(),
            email: " amina@example.org ".into(),
            organization: " Example Org ".into(),
            bio: format!("  {}  ", "b".repeat(60)),
        };
        let now = Local.with_ymd_and_hms(2025, 8, 19, 12, 0, 0).unwrap();

        let stored = mgr.submit(&draft, now).unwrap();
        assert_eq!(stored.name, "Amina Wanjiru");
        assert_eq!(stored.email, "amina@example.org");
        assert_eq!(stored.registration_date, now);

        assert!(mgr.is_registered());
        assert_eq!(mgr.load_profile().unwrap(), stored);
    }

    #[test]
    fn submit_rejects_invalid_draft() {
        let mgr = manager();
        let mut draft = valid_draft();
        draft.bio = "too short".into();

        let err = mgr.submit(&draft, Local::now()).unwrap_err();
        assert!(matches!(err, CompanionError::Validation(_)));
        assert!(!mgr.is_registered());
    }

    #[test]
    fn submit_regenerates_participant_id() {
        let mgr = manager();
        let draft = valid_draft();

        let t1 = Local.with_ymd_and_hms(2025, 8, 19, 12, 0, 0).unwrap();
        let t2 = Local.with_ymd_and_hms(2025, 8, 19, 12, 0, 1).unwrap();

        let first = mgr.submit(&draft, t1).unwrap();
        let second = mgr.submit(&draft, t2).unwrap();

        // Existing behavior: the ID is not preserved across updates
        assert_ne!(first.participant_id, second.participant_id);
        assert_eq!(
            mgr.load_profile().unwrap().participant_id,
            second.participant_id
        );
    }
}
