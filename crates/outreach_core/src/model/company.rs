//! Company record.
//!
//! # Responsibility
//! - Describe one outreach target and how often it should be contacted.
//! - Normalize free-form contact lists before validation.
//!
//! # Invariants
//! - `communication_periodicity` is between one day and
//!   `MAX_COMMUNICATION_PERIODICITY` days, so a next date always exists.
//! - `name` and `location` are non-blank.
//! - `emails` and `phone_numbers` never contain blank entries after
//!   `normalize()`.

use crate::model::validation::ValidationError;
use crate::model::EntityKind;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a company.
pub type CompanyId = Uuid;

/// Periodicity applied when a new company is drafted without one.
pub const DEFAULT_COMMUNICATION_PERIODICITY: u32 = 14;

/// Longest accepted periodicity, roughly one hundred years.
pub const MAX_COMMUNICATION_PERIODICITY: u32 = 36_500;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("valid email regex"));

/// A company the user keeps in touch with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub location: String,
    /// LinkedIn (or other social) profile URL.
    #[serde(default)]
    pub linkedin_profile: Option<String>,
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default)]
    pub phone_numbers: Vec<String>,
    #[serde(default)]
    pub comments: String,
    /// Days between expected contacts.
    pub communication_periodicity: u32,
}

/// Company fields as entered by a user, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyDraft {
    pub name: String,
    pub location: String,
    pub linkedin_profile: Option<String>,
    pub emails: Vec<String>,
    pub phone_numbers: Vec<String>,
    pub comments: String,
    pub communication_periodicity: u32,
}

impl CompanyDraft {
    /// Starts a draft with empty contact lists and the default periodicity.
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            linkedin_profile: None,
            emails: Vec::new(),
            phone_numbers: Vec::new(),
            comments: String::new(),
            communication_periodicity: DEFAULT_COMMUNICATION_PERIODICITY,
        }
    }

    /// Assigns `id` and returns the normalized company.
    ///
    /// The result is not validated; stores call `Company::validate()` on
    /// every write.
    pub fn into_company(self, id: CompanyId) -> Company {
        let mut company = Company {
            id,
            name: self.name,
            location: self.location,
            linkedin_profile: self.linkedin_profile,
            emails: self.emails,
            phone_numbers: self.phone_numbers,
            comments: self.comments,
            communication_periodicity: self.communication_periodicity,
        };
        company.normalize();
        company
    }
}

impl Company {
    /// Trims text fields and drops blank contact entries.
    ///
    /// A blank profile URL becomes `None`. Comments keep inner whitespace.
    pub fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        self.location = self.location.trim().to_string();
        self.linkedin_profile = self
            .linkedin_profile
            .take()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());
        self.emails = normalize_entries(&self.emails);
        self.phone_numbers = normalize_entries(&self.phone_numbers);
    }

    /// Checks record invariants.
    ///
    /// # Errors
    /// - `NilId` when `id` is nil.
    /// - `BlankField` when `name` or `location` is blank.
    /// - `InvalidPeriodicity` when periodicity is zero or above
    ///   `MAX_COMMUNICATION_PERIODICITY`.
    /// - `InvalidEmail` / `InvalidProfileUrl` for malformed contact data.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_nil() {
            return Err(ValidationError::NilId(EntityKind::Company));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::BlankField("company name"));
        }
        if self.location.trim().is_empty() {
            return Err(ValidationError::BlankField("company location"));
        }
        if !(1..=MAX_COMMUNICATION_PERIODICITY).contains(&self.communication_periodicity) {
            return Err(ValidationError::InvalidPeriodicity(
                self.communication_periodicity,
            ));
        }
        if let Some(email) = self
            .emails
            .iter()
            .find(|email| !EMAIL_RE.is_match(email.trim()))
        {
            return Err(ValidationError::InvalidEmail(email.clone()));
        }
        if let Some(url) = &self.linkedin_profile {
            let trimmed = url.trim();
            if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
                return Err(ValidationError::InvalidProfileUrl(url.clone()));
            }
        }
        Ok(())
    }
}

fn normalize_entries(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        Company, CompanyDraft, DEFAULT_COMMUNICATION_PERIODICITY, MAX_COMMUNICATION_PERIODICITY,
    };
    use crate::model::validation::ValidationError;
    use uuid::Uuid;

    fn draft() -> CompanyDraft {
        CompanyDraft::new(" Acme ", " Berlin ")
    }

    #[test]
    fn draft_defaults_periodicity_to_two_weeks() {
        assert_eq!(draft().communication_periodicity, DEFAULT_COMMUNICATION_PERIODICITY);
        assert_eq!(DEFAULT_COMMUNICATION_PERIODICITY, 14);
    }

    #[test]
    fn into_company_trims_and_drops_blank_entries() {
        let mut input = draft();
        input.emails = vec!["".to_string(), " sales@acme.test ".to_string()];
        input.phone_numbers = vec!["  ".to_string()];
        input.linkedin_profile = Some("   ".to_string());

        let company = input.into_company(Uuid::new_v4());
        assert_eq!(company.name, "Acme");
        assert_eq!(company.location, "Berlin");
        assert_eq!(company.emails, vec!["sales@acme.test".to_string()]);
        assert!(company.phone_numbers.is_empty());
        assert_eq!(company.linkedin_profile, None);
        company.validate().unwrap();
    }

    #[test]
    fn validate_rejects_zero_periodicity() {
        let mut company = draft().into_company(Uuid::new_v4());
        company.communication_periodicity = 0;
        assert_eq!(
            company.validate().unwrap_err(),
            ValidationError::InvalidPeriodicity(0)
        );
    }

    #[test]
    fn validate_bounds_periodicity_from_above() {
        let mut company = draft().into_company(Uuid::new_v4());
        company.communication_periodicity = MAX_COMMUNICATION_PERIODICITY;
        company.validate().unwrap();

        company.communication_periodicity = MAX_COMMUNICATION_PERIODICITY + 1;
        assert_eq!(
            company.validate().unwrap_err(),
            ValidationError::InvalidPeriodicity(MAX_COMMUNICATION_PERIODICITY + 1)
        );
    }

    #[test]
    fn validate_rejects_malformed_contact_data() {
        let mut company: Company = draft().into_company(Uuid::new_v4());
        company.emails = vec!["not-an-email".to_string()];
        assert!(matches!(
            company.validate().unwrap_err(),
            ValidationError::InvalidEmail(_)
        ));

        company.emails.clear();
        company.linkedin_profile = Some("linkedin.com/company/acme".to_string());
        assert!(matches!(
            company.validate().unwrap_err(),
            ValidationError::InvalidProfileUrl(_)
        ));
    }

    #[test]
    fn validate_rejects_blank_name_and_nil_id() {
        let company = CompanyDraft::new("  ", "Paris").into_company(Uuid::new_v4());
        assert_eq!(
            company.validate().unwrap_err(),
            ValidationError::BlankField("company name")
        );

        let company = CompanyDraft::new("Acme", "Paris").into_company(Uuid::nil());
        assert!(matches!(
            company.validate().unwrap_err(),
            ValidationError::NilId(_)
        ));
    }
}
