//! User profile record.

use super::{check_char_length, now_epoch_ms, RecordId, ValidationError, ValidationResult};
use crate::constants::EMAIL_PATTERN;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern constant must compile"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Option<RecordId>,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub profile_picture_url: Option<String>,
    pub timezone: String,
    pub language: String,
    pub theme: String,
    pub notifications_enabled: bool,
    pub total_tasks: u32,
    pub completed_tasks: u32,
    /// Current daily completion streak.
    pub streak_days: u32,
    pub last_login: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
    /// Free-form extra preferences, passed through untouched.
    pub preferences: HashMap<String, String>,
}

impl UserProfile {
    /// Builds a validated profile with default locale/theme settings.
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> ValidationResult<Self> {
        let now = now_epoch_ms();
        let profile = Self {
            id: None,
            username: username.into(),
            email: email.into(),
            first_name: None,
            last_name: None,
            bio: None,
            profile_picture_url: None,
            timezone: "UTC".to_string(),
            language: "en".to_string(),
            theme: "light".to_string(),
            notifications_enabled: true,
            total_tasks: 0,
            completed_tasks: 0,
            streak_days: 0,
            last_login: None,
            created_at: now,
            updated_at: now,
            preferences: HashMap::new(),
        };
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> ValidationResult<()> {
        check_char_length(
            "username",
            "must be between 1 and 255 characters",
            &self.username,
            1,
            255,
        )?;
        if !EMAIL_REGEX.is_match(&self.email) {
            return Err(ValidationError::new(
                "email",
                "must be a valid email address",
                &self.email,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::UserProfile;

    #[test]
    fn plausible_email_passes() {
        UserProfile::new("morning_person", "morning@example.com").unwrap();
    }

    #[test]
    fn email_without_domain_fails() {
        let err = UserProfile::new("morning_person", "not-an-email").unwrap_err();
        assert_eq!(err.field, "email");
    }
}
