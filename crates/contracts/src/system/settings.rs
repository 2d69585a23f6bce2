use serde::{Deserialize, Serialize};

use crate::shared::validation::{required, FormError};

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSettings {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub bio: String,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john.doe@itzenith.com".into(),
            bio: String::new(),
        }
    }
}

impl ProfileSettings {
    pub fn initials(&self) -> String {
        [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|s| s.trim().chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySettings {
    pub name: String,
    pub website: String,
    pub phone: String,
    pub address: String,
}

impl Default for CompanySettings {
    fn default() -> Self {
        Self {
            name: "IT Zenith".into(),
            website: "https://itzenith.com".into(),
            phone: "+1 (555) 123-4567".into(),
            address: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email: bool,
    pub inquiries: bool,
    pub alerts: bool,
    pub reports: bool,
    pub marketing: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email: true,
            inquiries: true,
            alerts: true,
            reports: false,
            marketing: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordChange {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

impl PasswordChange {
    pub fn validate(&self) -> Result<(), FormError> {
        required("Current password", &self.current)?;
        if self.new.chars().count() < MIN_PASSWORD_LEN {
            return Err(FormError::PasswordTooShort(MIN_PASSWORD_LEN));
        }
        if self.new != self.confirm {
            return Err(FormError::PasswordMismatch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_defaults() {
        let n = NotificationSettings::default();
        assert_eq!(
            (n.email, n.inquiries, n.alerts, n.reports, n.marketing),
            (true, true, true, false, false)
        );
    }

    #[test]
    fn password_change_rules() {
        let ok = PasswordChange {
            current: "old-secret".into(),
            new: "new-secret".into(),
            confirm: "new-secret".into(),
        };
        assert_eq!(ok.validate(), Ok(()));

        let short = PasswordChange {
            new: "short".into(),
            confirm: "short".into(),
            ..ok.clone()
        };
        assert_eq!(short.validate(), Err(FormError::PasswordTooShort(8)));

        let mismatch = PasswordChange {
            confirm: "new-secreT".into(),
            ..ok.clone()
        };
        assert_eq!(mismatch.validate(), Err(FormError::PasswordMismatch));

        let no_current = PasswordChange {
            current: String::new(),
            ..ok
        };
        assert_eq!(
            no_current.validate(),
            Err(FormError::MissingField("Current password"))
        );
    }

    #[test]
    fn profile_initials() {
        assert_eq!(ProfileSettings::default().initials(), "JD");
    }
}
