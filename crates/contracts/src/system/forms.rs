use crate::shared::validation::{required, FormError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FormError> {
        required("Email", &self.email)?;
        required("Password", &self.password)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_to_terms: bool,
}

impl SignupForm {
    /// Checked in this order: required fields, password confirmation, terms.
    pub fn validate(&self) -> Result<(), FormError> {
        required("First name", &self.first_name)?;
        required("Last name", &self.last_name)?;
        required("Email", &self.email)?;
        required("Password", &self.password)?;
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        if !self.agree_to_terms {
            return Err(FormError::TermsNotAccepted);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_signup() -> SignupForm {
        SignupForm {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: "analytical".into(),
            confirm_password: "analytical".into(),
            agree_to_terms: true,
        }
    }

    #[test]
    fn signup_accepts_complete_form() {
        assert_eq!(valid_signup().validate(), Ok(()));
    }

    #[test]
    fn signup_rejects_mismatch_before_terms() {
        let form = SignupForm {
            confirm_password: "different".into(),
            agree_to_terms: false,
            ..valid_signup()
        };
        assert_eq!(form.validate(), Err(FormError::PasswordMismatch));
    }

    #[test]
    fn signup_requires_terms() {
        let form = SignupForm {
            agree_to_terms: false,
            ..valid_signup()
        };
        assert_eq!(form.validate(), Err(FormError::TermsNotAccepted));
        assert_eq!(
            FormError::TermsNotAccepted.to_string(),
            "Please agree to the terms and conditions."
        );
    }

    #[test]
    fn signup_requires_names() {
        let form = SignupForm {
            last_name: " ".into(),
            ..valid_signup()
        };
        assert_eq!(form.validate(), Err(FormError::MissingField("Last name")));
    }

    #[test]
    fn login_requires_both_fields() {
        let form = LoginForm {
            email: "admin@example.com".into(),
            ..LoginForm::default()
        };
        assert_eq!(form.validate(), Err(FormError::MissingField("Password")));
    }
}
