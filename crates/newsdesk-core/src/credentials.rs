//! Login credentials type.

use std::fmt;

/// Phone number and password exchanged for a [`CredentialPair`](crate::CredentialPair).
///
/// The password is never exposed in Debug output.
///
/// # Example
///
/// ```
/// use newsdesk_core::Credentials;
///
/// let creds = Credentials::new("+998901234567", "hunter2");
/// assert_eq!(creds.phone_number(), "+998901234567");
/// ```
#[derive(Clone)]
pub struct Credentials {
    phone_number: String,
    password: String,
}

impl Credentials {
    pub fn new(phone_number: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
            password: password.into(),
        }
    }

    /// Returns the phone number used as the login identifier.
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Returns the password.
    ///
    /// Use this only when constructing the login request body.
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("phone_number", &self.phone_number)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_hides_password_in_debug() {
        let creds = Credentials::new("+15550100", "secret123");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("+15550100"));
        assert!(!debug.contains("secret123"));
        assert!(debug.contains("[REDACTED]"));
    }
}
