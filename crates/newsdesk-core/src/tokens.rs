//! Bearer credential types.
//!
//! Both halves of the pair wrap the raw string the server issued. Their
//! `Debug` output names the type only, so a descriptor, a store or an error
//! can be traced without leaking a usable credential.

use std::fmt;

macro_rules! secret_token {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq)]
        pub struct $name(String);

        impl $name {
            pub fn new(token: impl Into<String>) -> Self {
                Self(token.into())
            }

            /// The raw value, for the one place it goes on the wire.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "(<{} bytes>)"), self.0.len())
            }
        }
    };
}

secret_token! {
    /// Short-lived credential attached as `Authorization: Bearer <token>` to
    /// auth-required calls. Replaced in the store after every renewal.
    AccessToken
}

secret_token! {
    /// Longer-lived credential. Only ever sent in the body of the renewal
    /// exchange, never in a header.
    RefreshToken
}

/// The access/refresh pair created by a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialPair {
    pub access: AccessToken,
    pub refresh: RefreshToken,
}

impl CredentialPair {
    pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            access: AccessToken::new(access),
            refresh: RefreshToken::new(refresh),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_shows_length_not_value() {
        let token = AccessToken::new("eyJhbGciOiJIUzI1NiJ9");
        assert_eq!(format!("{:?}", token), "AccessToken(<20 bytes>)");
    }

    #[test]
    fn pair_hides_both_halves_in_debug() {
        let pair = CredentialPair::new("access-secret", "refresh-secret");
        let debug = format!("{:?}", pair);
        assert!(!debug.contains("access-secret"));
        assert!(!debug.contains("refresh-secret"));
        assert!(debug.contains("RefreshToken(<14 bytes>)"));
    }
}
