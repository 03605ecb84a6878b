use secrecy::SecretString;

/// Read-only auth context for the life of the process.
///
/// Lifecycle: the platform web app sets the token at login and clears it at
/// logout; this client resolves the session once at startup from
/// configuration and only ever reads it. Everything that needs auth state
/// goes through these accessors instead of reaching into config.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<SecretString>,
    account_email: Option<String>,
}

impl Session {
    pub fn new(token: Option<SecretString>, account_email: Option<String>) -> Self {
        Self {
            token,
            account_email,
        }
    }

    /// Convenience constructor for tests and examples.
    pub fn with_token(token: &str, account_email: Option<String>) -> Self {
        Self {
            token: Some(SecretString::from(token)),
            account_email,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&SecretString> {
        self.token.as_ref()
    }

    pub fn account_email(&self) -> Option<&str> {
        self.account_email.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn test_default_session_is_signed_out() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.account_email(), None);
        assert!(session.token().is_none());
    }

    #[test]
    fn test_session_with_token_is_authenticated() {
        let session = Session::with_token("tok-123", Some("amira@example.com".to_string()));
        assert!(session.is_authenticated());
        assert_eq!(session.account_email(), Some("amira@example.com"));
        assert_eq!(
            session.token().map(|t| t.expose_secret().to_string()),
            Some("tok-123".to_string())
        );
    }

    #[test]
    fn test_session_debug_redacts_token() {
        let session = Session::with_token("super-secret", None);
        let debug = format!("{session:?}");
        assert!(!debug.contains("super-secret"));
    }
}
