//! Access control: the permission gate and the shared superuser secret.

use memsh_types::{Principal, ShellError, ShellResult};

/// Maximum length of the shared secret.
pub const MAX_SECRET_LEN: usize = 126;

/// Secret granting Superuser at startup, until changed with `change`.
pub const DEFAULT_SECRET: &str = "superuser";

/// Can `actor` access a node owned by `owner`?
///
/// Casual-owned nodes are open to everyone; Superuser-owned nodes require
/// a Superuser actor. This gates entering a directory, creating under a
/// parent, deleting a node, and reading or writing a file.
pub fn permitted(owner: Principal, actor: Principal) -> bool {
    !owner.is_superuser() || actor.is_superuser()
}

/// The mutable shared superuser secret.
#[derive(Debug)]
pub struct Auth {
    secret: String,
}

impl Default for Auth {
    fn default() -> Self {
        Self::new()
    }
}

impl Auth {
    pub fn new() -> Self {
        Self::with_secret(DEFAULT_SECRET)
    }

    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Check a password against the current secret.
    pub fn verify(&self, candidate: &str) -> bool {
        self.secret == candidate
    }

    /// Replace the secret. Only a Superuser may change it, and the new
    /// secret is bounded.
    pub fn change(&mut self, actor: Principal, new_secret: &str) -> ShellResult<()> {
        if !actor.is_superuser() {
            return Err(ShellError::PermissionDenied);
        }
        if new_secret.len() > MAX_SECRET_LEN {
            return Err(ShellError::TooLong);
        }
        self.secret = new_secret.to_string();
        tracing::debug!("superuser secret changed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn casual_nodes_open_to_all() {
        assert!(permitted(Principal::Casual, Principal::Casual));
        assert!(permitted(Principal::Casual, Principal::Superuser));
    }

    #[test]
    fn superuser_nodes_gated() {
        assert!(!permitted(Principal::Superuser, Principal::Casual));
        assert!(permitted(Principal::Superuser, Principal::Superuser));
    }

    #[test]
    fn verify_matches_exactly() {
        let auth = Auth::new();
        assert!(auth.verify(DEFAULT_SECRET));
        assert!(!auth.verify("Superuser"));
        assert!(!auth.verify(""));
    }

    #[test]
    fn change_requires_superuser() {
        let mut auth = Auth::new();
        assert_eq!(
            auth.change(Principal::Casual, "new"),
            Err(ShellError::PermissionDenied)
        );
        assert!(auth.verify(DEFAULT_SECRET));

        auth.change(Principal::Superuser, "new").unwrap();
        assert!(auth.verify("new"));
        assert!(!auth.verify(DEFAULT_SECRET));
    }

    #[test]
    fn change_bounds_secret_length() {
        let mut auth = Auth::new();
        let long = "x".repeat(MAX_SECRET_LEN + 1);
        assert_eq!(
            auth.change(Principal::Superuser, &long),
            Err(ShellError::TooLong)
        );
        let max = "x".repeat(MAX_SECRET_LEN);
        assert!(auth.change(Principal::Superuser, &max).is_ok());
    }
}
