//! API credentials and environment loading.

use std::collections::HashMap;
use std::fmt;

use super::{AuthError, AuthResult};

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "OKX_API_KEY";
/// Environment variable holding the secret key used for signing.
pub const ENV_SECRET_KEY: &str = "OKX_SECRET_KEY";
/// Environment variable holding the API passphrase.
pub const ENV_PASSPHRASE: &str = "OKX_API_PASSPHRASE";
/// Environment variable holding the developer-portal project ID.
pub const ENV_PROJECT_ID: &str = "OKX_PROJECT_ID";

/// API credentials for one client.
///
/// Immutable once constructed. `Debug` output is redacted and the type does
/// not implement `Serialize`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    secret_key: String,
    passphrase: String,
    project_id: String,
}

impl Credentials {
    /// Create credentials, rejecting empty values and values that cannot be
    /// carried in an HTTP header.
    pub fn new(
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
        passphrase: impl Into<String>,
        project_id: impl Into<String>,
    ) -> AuthResult<Self> {
        let credentials = Self {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
            passphrase: passphrase.into(),
            project_id: project_id.into(),
        };

        for (name, value) in [
            ("api_key", &credentials.api_key),
            ("secret_key", &credentials.secret_key),
            ("passphrase", &credentials.passphrase),
            ("project_id", &credentials.project_id),
        ] {
            if value.trim().is_empty() {
                return Err(AuthError::MissingCredential(name.to_string()));
            }
            if value.chars().any(char::is_control) {
                return Err(AuthError::InvalidCredential(format!(
                    "{} contains control characters",
                    name
                )));
            }
        }

        Ok(credentials)
    }

    /// Load credentials from the process environment.
    ///
    /// Reads `OKX_API_KEY`, `OKX_SECRET_KEY`, `OKX_API_PASSPHRASE` and
    /// `OKX_PROJECT_ID`.
    pub fn from_env() -> AuthResult<Self> {
        load_credentials(|name| std::env::var(name).ok())
    }

    /// Load credentials from an explicit variable map.
    pub fn from_map(env: &HashMap<String, String>) -> AuthResult<Self> {
        load_credentials(|name| env.get(name).cloned())
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the passphrase
    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    /// Get the project ID
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub(crate) fn secret_key(&self) -> &str {
        &self.secret_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("secret_key", &"<redacted>")
            .field("passphrase", &"<redacted>")
            .field("project_id", &self.project_id)
            .finish()
    }
}

/// Build [`Credentials`] from an environment lookup.
///
/// `lookup` maps a variable name to its value. All four variables are
/// required; the first one that is absent or empty is reported by name.
pub fn load_credentials<F>(lookup: F) -> AuthResult<Credentials>
where
    F: Fn(&str) -> Option<String>,
{
    let require = |name: &str| -> AuthResult<String> {
        lookup(name)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| AuthError::MissingCredential(name.to_string()))
    };

    Credentials::new(
        require(ENV_API_KEY)?,
        require(ENV_SECRET_KEY)?,
        require(ENV_PASSPHRASE)?,
        require(ENV_PROJECT_ID)?,
    )
}
