use std::fmt;
use std::path::PathBuf;

/// Location and password of a keystore file.
///
/// Opaque to the core: obtained from the wallet locator or the tool
/// configuration and handed to the generator untouched.
#[derive(Clone, PartialEq, Eq)]
pub struct WalletCredentials {
    pub path: PathBuf,
    pub password: String,
}

impl WalletCredentials {
    pub fn new(path: impl Into<PathBuf>, password: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for WalletCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletCredentials")
            .field("path", &self.path)
            .field("password", &"<redacted>")
            .finish()
    }
}
