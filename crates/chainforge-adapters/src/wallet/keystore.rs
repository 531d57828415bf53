//! Keystore lookup on the local filesystem.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chainforge_core::{
    application::{ApplicationError, ports::WalletLocator},
    domain::WalletCredentials,
    error::CoreResult,
};
use serde_json::Value;
use tracing::{debug, warn};

/// Resolves a wallet location to an Ethereum v3 keystore file.
///
/// - a file must parse as JSON with a `crypto` (or `Crypto`) object
/// - a directory resolves to its most recently modified `*.json` keystore
#[derive(Debug, Clone, Copy, Default)]
pub struct KeystoreLocator;

impl KeystoreLocator {
    pub fn new() -> Self {
        Self
    }

    fn newest_keystore_in(dir: &Path) -> CoreResult<PathBuf> {
        let entries = fs::read_dir(dir).map_err(|e| ApplicationError::FilesystemError {
            path: dir.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut newest: Option<(SystemTime, PathBuf)> = None;
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "json") || !is_keystore(&path) {
                continue;
            }
            let modified = entry
                .metadata()
                .and_then(|m| m.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);

            if newest.as_ref().is_none_or(|(t, _)| modified > *t) {
                newest = Some((modified, path));
            }
        }

        newest.map(|(_, path)| path).ok_or_else(|| {
            ApplicationError::WalletNotFound {
                path: dir.to_path_buf(),
            }
            .into()
        })
    }
}

impl WalletLocator for KeystoreLocator {
    fn locate(&self, path: &Path, password: &str) -> CoreResult<WalletCredentials> {
        if path.is_dir() {
            let keystore = Self::newest_keystore_in(path)?;
            debug!(dir = %path.display(), keystore = %keystore.display(), "Keystore selected");
            return Ok(WalletCredentials::new(keystore, password));
        }

        if !path.is_file() {
            return Err(ApplicationError::WalletNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        if !is_keystore(path) {
            warn!(path = %path.display(), "Wallet file is not a keystore");
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "not an Ethereum keystore file".into(),
            }
            .into());
        }

        Ok(WalletCredentials::new(path, password))
    }
}

fn is_keystore(path: &Path) -> bool {
    let Ok(raw) = fs::read_to_string(path) else {
        return false;
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Object(map)) => map.contains_key("crypto") || map.contains_key("Crypto"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const KEYSTORE: &str = r#"{"address":"ab","crypto":{"cipher":"aes-128-ctr"},"version":3}"#;

    #[test]
    fn file_is_returned_with_password() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("wallet.json");
        fs::write(&file, KEYSTORE).unwrap();

        let creds = KeystoreLocator::new().locate(&file, "pw").unwrap();
        assert_eq!(creds, WalletCredentials::new(&file, "pw"));
    }

    #[test]
    fn uppercase_crypto_key_is_accepted() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("UTC--wallet.json");
        fs::write(&file, r#"{"Crypto":{}}"#).unwrap();

        assert!(KeystoreLocator::new().locate(&file, "").is_ok());
    }

    #[test]
    fn directory_resolves_to_keystore_inside() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("notes.txt"), "hello").unwrap();
        fs::write(tmp.path().join("package.json"), r#"{"name":"x"}"#).unwrap();
        fs::write(tmp.path().join("wallet.json"), KEYSTORE).unwrap();

        let creds = KeystoreLocator::new().locate(tmp.path(), "").unwrap();
        assert_eq!(creds.path, tmp.path().join("wallet.json"));
    }

    #[test]
    fn directory_without_keystore_is_not_found() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("package.json"), r#"{"name":"x"}"#).unwrap();

        let err = KeystoreLocator::new().locate(tmp.path(), "").unwrap_err();
        assert!(err.to_string().starts_with("No wallet file found"));
    }

    #[test]
    fn missing_path_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = KeystoreLocator::new()
            .locate(&tmp.path().join("nope.json"), "")
            .unwrap_err();
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn non_keystore_file_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("wallet.json");
        fs::write(&file, "not json").unwrap();

        assert!(KeystoreLocator::new().locate(&file, "").is_err());
    }
}
