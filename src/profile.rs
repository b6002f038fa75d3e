// Credential profiles: a small key-value secrets store kept as a JSON file
// in the user's home directory, plus the trait the shortener client takes
// instead of reading any global store.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};

#[cfg(test)]
use mockall::automock;

/// File name of the profile store under the user's home directory.
const PROFILES_FILE: &str = ".urltitle-profiles.json";

/// A source of named secrets for a service, passed explicitly to whoever
/// needs a credential.
#[cfg_attr(test, automock)]
pub trait CredentialProvider {
    /// Return all secrets stored for `service`. Fails if the service has
    /// no profile.
    fn secrets(&self, service: &str) -> Result<HashMap<String, String>>;
}

/// File-backed profile store: `~/.urltitle-profiles.json` maps a service
/// name to its named secrets, e.g. `{"goo.gl": {"key": "..."}}`.
///
/// The file is read at lookup time, so a store value can be constructed
/// whether or not the file exists yet.
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    /// Store at the default location in the user's home directory.
    pub fn from_home() -> Self {
        let dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            path: dir.join(PROFILES_FILE),
        }
    }

    /// Store backed by an explicit file path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CredentialProvider for ProfileStore {
    fn secrets(&self, service: &str) -> Result<HashMap<String, String>> {
        let data = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read profile store {}", self.path.display()))?;
        let profiles: HashMap<String, HashMap<String, String>> = serde_json::from_str(&data)
            .with_context(|| format!("Profile store {} is not valid JSON", self.path.display()))?;
        profiles.get(service).cloned().with_context(|| {
            format!(
                "No profile for service {:?} in {}",
                service,
                self.path.display()
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn store_with(name: &str, contents: &str) -> ProfileStore {
        let path = std::env::temp_dir().join(format!("urltitle-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        ProfileStore::at(path)
    }

    #[test]
    fn returns_the_secrets_for_a_known_service() {
        let store = store_with("known.json", r#"{"goo.gl": {"key": "s3cret"}}"#);
        let secrets = store.secrets("goo.gl").unwrap();
        assert_eq!(secrets.get("key").map(String::as_str), Some("s3cret"));
    }

    #[test]
    fn fails_for_an_unknown_service() {
        let store = store_with("unknown.json", r#"{"other": {"key": "x"}}"#);
        let err = store.secrets("goo.gl").unwrap_err();
        assert!(err.to_string().contains("No profile for service"));
    }

    #[test]
    fn fails_when_the_store_file_is_missing() {
        let store = ProfileStore::at(std::env::temp_dir().join("urltitle-no-such-store.json"));
        assert!(store.secrets("goo.gl").is_err());
    }

    #[test]
    fn fails_on_malformed_store_contents() {
        let store = store_with("malformed.json", "not json at all");
        let err = store.secrets("goo.gl").unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }
}
