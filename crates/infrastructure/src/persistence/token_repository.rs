//! File-based durable token storage.
//!
//! Tokens are stored in `.tijara/session.json` under the data directory.
//! This file should be excluded from backups and shared folders; it holds
//! live credentials.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tijara_application::ports::CredentialError;
use tijara_domain::TokenScope;

/// On-disk shape of the token file.
///
/// ```json
/// {
///   "admin_token": "eyJ...",
///   "tenant_token": null
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TokenFile {
    #[serde(default)]
    admin_token: Option<String>,
    #[serde(default)]
    tenant_token: Option<String>,
}

impl TokenFile {
    fn slot(&mut self, scope: TokenScope) -> &mut Option<String> {
        match scope {
            TokenScope::Admin => &mut self.admin_token,
            TokenScope::Tenant => &mut self.tenant_token,
        }
    }

    const fn get(&self, scope: TokenScope) -> Option<&String> {
        match scope {
            TokenScope::Admin => self.admin_token.as_ref(),
            TokenScope::Tenant => self.tenant_token.as_ref(),
        }
    }
}

/// Durable key-value location of the credential store.
///
/// No expiry is tracked here; only the cookie mirror expires. A token in
/// this file is returned for as long as it exists, stale or not.
#[derive(Debug, Clone)]
pub struct FileTokenRepository {
    data_dir: PathBuf,
}

impl FileTokenRepository {
    /// Creates a repository rooted at the given data directory.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Returns the token file path for a data directory.
    fn token_path(data_dir: &Path) -> PathBuf {
        data_dir.join(".tijara").join("session.json")
    }

    async fn load(&self) -> Result<TokenFile, CredentialError> {
        let path = Self::token_path(&self.data_dir);
        match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| CredentialError::Serialization(e.to_string())),
            // Missing file means no sessions yet.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(TokenFile::default()),
            Err(e) => Err(CredentialError::Io(e)),
        }
    }

    async fn save(&self, file: &TokenFile) -> Result<(), CredentialError> {
        let dir = self.data_dir.join(".tijara");
        tokio::fs::create_dir_all(&dir).await?;

        let bytes = serde_json::to_vec_pretty(file)
            .map_err(|e| CredentialError::Serialization(e.to_string()))?;
        tokio::fs::write(Self::token_path(&self.data_dir), bytes).await?;
        Ok(())
    }

    /// Writes a scope's token.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or written.
    pub async fn store(&self, scope: TokenScope, value: &str) -> Result<(), CredentialError> {
        let mut file = self.load().await?;
        *file.slot(scope) = Some(value.to_string());
        self.save(&file).await
    }

    /// Reads a scope's token.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub async fn fetch(&self, scope: TokenScope) -> Result<Option<String>, CredentialError> {
        Ok(self.load().await?.get(scope).cloned())
    }

    /// Removes both scopes' tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub async fn clear(&self) -> Result<(), CredentialError> {
        self.save(&TokenFile::default()).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_token_path_layout() {
        let path = FileTokenRepository::token_path(Path::new("/data"));
        assert_eq!(path, PathBuf::from("/data/.tijara/session.json"));
    }

    #[tokio::test]
    async fn test_store_then_fetch_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileTokenRepository::new(dir.path());

        repo.store(TokenScope::Admin, "tok-a").await.unwrap();
        repo.store(TokenScope::Tenant, "tok-t").await.unwrap();

        assert_eq!(
            repo.fetch(TokenScope::Admin).await.unwrap(),
            Some("tok-a".to_string())
        );
        assert_eq!(
            repo.fetch(TokenScope::Tenant).await.unwrap(),
            Some("tok-t".to_string())
        );
    }

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileTokenRepository::new(dir.path());

        assert_eq!(repo.fetch(TokenScope::Admin).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clear_removes_both_scopes() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileTokenRepository::new(dir.path());

        repo.store(TokenScope::Admin, "a").await.unwrap();
        repo.store(TokenScope::Tenant, "t").await.unwrap();
        repo.clear().await.unwrap();

        assert_eq!(repo.fetch(TokenScope::Admin).await.unwrap(), None);
        assert_eq!(repo.fetch(TokenScope::Tenant).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_storing_one_scope_keeps_the_other() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileTokenRepository::new(dir.path());

        repo.store(TokenScope::Admin, "a").await.unwrap();
        repo.store(TokenScope::Tenant, "t").await.unwrap();
        repo.store(TokenScope::Admin, "a2").await.unwrap();

        assert_eq!(
            repo.fetch(TokenScope::Tenant).await.unwrap(),
            Some("t".to_string())
        );
    }
}
