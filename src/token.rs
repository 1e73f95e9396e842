//! Token persistence: `token.json` in the working directory.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rspotify::Token;
use serde::{Deserialize, Serialize};

pub const TOKEN_FILE: &str = "token.json";

/// The on-disk shape of an acquired token. Written once by the token
/// acquirer, read back verbatim by the playlist populator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredToken {
    pub access_token: String,
    pub token_type: String,
    pub refresh_token: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl StoredToken {
    pub fn from_token(token: &Token) -> Self {
        Self {
            access_token: token.access_token.clone(),
            token_type: "Bearer".to_string(),
            refresh_token: token.refresh_token.clone(),
            expires_at: token.expires_at,
        }
    }

    /// Rehydrate an rspotify token. `expires_in` is recomputed from the
    /// stored expiry; a token past its expiry simply comes back as expired
    /// and gets refreshed by the caller.
    pub fn into_token(self, scopes: HashSet<String>) -> Token {
        let expires_in = self
            .expires_at
            .map(|at| at - Utc::now())
            .unwrap_or_else(chrono::Duration::zero);

        Token {
            access_token: self.access_token,
            expires_in,
            expires_at: self.expires_at,
            refresh_token: self.refresh_token,
            scopes,
        }
    }
}

/// Write the token with create-or-truncate semantics. On Unix the file is
/// created mode 0600: the refresh token grants account access.
pub fn save(path: &Path, token: &StoredToken) -> Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let file = options
        .open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    serde_json::to_writer(file, token).context("failed to encode token")?;

    Ok(())
}

/// Read a previously saved token. Missing or malformed files are hard
/// errors; there is no fallback to re-authorization.
pub fn load(path: &Path) -> Result<StoredToken> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read token file {}", path.display()))?;
    serde_json::from_str(&content).context("failed to parse token file")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_token() -> StoredToken {
        StoredToken {
            access_token: "access-abc".to_string(),
            token_type: "Bearer".to_string(),
            refresh_token: Some("refresh-xyz".to_string()),
            expires_at: Some(Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap()),
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(TOKEN_FILE);

        let token = sample_token();
        save(&path, &token).expect("save should succeed");
        let loaded = load(&path).expect("load should succeed");

        assert_eq!(loaded, token);
    }

    #[test]
    fn save_truncates_existing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(TOKEN_FILE);

        fs::write(&path, "x".repeat(4096)).expect("seed file");
        save(&path, &sample_token()).expect("save should succeed");

        let loaded = load(&path).expect("load should parse cleanly after truncation");
        assert_eq!(loaded.access_token, "access-abc");
    }

    #[test]
    fn load_rejects_malformed_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(TOKEN_FILE);

        fs::write(&path, "{not json").expect("seed file");
        assert!(load(&path).is_err());
    }

    #[test]
    fn load_fails_on_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(load(&dir.path().join("absent.json")).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn saved_file_denies_group_and_other() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(TOKEN_FILE);
        save(&path, &sample_token()).expect("save should succeed");

        let mode = fs::metadata(&path).expect("metadata").permissions().mode();
        assert_eq!(mode & 0o077, 0);
    }

    #[test]
    fn expired_stored_token_rehydrates_as_expired() {
        let mut stored = sample_token();
        stored.expires_at = Some(Utc::now() - chrono::Duration::hours(2));
        let token = stored.into_token(HashSet::new());
        assert!(token.is_expired());
    }
}
