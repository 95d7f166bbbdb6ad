//! # User Record Store
//!
//! One pretty-printed JSON document per user in a flat directory. Every save
//! overwrites the whole file with the given record. There is no locking and
//! no schema enforcement.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, info};

/// The persisted document for one user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Lower-cased free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symptoms: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_advice: Option<String>,
}

/// Flat directory of `user_<id>.json` files
#[derive(Debug, Clone)]
pub struct UserStore {
    dir: PathBuf,
}

impl UserStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the JSON document for a user
    pub fn record_path(&self, user_id: &str) -> PathBuf {
        self.dir.join(format!("user_{user_id}.json"))
    }

    /// Write the record for a user, replacing any previous file
    pub async fn save(&self, user_id: &str, record: &UserRecord) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("Failed to create data directory {}", self.dir.display()))?;

        let path = self.record_path(user_id);
        let json = serde_json::to_string_pretty(record).context("Failed to serialize user record")?;
        tokio::fs::write(&path, json)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;

        info!(user_id, path = %path.display(), "User record saved");
        Ok(())
    }

    /// Read the record for a user, `None` if it was never saved
    pub async fn load(&self, user_id: &str) -> Result<Option<UserRecord>> {
        let path = self.record_path(user_id);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()));
            }
        };

        let record = serde_json::from_str(&content)
            .with_context(|| format!("Malformed user record {}", path.display()))?;
        Ok(Some(record))
    }

    /// Read every `*.json` document in the directory
    ///
    /// A missing directory means no records. Any unreadable or malformed file
    /// fails the whole call.
    pub async fn load_all(&self) -> Result<Vec<UserRecord>> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(dir = %self.dir.display(), "Data directory does not exist yet");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to list {}", self.dir.display()));
            }
        };

        let mut records = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .context("Failed to read directory entry")?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }

            let content = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let record: UserRecord = serde_json::from_str(&content)
                .with_context(|| format!("Malformed user record {}", path.display()))?;
            records.push(record);
        }

        debug!(count = records.len(), "Loaded user records");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn survey_record() -> UserRecord {
        UserRecord {
            name: Some("Asha".to_string()),
            age: Some("thirty".to_string()),
            gender: Some("Female".to_string()),
            symptoms: Some("fever".to_string()),
            ai_advice: None,
        }
    }

    #[tokio::test]
    async fn test_save_creates_directory_and_file() -> Result<()> {
        let tmp = TempDir::new()?;
        let store = UserStore::new(tmp.path().join("users_data"));

        store.save("42", &survey_record()).await?;

        let path = store.record_path("42");
        assert!(path.ends_with("users_data/user_42.json"));
        assert!(path.exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_saved_file_is_pretty_printed_in_field_order() -> Result<()> {
        let tmp = TempDir::new()?;
        let store = UserStore::new(tmp.path());

        store.save("7", &survey_record()).await?;

        let content = std::fs::read_to_string(store.record_path("7"))?;
        let expected = "{\n  \"name\": \"Asha\",\n  \"age\": \"thirty\",\n  \"gender\": \"Female\",\n  \"symptoms\": \"fever\"\n}";
        assert_eq!(content, expected);
        Ok(())
    }

    #[tokio::test]
    async fn test_save_overwrites_instead_of_merging() -> Result<()> {
        let tmp = TempDir::new()?;
        let store = UserStore::new(tmp.path());

        store.save("1", &survey_record()).await?;
        let advice_only = UserRecord {
            ai_advice: Some("Rest".to_string()),
            ..Default::default()
        };
        store.save("1", &advice_only).await?;

        let loaded = store.load("1").await?;
        assert_eq!(loaded, Some(advice_only));
        Ok(())
    }

    #[tokio::test]
    async fn test_load_missing_user() -> Result<()> {
        let tmp = TempDir::new()?;
        let store = UserStore::new(tmp.path());

        assert_eq!(store.load("nobody").await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_load_all_skips_non_json_files() -> Result<()> {
        let tmp = TempDir::new()?;
        let store = UserStore::new(tmp.path());

        store.save("1", &survey_record()).await?;
        store.save("2", &UserRecord::default()).await?;
        std::fs::write(tmp.path().join("notes.txt"), "not a record")?;

        let records = store.load_all().await?;
        assert_eq!(records.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_load_all_missing_directory_is_empty() -> Result<()> {
        let tmp = TempDir::new()?;
        let store = UserStore::new(tmp.path().join("absent"));

        assert!(store.load_all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_load_all_fails_on_malformed_record() -> Result<()> {
        let tmp = TempDir::new()?;
        let store = UserStore::new(tmp.path());

        store.save("1", &survey_record()).await?;
        std::fs::write(tmp.path().join("user_2.json"), "{ truncated")?;

        assert!(store.load_all().await.is_err());
        Ok(())
    }
}
