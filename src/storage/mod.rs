use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::Utc;
use eyre::WrapErr;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::info;

use crate::datatypes::comment::Comment;

type CityMap = BTreeMap<String, Vec<Comment>>;

/// The on-disk comment store: one pretty-printed JSON object keyed by city
/// name. Loaded and saved in full on every request; the file is the unit of
/// success or failure.
pub struct CommentStore {
    path: PathBuf,
    // Serializes the load-modify-save sequence of appends so concurrent
    // posts cannot drop each other's writes.
    write_guard: Mutex<()>,
}

impl CommentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_guard: Mutex::new(()),
        }
    }

    /// Creates the store file containing `{}` if it is absent. Runs once at
    /// startup and leaves an existing file alone.
    pub async fn init(&self) -> eyre::Result<()> {
        if fs::try_exists(&self.path).await? {
            return Ok(());
        }
        fs::write(&self.path, "{}")
            .await
            .wrap_err("failed to create comment store file")?;
        info!("Created empty comment store at {}", self.path.display());
        Ok(())
    }

    /// All comments for `city`, oldest first. An unknown city is an empty
    /// list, not an error.
    pub async fn city_comments(&self, city: &str) -> eyre::Result<Vec<Comment>> {
        let mut map = self.load().await?;
        Ok(map.remove(city).unwrap_or_default())
    }

    /// Appends a comment for `city`, stamped with the current UTC time, and
    /// persists the whole store. Returns the stored comment.
    pub async fn append(&self, city: &str, nick: String, text: String) -> eyre::Result<Comment> {
        let _guard = self.write_guard.lock().await;

        let mut map = self.load().await?;
        let entries = map.entry(city.to_owned()).or_default();
        let comment = Comment {
            id: Comment::next_id(entries),
            nick,
            text,
            date: Utc::now(),
        };
        entries.push(comment.clone());
        self.save(&map).await?;
        Ok(comment)
    }

    async fn load(&self) -> eyre::Result<CityMap> {
        let data = fs::read_to_string(&self.path)
            .await
            .wrap_err("failed to read comment store file")?;
        serde_json::from_str(&data).wrap_err("comment store file holds invalid JSON")
    }

    // Writes to a scratch file and renames it over the store, so a reader
    // never sees a truncated or half-written document.
    async fn save(&self, map: &CityMap) -> eyre::Result<()> {
        let data = serde_json::to_string_pretty(map)?;
        let scratch = self.path.with_extension("json.tmp");
        fs::write(&scratch, data)
            .await
            .wrap_err("failed to write comment store file")?;
        fs::rename(&scratch, &self.path)
            .await
            .wrap_err("failed to replace comment store file")
    }
}
