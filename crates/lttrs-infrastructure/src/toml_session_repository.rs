//! TOML-based SessionRepository implementation

use crate::dto::SessionV1_0_0;
use crate::paths::LttrsPaths;
use crate::storage::AtomicTomlFile;
use async_trait::async_trait;
use lttrs_core::session::{Session, SessionRecord, SessionRepository};
use lttrs_core::{LttrsError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A repository storing each session as its own TOML file.
///
/// ```text
/// sessions_dir/
/// ├── <session-id-1>.toml
/// └── <session-id-2>.toml
/// ```
///
/// Files are written through [`AtomicTomlFile`], so a session on disk is
/// always either the previous or the new version. All file access runs on
/// the blocking thread pool.
#[derive(Debug, Clone)]
pub struct TomlSessionRepository {
    sessions_dir: PathBuf,
}

impl TomlSessionRepository {
    /// Creates a repository rooted at `sessions_dir`, creating the directory
    /// if it doesn't exist.
    pub fn new(sessions_dir: impl AsRef<Path>) -> Result<Self> {
        let sessions_dir = sessions_dir.as_ref().to_path_buf();
        fs::create_dir_all(&sessions_dir).map_err(|e| {
            LttrsError::io(format!(
                "Failed to create sessions directory {:?}: {}",
                sessions_dir, e
            ))
        })?;

        Ok(Self { sessions_dir })
    }

    /// Creates a repository in the default data directory.
    pub fn default_location() -> Result<Self> {
        let sessions_dir =
            LttrsPaths::sessions_dir().map_err(|e| LttrsError::config(e.to_string()))?;
        Self::new(sessions_dir)
    }

    pub fn sessions_dir(&self) -> &Path {
        &self.sessions_dir
    }

    /// Returns the file for `session_id`, or `None` if the id can't name a file.
    fn session_file(&self, session_id: &str) -> Option<AtomicTomlFile<SessionV1_0_0>> {
        let valid = !session_id.is_empty()
            && session_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        valid.then(|| AtomicTomlFile::new(self.sessions_dir.join(format!("{}.toml", session_id))))
    }

    fn load_from(file: &AtomicTomlFile<SessionV1_0_0>) -> Result<Option<Session>> {
        match file.load()? {
            Some(dto) => Session::from_record(SessionRecord::from(dto)).map(Some),
            None => Ok(None),
        }
    }

    fn list_blocking(sessions_dir: &Path) -> Result<Vec<Session>> {
        let entries = match fs::read_dir(sessions_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut sessions = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                continue;
            }

            match Self::load_from(&AtomicTomlFile::new(&path)) {
                Ok(Some(session)) => sessions.push(session),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(path = ?path, error = %e, "Skipping unreadable session file")
                }
            }
        }

        sessions.sort_by(|a, b| b.updated_at().cmp(&a.updated_at()));
        Ok(sessions)
    }
}

/// Runs blocking file work off the async executor.
async fn blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| LttrsError::internal(format!("Storage task failed: {}", e)))?
}

#[async_trait]
impl SessionRepository for TomlSessionRepository {
    async fn find_by_id(&self, session_id: &str) -> Result<Option<Session>> {
        let Some(file) = self.session_file(session_id) else {
            return Ok(None);
        };
        blocking(move || Self::load_from(&file)).await
    }

    async fn save(&self, session: &Session) -> Result<()> {
        let file = self.session_file(session.id()).ok_or_else(|| {
            LttrsError::data_access(format!("Invalid session id '{}'", session.id()))
        })?;
        let dto = SessionV1_0_0::from(session.to_record());

        blocking(move || file.save(&dto).map_err(LttrsError::from)).await?;
        tracing::debug!(session_id = %session.id(), score = session.score(), "Session saved");
        Ok(())
    }

    async fn delete(&self, session_id: &str) -> Result<()> {
        let Some(file) = self.session_file(session_id) else {
            return Ok(());
        };
        blocking(move || file.remove().map_err(LttrsError::from)).await
    }

    async fn list_all(&self) -> Result<Vec<Session>> {
        let sessions_dir = self.sessions_dir.clone();
        blocking(move || Self::list_blocking(&sessions_dir)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lttrs_core::dictionary::Dictionary;
    use lttrs_core::word::{Baseword, Locale};
    use tempfile::TempDir;

    fn dictionary() -> Dictionary {
        Dictionary::new(Locale::De, ["sand", "sack", "dank", "sandsack", "kassa"])
    }

    fn new_session() -> Session {
        let baseword = Baseword::parse("Sandsack", Locale::De).unwrap();
        Session::start(baseword, &dictionary()).unwrap()
    }

    #[tokio::test]
    async fn test_save_and_find_by_id() {
        let temp_dir = TempDir::new().unwrap();
        let repository = TomlSessionRepository::new(temp_dir.path().join("sessions")).unwrap();

        let mut session = new_session();
        session.submit("sand", &dictionary()).unwrap();
        repository.save(&session).await.unwrap();

        let loaded = repository.find_by_id(session.id()).await.unwrap().unwrap();
        assert_eq!(loaded, session);
        assert!(temp_dir
            .path()
            .join("sessions")
            .join(format!("{}.toml", session.id()))
            .exists());
    }

    #[tokio::test]
    async fn test_find_missing_or_invalid_id() {
        let temp_dir = TempDir::new().unwrap();
        let repository = TomlSessionRepository::new(temp_dir.path()).unwrap();

        assert!(repository.find_by_id("nope").await.unwrap().is_none());
        assert!(repository.find_by_id("../escape").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_and_delete_removes() {
        let temp_dir = TempDir::new().unwrap();
        let repository = TomlSessionRepository::new(temp_dir.path()).unwrap();

        let mut session = new_session();
        repository.save(&session).await.unwrap();
        session.finish("Anna").unwrap();
        repository.save(&session).await.unwrap();

        let loaded = repository.find_by_id(session.id()).await.unwrap().unwrap();
        assert!(loaded.is_finished());
        assert_eq!(loaded.player_name(), Some("Anna"));
        assert_eq!(repository.list_all().await.unwrap().len(), 1);

        repository.delete(session.id()).await.unwrap();
        repository.delete(session.id()).await.unwrap();
        assert!(repository.find_by_id(session.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_all_skips_corrupt_files() {
        let temp_dir = TempDir::new().unwrap();
        let repository = TomlSessionRepository::new(temp_dir.path()).unwrap();

        let first = new_session();
        repository.save(&first).await.unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let mut second = new_session();
        second.submit("sack", &dictionary()).unwrap();
        repository.save(&second).await.unwrap();

        fs::write(temp_dir.path().join("broken.toml"), "id = [").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "not a session").unwrap();

        let sessions = repository.list_all().await.unwrap();
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].id(), second.id());

        let err = repository.find_by_id("broken").await.unwrap_err();
        assert!(err.is_serialization());
    }

    #[tokio::test]
    async fn test_query_finished_reads_from_files() {
        let temp_dir = TempDir::new().unwrap();
        let repository = TomlSessionRepository::new(temp_dir.path()).unwrap();

        let mut low = new_session();
        low.submit("sand", &dictionary()).unwrap();
        low.finish("Low").unwrap();
        let mut high = new_session();
        high.submit("sandsack", &dictionary()).unwrap();
        high.finish("High").unwrap();
        let open = new_session();

        for session in [&low, &high, &open] {
            repository.save(session).await.unwrap();
        }

        let finished = repository.query_finished().await.unwrap();
        let names: Vec<_> = finished.iter().filter_map(Session::player_name).collect();
        assert_eq!(names, vec!["High", "Low"]);

        let open_loaded = repository
            .load_most_recent_unfinished(Locale::De)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(open_loaded.id(), open.id());
    }
}
