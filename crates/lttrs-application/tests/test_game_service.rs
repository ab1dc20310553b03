use async_trait::async_trait;
use lttrs_application::{BasewordPicker, DictionaryCache, GameMode, GameService, ResetOutcome};
use lttrs_core::config::{DEFAULT_PLAYER_NAME, GameConfig};
use lttrs_core::session::{Session, SessionRepository};
use lttrs_core::word::{Locale, score_of};
use lttrs_core::{LttrsError, Result, WordError};
use lttrs_infrastructure::{FileWordSource, InMemorySessionRepository, TomlSessionRepository};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tempfile::TempDir;

const GERMAN_WORDS: &str = "\
# test list
sand
sack
dank
kassa
das
ass
and
Sandsack
taubenei
taube
bein
eine
tau
";

/// In-memory store whose writes can be switched off.
#[derive(Default)]
struct FlakyRepository {
    inner: InMemorySessionRepository,
    fail_writes: AtomicBool,
}

#[async_trait]
impl SessionRepository for FlakyRepository {
    async fn find_by_id(&self, session_id: &str) -> Result<Option<Session>> {
        self.inner.find_by_id(session_id).await
    }

    async fn save(&self, session: &Session) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(LttrsError::io("disk full"));
        }
        self.inner.save(session).await
    }

    async fn delete(&self, session_id: &str) -> Result<()> {
        self.inner.delete(session_id).await
    }

    async fn list_all(&self) -> Result<Vec<Session>> {
        self.inner.list_all().await
    }
}

struct Fixture {
    _dir: TempDir,
    repository: Arc<FlakyRepository>,
    service: GameService,
}

fn word_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("DE.txt"), GERMAN_WORDS).unwrap();
    dir
}

fn service_with(dir: &TempDir, repository: Arc<dyn SessionRepository>) -> GameService {
    let dictionaries = Arc::new(DictionaryCache::new(Arc::new(FileWordSource::new(dir.path()))));
    GameService::new(repository, dictionaries, &GameConfig::default())
        .with_picker(BasewordPicker::seeded(42))
}

fn fixture() -> Fixture {
    let dir = word_dir();
    let repository = Arc::new(FlakyRepository::default());
    let service = service_with(&dir, repository.clone());
    Fixture {
        _dir: dir,
        repository,
        service,
    }
}

async fn shared(fixture: &Fixture, word: &str) -> Session {
    fixture
        .service
        .start_game(GameMode::Shared(word.to_string()))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_shared_game_enumerates_and_persists() {
    let fixture = fixture();
    let session = shared(&fixture, "SANDSACK").await;

    let possible: Vec<&str> = session.possible_words().iter().map(String::as_str).collect();
    assert_eq!(
        possible,
        vec!["and", "ass", "dank", "das", "kassa", "sack", "sand", "sandsack"]
    );
    assert_eq!(session.max_possible_words(), 8);
    assert_eq!(session.share_code(), "SANDSACK");

    let stored = fixture.service.find_session(session.id()).await.unwrap();
    assert_eq!(stored, session);
}

#[tokio::test]
async fn test_invalid_shared_baseword_creates_nothing() {
    let fixture = fixture();

    let err = fixture
        .service
        .start_game(GameMode::Shared("INVALID1".to_string()))
        .await
        .unwrap_err();

    assert!(err.is_invalid_baseword());
    assert!(fixture.repository.inner.is_empty().await);
}

#[tokio::test]
async fn test_submit_checks_in_order_and_scores() {
    let fixture = fixture();
    let mut session = shared(&fixture, "Sandsack").await;

    let accepted = fixture.service.submit(" Sand ", &mut session).await.unwrap();
    assert_eq!(accepted.word, "sand");
    assert_eq!(accepted.words_found, 1);

    let rejections = [
        ("   ", WordError::EmptyInput),
        (
            "sa",
            WordError::TooShort {
                word: "sa".to_string(),
                min_length: 3,
            },
        ),
        (
            "SAND",
            WordError::AlreadyUsed {
                word: "sand".to_string(),
            },
        ),
        (
            "zebra",
            WordError::NotConstructible {
                word: "zebra".to_string(),
                baseword: "Sandsack".to_string(),
            },
        ),
        (
            "sacks",
            WordError::NotInDictionary {
                word: "sacks".to_string(),
            },
        ),
    ];

    for (raw, expected) in rejections {
        let before = session.clone();
        let err = fixture.service.submit(raw, &mut session).await.unwrap_err();
        assert_eq!(err.as_word_error(), Some(&expected), "input {raw:?}");
        assert_eq!(session, before);
    }

    fixture.service.submit("sandsack", &mut session).await.unwrap();
    fixture.service.submit("Kassa", &mut session).await.unwrap();

    assert_eq!(session.used_words(), ["sand", "sandsack", "kassa"]);
    let expected_score: u32 = session.used_words().iter().map(|w| score_of(w)).sum();
    assert_eq!(session.score(), expected_score);
    assert!(session
        .used_words()
        .iter()
        .all(|w| session.possible_words().contains(w)));

    let stored = fixture.service.find_session(session.id()).await.unwrap();
    assert_eq!(stored.score(), session.score());
}

#[tokio::test]
async fn test_failed_save_leaves_session_untouched() {
    let fixture = fixture();
    let mut session = shared(&fixture, "Sandsack").await;
    let before = session.clone();

    fixture.repository.fail_writes.store(true, Ordering::SeqCst);

    assert!(fixture.service.submit("sand", &mut session).await.is_err());
    assert_eq!(session, before);

    assert!(fixture.service.end_game("Anna", &mut session).await.is_err());
    assert!(!session.is_finished());

    fixture.repository.fail_writes.store(false, Ordering::SeqCst);
    fixture.service.submit("sand", &mut session).await.unwrap();
}

#[tokio::test]
async fn test_end_game_only_once() {
    let fixture = fixture();
    let mut session = shared(&fixture, "Sandsack").await;
    fixture.service.submit("sack", &mut session).await.unwrap();

    fixture.service.end_game("  ", &mut session).await.unwrap();
    assert!(session.is_finished());
    assert_eq!(session.player_name(), Some(DEFAULT_PLAYER_NAME));
    assert!(session.finished_at().is_some());

    let before = session.clone();
    let err = fixture
        .service
        .end_game("Somebody", &mut session)
        .await
        .unwrap_err();
    assert!(err.is_already_finished());
    assert_eq!(session, before);

    let err = fixture.service.submit("sand", &mut session).await.unwrap_err();
    assert!(err.is_already_finished());
    assert_eq!(session, before);
}

#[tokio::test]
async fn test_reset_requires_confirmation_once_words_were_found() {
    let fixture = fixture();

    let untouched = shared(&fixture, "Sandsack").await;
    let ResetOutcome::Restarted(fresh) =
        fixture.service.reset_game(&untouched, false).await.unwrap()
    else {
        panic!("untouched session should reset without confirmation");
    };
    // Random games never repeat the previous baseword
    assert_eq!(fresh.baseword().as_str(), "taubenei");
    assert!(fixture.repository.find_by_id(untouched.id()).await.unwrap().is_none());

    let mut played = fresh;
    fixture.service.submit("taube", &mut played).await.unwrap();
    assert_eq!(
        fixture.service.reset_game(&played, false).await.unwrap(),
        ResetOutcome::ConfirmationRequired
    );
    assert!(fixture.repository.find_by_id(played.id()).await.unwrap().is_some());

    let outcome = fixture.service.reset_game(&played, true).await.unwrap();
    assert!(matches!(outcome, ResetOutcome::Restarted(_)));
    assert!(fixture.repository.find_by_id(played.id()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_finished_game_resets_without_confirmation() {
    let fixture = fixture();
    let mut session = shared(&fixture, "Sandsack").await;
    fixture.service.submit("sand", &mut session).await.unwrap();
    fixture.service.end_game("Ida", &mut session).await.unwrap();

    let err = fixture.service.submit("sack", &mut session).await.unwrap_err();
    assert!(err.is_already_finished());

    let outcome = fixture.service.reset_game(&session, false).await.unwrap();
    let ResetOutcome::Restarted(fresh) = outcome else {
        panic!("a finished game should reset without confirmation");
    };
    assert!(!fresh.is_finished());
    assert!(fixture.repository.find_by_id(session.id()).await.unwrap().is_some());
}

#[tokio::test]
async fn test_continue_last_session() {
    let fixture = fixture();

    let mut open = shared(&fixture, "Taubenei").await;
    fixture.service.submit("bein", &mut open).await.unwrap();

    let continued = fixture
        .service
        .start_game(GameMode::ContinueLastSession)
        .await
        .unwrap();
    assert_eq!(continued, open);

    let mut done = continued;
    fixture.service.end_game("Anna", &mut done).await.unwrap();

    let fresh = fixture
        .service
        .start_game(GameMode::ContinueLastSession)
        .await
        .unwrap();
    assert_ne!(fresh.id(), done.id());
    assert!(fresh.is_untouched());
    assert_eq!(fresh.baseword().as_str(), "sandsack");
}

#[tokio::test]
async fn test_highscores_rank_by_score_then_completion() {
    let fixture = fixture();

    for (name, words) in [
        ("Anna", &["sand", "sack"][..]),
        ("Ben", &["sandsack"][..]),
        ("Cleo", &["sack", "sand"][..]),
    ] {
        let mut session = shared(&fixture, "Sandsack").await;
        for word in words {
            fixture.service.submit(word, &mut session).await.unwrap();
        }
        fixture.service.end_game(name, &mut session).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    // unfinished games never show up
    shared(&fixture, "Taubenei").await;

    let entries = fixture.service.highscores(None).await.unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.player_name.as_str()).collect();
    assert_eq!(names, vec!["Ben", "Anna", "Cleo"]);
    assert_eq!(entries[0].rank, 1);
    assert_eq!(entries[0].baseword, "Sandsack");
    assert_eq!(entries[1].score, entries[2].score);

    let top = fixture.service.highscores(Some(2)).await.unwrap();
    assert_eq!(top.len(), 2);
}

#[tokio::test]
async fn test_missing_locale_is_dictionary_unavailable() {
    let fixture = fixture();

    assert_eq!(
        fixture.service.available_locales().await.unwrap(),
        vec![Locale::De]
    );

    let err = fixture.service.set_locale(Locale::En).await.unwrap_err();
    assert!(err.is_dictionary_unavailable());
    assert!(err.as_word_error().is_none());
    assert_eq!(fixture.service.locale().await, Locale::De);
}

#[tokio::test]
async fn test_random_game_after_restart_skips_last_baseword() {
    let dir = word_dir();
    let repository: Arc<dyn SessionRepository> = Arc::new(InMemorySessionRepository::new());

    let mut previous = service_with(&dir, repository.clone())
        .start_game(GameMode::Random)
        .await
        .unwrap();

    // Every round is a new process over the same storage
    for seed in 0..20 {
        tokio::time::sleep(Duration::from_millis(2)).await;
        let source = Arc::new(FileWordSource::new(dir.path()));
        let dictionaries = Arc::new(DictionaryCache::new(source));
        let service = GameService::new(repository.clone(), dictionaries, &GameConfig::default())
            .with_picker(BasewordPicker::seeded(seed));

        let mut session = service.start_game(GameMode::Random).await.unwrap();
        assert_ne!(session.baseword(), previous.baseword());

        if seed % 2 == 0 {
            let word = if session.baseword().as_str() == "sandsack" { "sand" } else { "tau" };
            service.submit(word, &mut session).await.unwrap();
            service.end_game("Restarted", &mut session).await.unwrap();
        }
        previous = session;
    }
}

#[tokio::test]
async fn test_locale_switch_changes_new_games() {
    let dir = word_dir();
    std::fs::write(dir.path().join("EN.txt"), "tea\neat\nsweater\nsweaters\n").unwrap();
    let service = service_with(&dir, Arc::new(InMemorySessionRepository::new()));

    service.set_locale(Locale::En).await.unwrap();
    let session = service.start_game(GameMode::Random).await.unwrap();

    assert_eq!(session.locale(), Locale::En);
    assert_eq!(session.baseword().as_str(), "sweaters");
    assert!(session.possible_words().contains("sweater"));
}

#[tokio::test]
async fn test_games_survive_restart_with_toml_storage() {
    let words = word_dir();
    let data = TempDir::new().unwrap();

    let session_id = {
        let repository =
            Arc::new(TomlSessionRepository::new(data.path().join("sessions")).unwrap());
        let service = service_with(&words, repository);
        let mut session = service
            .start_game(GameMode::Shared("sandsack".to_string()))
            .await
            .unwrap();
        service.submit("dank", &mut session).await.unwrap();
        service.end_game("Dora", &mut session).await.unwrap();
        session.id().to_string()
    };

    let repository = Arc::new(TomlSessionRepository::new(data.path().join("sessions")).unwrap());
    let service = service_with(&words, repository);

    let entries = service.highscores(None).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].session_id, session_id);
    assert_eq!(entries[0].player_name, "Dora");
    assert_eq!(entries[0].score, score_of("dank"));
}
