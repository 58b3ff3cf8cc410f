use crate::models::anime::{Anime, AnimeTitle};
use crate::models::guess::{GuessOutcome, GuessRecord};
use crate::models::import::AnimeRecord;
use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

pub use crate::entities::game_session::Model as GameSession;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

fn is_memory_url(db_url: &str) -> bool {
    db_url.contains(":memory:") || db_url.contains("mode=memory")
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        let memory = is_memory_url(db_url);

        if db_url.starts_with("sqlite:") && !memory {
            let path_str = db_url
                .trim_start_matches("sqlite://")
                .trim_start_matches("sqlite:");
            let path_str = path_str.split('?').next().unwrap_or(path_str);
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        // Every pooled connection to `:memory:` would be its own database.
        let (max_connections, min_connections) = if memory {
            (1, 1)
        } else {
            (max_connections, min_connections.min(max_connections))
        };

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .sqlx_logging(false);
        if !memory {
            opt.idle_timeout(Duration::from_secs(300))
                .max_lifetime(Duration::from_secs(600));
        }

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn anime_repo(&self) -> repositories::anime::AnimeRepository {
        repositories::anime::AnimeRepository::new(self.conn.clone())
    }

    fn guess_repo(&self) -> repositories::guess::GuessRepository {
        repositories::guess::GuessRepository::new(self.conn.clone())
    }

    fn session_repo(&self) -> repositories::session::SessionRepository {
        repositories::session::SessionRepository::new(self.conn.clone())
    }

    pub async fn list_anime(&self) -> Result<Vec<Anime>> {
        self.anime_repo().list_all().await
    }

    pub async fn get_anime(&self, id: i32) -> Result<Option<Anime>> {
        self.anime_repo().get(id).await
    }

    pub async fn random_anime(&self) -> Result<Option<Anime>> {
        self.anime_repo().random().await
    }

    pub async fn anime_exists(&self, id: i32) -> Result<bool> {
        self.anime_repo().exists(id).await
    }

    pub async fn count_anime(&self) -> Result<u64> {
        self.anime_repo().count().await
    }

    pub async fn list_titles(&self) -> Result<Vec<AnimeTitle>> {
        self.anime_repo().list_titles().await
    }

    pub async fn list_genres(&self) -> Result<Vec<String>> {
        self.anime_repo().list_genres().await
    }

    pub async fn list_studios(&self) -> Result<Vec<String>> {
        self.anime_repo().list_studios().await
    }

    pub async fn upsert_anime(&self, record: &AnimeRecord) -> Result<()> {
        self.anime_repo().upsert(record).await
    }

    pub async fn list_guesses(&self) -> Result<Vec<GuessRecord>> {
        self.guess_repo().list().await
    }

    pub async fn submit_guess(&self, anime_id: i32) -> Result<Option<GuessOutcome>> {
        self.guess_repo().submit(anime_id).await
    }

    pub async fn clear_guesses(&self) -> Result<u64> {
        self.guess_repo().clear().await
    }

    pub async fn guess_stats(&self, answer: i32) -> Result<(u64, bool)> {
        self.guess_repo().stats(answer).await
    }

    pub async fn guessed_anime_ids(&self) -> Result<Vec<i32>> {
        self.guess_repo().guessed_anime_ids().await
    }

    pub async fn get_session(&self) -> Result<Option<GameSession>> {
        self.session_repo().get().await
    }

    pub async fn create_session(&self, anime_id: i32) -> Result<bool> {
        self.session_repo().create_if_absent(anime_id).await
    }

    pub async fn delete_session(&self) -> Result<bool> {
        self.session_repo().delete().await
    }

    pub async fn start_round(&self, anime_id: i32) -> Result<()> {
        self.session_repo().start_round(anime_id).await
    }
}
