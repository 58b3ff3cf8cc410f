use crate::entities::{game_session, game_session::SESSION_ROW_ID, prelude::*};
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, Set, TransactionTrait};
use tracing::info;

pub struct SessionRepository {
    conn: DatabaseConnection,
}

impl SessionRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn now() -> String {
        chrono::Utc::now().to_rfc3339()
    }

    pub async fn get(&self) -> anyhow::Result<Option<game_session::Model>> {
        Ok(GameSession::find_by_id(SESSION_ROW_ID)
            .one(&self.conn)
            .await?)
    }

    /// Writes the session row unless one already exists. Returns whether a
    /// row was written.
    pub async fn create_if_absent(&self, anime_id: i32) -> anyhow::Result<bool> {
        let inserted = GameSession::insert(game_session::ActiveModel {
            id: Set(SESSION_ROW_ID),
            anime_id: Set(anime_id),
            created_at: Set(Self::now()),
        })
        .on_conflict(
            OnConflict::column(game_session::Column::Id)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&self.conn)
        .await?;

        Ok(inserted > 0)
    }

    /// Ends the round: removes the session row and its guesses in one
    /// transaction.
    pub async fn delete(&self) -> anyhow::Result<bool> {
        let txn = self.conn.begin().await?;

        let result = GameSession::delete_by_id(SESSION_ROW_ID).exec(&txn).await?;
        let deleted = result.rows_affected > 0;

        let cleared = if deleted {
            Guesses::delete_many().exec(&txn).await?.rows_affected
        } else {
            0
        };

        txn.commit().await?;

        if deleted {
            info!(cleared, "Ended round");
        }
        Ok(deleted)
    }

    /// Clears the guess history and points the session at `anime_id` in one
    /// transaction.
    pub async fn start_round(&self, anime_id: i32) -> anyhow::Result<()> {
        let txn = self.conn.begin().await?;

        let cleared = Guesses::delete_many().exec(&txn).await?.rows_affected;

        GameSession::insert(game_session::ActiveModel {
            id: Set(SESSION_ROW_ID),
            anime_id: Set(anime_id),
            created_at: Set(Self::now()),
        })
        .on_conflict(
            OnConflict::column(game_session::Column::Id)
                .update_columns([
                    game_session::Column::AnimeId,
                    game_session::Column::CreatedAt,
                ])
                .to_owned(),
        )
        .exec_without_returning(&txn)
        .await?;

        txn.commit().await?;

        info!(anime_id, cleared, "Started new round");
        Ok(())
    }
}
