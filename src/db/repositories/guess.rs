use super::{genre_names, studio_names};
use crate::entities::{game_session::SESSION_ROW_ID, guesses, prelude::*};
use crate::models::guess::{GuessOutcome, GuessRecord};
use chrono::SecondsFormat;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

pub struct GuessRepository {
    conn: DatabaseConnection,
}

impl GuessRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// All guesses of the current round joined with the guessed anime,
    /// newest first.
    pub async fn list(&self) -> anyhow::Result<Vec<GuessRecord>> {
        let rows = Guesses::find()
            .find_also_related(Anime)
            .order_by_desc(guesses::Column::CreatedAt)
            .order_by_desc(guesses::Column::Id)
            .all(&self.conn)
            .await?;

        let ids: Vec<i32> = rows.iter().map(|(guess, _)| guess.anime_id).collect();
        let (mut genres, mut studios) = tokio::try_join!(
            genre_names(&self.conn, Some(ids.as_slice())),
            studio_names(&self.conn, Some(ids.as_slice()))
        )?;

        Ok(rows
            .into_iter()
            .filter_map(|(guess, anime)| {
                let anime = anime?;
                Some(GuessRecord {
                    anime: crate::models::anime::Anime {
                        genres: genres.remove(&anime.mal_id).unwrap_or_default(),
                        studios: studios.remove(&anime.mal_id).unwrap_or_default(),
                        mal_id: anime.mal_id,
                        title: anime.title,
                        source: anime.source,
                        start_season: anime.start_season,
                        mean: anime.mean,
                        media_type: anime.media_type,
                        thumbnail: anime.thumbnail,
                    },
                    correct: guess.correct,
                    created_at: guess.created_at,
                })
            })
            .collect())
    }

    /// Records a guess against the session row read in the same transaction.
    ///
    /// Returns `None` when there is no session to guess against.
    pub async fn submit(&self, anime_id: i32) -> anyhow::Result<Option<GuessOutcome>> {
        let txn = self.conn.begin().await?;

        let Some(session) = GameSession::find_by_id(SESSION_ROW_ID).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(None);
        };

        let correct = session.anime_id == anime_id;
        let created_at = chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

        let inserted = Guesses::insert(guesses::ActiveModel {
            anime_id: Set(anime_id),
            correct: Set(correct),
            created_at: Set(created_at),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(guesses::Column::AnimeId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&txn)
        .await?;

        txn.commit().await?;

        Ok(Some(GuessOutcome {
            correct,
            duplicate: inserted == 0,
        }))
    }

    pub async fn clear(&self) -> anyhow::Result<u64> {
        let result = Guesses::delete_many().exec(&self.conn).await?;
        Ok(result.rows_affected)
    }

    /// Number of guesses so far and whether `answer` was guessed correctly.
    pub async fn stats(&self, answer: i32) -> anyhow::Result<(u64, bool)> {
        let (total, correct) = tokio::try_join!(
            Guesses::find().count(&self.conn),
            Guesses::find()
                .filter(guesses::Column::AnimeId.eq(answer))
                .filter(guesses::Column::Correct.eq(true))
                .count(&self.conn)
        )?;
        Ok((total, correct > 0))
    }

    /// Guessed anime in submission order, oldest first.
    pub async fn guessed_anime_ids(&self) -> anyhow::Result<Vec<i32>> {
        let rows = Guesses::find()
            .order_by_asc(guesses::Column::CreatedAt)
            .order_by_asc(guesses::Column::Id)
            .all(&self.conn)
            .await?;
        Ok(rows.into_iter().map(|g| g.anime_id).collect())
    }
}
