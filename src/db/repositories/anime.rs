use super::{genre_names, studio_names};
use crate::entities::{anime, anime_genres, anime_studios, anime_titles, genres, prelude::*, studios};
use crate::models::anime::{Anime, AnimeTitle};
use crate::models::import::AnimeRecord;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use std::collections::HashMap;
use tracing::info;

pub struct AnimeRepository {
    conn: DatabaseConnection,
}

impl AnimeRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model_to_anime(
        model: anime::Model,
        genres: &mut HashMap<i32, Vec<String>>,
        studios: &mut HashMap<i32, Vec<String>>,
    ) -> Anime {
        Anime {
            genres: genres.remove(&model.mal_id).unwrap_or_default(),
            studios: studios.remove(&model.mal_id).unwrap_or_default(),
            mal_id: model.mal_id,
            title: model.title,
            source: model.source,
            start_season: model.start_season,
            mean: model.mean,
            media_type: model.media_type,
            thumbnail: model.thumbnail,
        }
    }

    async fn with_names(&self, model: anime::Model) -> anyhow::Result<Anime> {
        let ids = [model.mal_id];
        let (mut genres, mut studios) = tokio::try_join!(
            genre_names(&self.conn, Some(ids.as_slice())),
            studio_names(&self.conn, Some(ids.as_slice()))
        )?;
        Ok(Self::map_model_to_anime(model, &mut genres, &mut studios))
    }

    pub async fn list_all(&self) -> anyhow::Result<Vec<Anime>> {
        let (rows, mut genres, mut studios) = tokio::try_join!(
            anime::Entity::find()
                .order_by_asc(anime::Column::Title)
                .all(&self.conn),
            genre_names(&self.conn, None),
            studio_names(&self.conn, None)
        )?;

        Ok(rows
            .into_iter()
            .map(|model| Self::map_model_to_anime(model, &mut genres, &mut studios))
            .collect())
    }

    pub async fn get(&self, id: i32) -> anyhow::Result<Option<Anime>> {
        match anime::Entity::find_by_id(id).one(&self.conn).await? {
            Some(model) => Ok(Some(self.with_names(model).await?)),
            None => Ok(None),
        }
    }

    /// Uniformly random row, using the database's own `RANDOM()`.
    pub async fn random(&self) -> anyhow::Result<Option<Anime>> {
        let model = anime::Entity::find()
            .order_by(Expr::cust("RANDOM()"), Order::Asc)
            .one(&self.conn)
            .await?;

        match model {
            Some(model) => Ok(Some(self.with_names(model).await?)),
            None => Ok(None),
        }
    }

    pub async fn exists(&self, id: i32) -> anyhow::Result<bool> {
        Ok(anime::Entity::find_by_id(id).count(&self.conn).await? > 0)
    }

    pub async fn count(&self) -> anyhow::Result<u64> {
        Ok(anime::Entity::find().count(&self.conn).await?)
    }

    pub async fn list_titles(&self) -> anyhow::Result<Vec<AnimeTitle>> {
        let rows = AnimeTitles::find()
            .order_by_asc(anime_titles::Column::Title)
            .all(&self.conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| AnimeTitle {
                anime_id: row.anime_id,
                title: row.title,
            })
            .collect())
    }

    pub async fn list_genres(&self) -> anyhow::Result<Vec<String>> {
        let rows = Genres::find()
            .order_by_asc(genres::Column::Name)
            .all(&self.conn)
            .await?;
        Ok(rows.into_iter().map(|g| g.name).collect())
    }

    pub async fn list_studios(&self) -> anyhow::Result<Vec<String>> {
        let rows = Studios::find()
            .order_by_asc(studios::Column::Name)
            .all(&self.conn)
            .await?;
        Ok(rows.into_iter().map(|s| s.name).collect())
    }

    /// Inserts or refreshes one anime together with its aliases, genres and
    /// studios. Existing links are replaced so a refresh drops stale ones.
    pub async fn upsert(&self, record: &AnimeRecord) -> anyhow::Result<()> {
        let txn = self.conn.begin().await?;

        let active_model = anime::ActiveModel {
            mal_id: Set(record.mal_id),
            title: Set(record.title.trim().to_string()),
            source: Set(record.source.clone()),
            start_season: Set(record.start_season_string()),
            mean: Set(record.mean),
            media_type: Set(record.media_type.clone()),
            thumbnail: Set(record.thumbnail_url()),
            updated_at: Set(Some(chrono::Utc::now().to_rfc3339())),
        };

        anime::Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(anime::Column::MalId)
                    .update_columns([
                        anime::Column::Title,
                        anime::Column::Source,
                        anime::Column::StartSeason,
                        anime::Column::Mean,
                        anime::Column::MediaType,
                        anime::Column::Thumbnail,
                        anime::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;

        AnimeTitles::delete_many()
            .filter(anime_titles::Column::AnimeId.eq(record.mal_id))
            .exec(&txn)
            .await?;

        let titles: Vec<anime_titles::ActiveModel> = record
            .searchable_titles()
            .into_iter()
            .map(|title| anime_titles::ActiveModel {
                anime_id: Set(record.mal_id),
                title: Set(title),
                ..Default::default()
            })
            .collect();

        if !titles.is_empty() {
            AnimeTitles::insert_many(titles)
                .exec_without_returning(&txn)
                .await?;
        }

        AnimeGenres::delete_many()
            .filter(anime_genres::Column::AnimeId.eq(record.mal_id))
            .exec(&txn)
            .await?;

        for name in record.genre_names() {
            let genre_id = upsert_genre(&txn, &name).await?;
            AnimeGenres::insert(anime_genres::ActiveModel {
                anime_id: Set(record.mal_id),
                genre_id: Set(genre_id),
            })
            .on_conflict(
                OnConflict::columns([anime_genres::Column::AnimeId, anime_genres::Column::GenreId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;
        }

        AnimeStudios::delete_many()
            .filter(anime_studios::Column::AnimeId.eq(record.mal_id))
            .exec(&txn)
            .await?;

        for name in record.studio_names() {
            let studio_id = upsert_studio(&txn, &name).await?;
            AnimeStudios::insert(anime_studios::ActiveModel {
                anime_id: Set(record.mal_id),
                studio_id: Set(studio_id),
            })
            .on_conflict(
                OnConflict::columns([
                    anime_studios::Column::AnimeId,
                    anime_studios::Column::StudioId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;
        }

        txn.commit().await?;

        info!("Added (or updated) anime: {} ({})", record.title, record.mal_id);
        Ok(())
    }
}

/// One statement per name: insert, or touch the existing row, and return its id.
async fn upsert_genre<C: ConnectionTrait>(db: &C, name: &str) -> Result<i32, DbErr> {
    let model = Genres::insert(genres::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    })
    .on_conflict(
        OnConflict::column(genres::Column::Name)
            .update_column(genres::Column::Name)
            .to_owned(),
    )
    .exec_with_returning(db)
    .await?;
    Ok(model.id)
}

async fn upsert_studio<C: ConnectionTrait>(db: &C, name: &str) -> Result<i32, DbErr> {
    let model = Studios::insert(studios::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    })
    .on_conflict(
        OnConflict::column(studios::Column::Name)
            .update_column(studios::Column::Name)
            .to_owned(),
    )
    .exec_with_returning(db)
    .await?;
    Ok(model.id)
}
