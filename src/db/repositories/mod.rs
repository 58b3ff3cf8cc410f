pub mod anime;
pub mod guess;
pub mod session;

use crate::entities::{anime_genres, anime_studios, prelude::*};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::collections::{BTreeSet, HashMap};

/// Genre names per anime id, sorted. `None` loads every anime.
pub(crate) async fn genre_names<C: ConnectionTrait>(
    db: &C,
    anime_ids: Option<&[i32]>,
) -> Result<HashMap<i32, Vec<String>>, DbErr> {
    let mut query = AnimeGenres::find().find_also_related(Genres);
    if let Some(ids) = anime_ids {
        query = query.filter(anime_genres::Column::AnimeId.is_in(ids.iter().copied()));
    }

    let rows = query.all(db).await?;
    Ok(group_names(
        rows.into_iter()
            .filter_map(|(link, genre)| genre.map(|g| (link.anime_id, g.name))),
    ))
}

/// Studio names per anime id, sorted. `None` loads every anime.
pub(crate) async fn studio_names<C: ConnectionTrait>(
    db: &C,
    anime_ids: Option<&[i32]>,
) -> Result<HashMap<i32, Vec<String>>, DbErr> {
    let mut query = AnimeStudios::find().find_also_related(Studios);
    if let Some(ids) = anime_ids {
        query = query.filter(anime_studios::Column::AnimeId.is_in(ids.iter().copied()));
    }

    let rows = query.all(db).await?;
    Ok(group_names(
        rows.into_iter()
            .filter_map(|(link, studio)| studio.map(|s| (link.anime_id, s.name))),
    ))
}

fn group_names(pairs: impl Iterator<Item = (i32, String)>) -> HashMap<i32, Vec<String>> {
    let mut grouped: HashMap<i32, BTreeSet<String>> = HashMap::new();
    for (anime_id, name) in pairs {
        grouped.entry(anime_id).or_default().insert(name);
    }
    grouped
        .into_iter()
        .map(|(id, names)| (id, names.into_iter().collect()))
        .collect()
}
