use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "anime")]
pub struct Model {
    /// MyAnimeList id, the external source of truth.
    #[sea_orm(primary_key, auto_increment = false)]
    pub mal_id: i32,
    pub title: String,
    pub source: Option<String>,
    /// "season year", e.g. "spring 2012".
    pub start_season: Option<String>,
    pub mean: Option<f64>,
    pub media_type: Option<String>,
    pub thumbnail: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::anime_titles::Entity")]
    AnimeTitles,
    #[sea_orm(has_many = "super::anime_genres::Entity")]
    AnimeGenres,
    #[sea_orm(has_many = "super::anime_studios::Entity")]
    AnimeStudios,
    #[sea_orm(has_many = "super::guesses::Entity")]
    Guesses,
    #[sea_orm(has_one = "super::game_session::Entity")]
    GameSession,
}

impl Related<super::anime_titles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AnimeTitles.def()
    }
}

impl Related<super::guesses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Guesses.def()
    }
}

impl Related<super::game_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameSession.def()
    }
}

impl Related<super::genres::Entity> for Entity {
    fn to() -> RelationDef {
        super::anime_genres::Relation::Genre.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::anime_genres::Relation::Anime.def().rev())
    }
}

impl Related<super::studios::Entity> for Entity {
    fn to() -> RelationDef {
        super::anime_studios::Relation::Studio.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::anime_studios::Relation::Anime.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
