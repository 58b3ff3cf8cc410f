pub use super::anime::Entity as Anime;
pub use super::anime_genres::Entity as AnimeGenres;
pub use super::anime_studios::Entity as AnimeStudios;
pub use super::anime_titles::Entity as AnimeTitles;
pub use super::game_session::Entity as GameSession;
pub use super::genres::Entity as Genres;
pub use super::guesses::Entity as Guesses;
pub use super::studios::Entity as Studios;
