pub mod prelude;

pub mod anime;
pub mod anime_genres;
pub mod anime_studios;
pub mod anime_titles;
pub mod game_session;
pub mod genres;
pub mod guesses;
pub mod studios;
