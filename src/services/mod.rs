pub mod anime_service;
pub mod anime_service_impl;
pub use anime_service::{AnimeError, AnimeService, filter_titles};
pub use anime_service_impl::SeaOrmAnimeService;

pub mod session_service;
pub mod session_service_impl;
pub use session_service::{SessionError, SessionService};
pub use session_service_impl::SeaOrmSessionService;

pub mod guess_service;
pub mod guess_service_impl;
pub use guess_service::{GuessError, GuessService};
pub use guess_service_impl::SeaOrmGuessService;
