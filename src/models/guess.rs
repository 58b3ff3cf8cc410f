use super::anime::Anime;

/// A stored guess joined with the guessed anime.
#[derive(Debug, Clone, PartialEq)]
pub struct GuessRecord {
    pub anime: Anime,
    pub correct: bool,
    pub created_at: String,
}

/// Result of recording a guess against the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    pub correct: bool,
    /// The anime had already been guessed this round; nothing was written.
    pub duplicate: bool,
}
