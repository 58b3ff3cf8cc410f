//! New round command handler

use crate::config::Config;
use crate::domain::AnimeId;
use crate::state::SharedState;

fn answer_id(id: i32) -> anyhow::Result<AnimeId> {
    if id <= 0 {
        anyhow::bail!("Invalid anime ID: {id}. ID must be a positive integer");
    }
    Ok(AnimeId::new(id))
}

pub async fn cmd_new_round(config: Config, anime_id: Option<i32>) -> anyhow::Result<()> {
    let anime_id = anime_id.map(answer_id).transpose()?;
    let state = SharedState::new(config).await?;

    let answer = state.session_service.start_round(anime_id).await?;

    println!("✓ New round started (answer: anime {answer})");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_answer_ids_are_errors() {
        assert_eq!(answer_id(5114).unwrap(), AnimeId::new(5114));
        assert!(answer_id(0).is_err());
        assert!(answer_id(-3).is_err());
    }
}
