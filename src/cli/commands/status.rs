//! Status command handler

use crate::config::Config;
use crate::domain::RoundState;
use crate::state::SharedState;

pub async fn cmd_status(config: Config) -> anyhow::Result<()> {
    let policy = config.game.round_end_policy;
    let state = SharedState::new(config).await?;

    let catalogue = state.store.count_anime().await?;
    let round = state.session_service.round_state().await?;

    println!("Catalogue: {catalogue} anime");
    println!("Policy:    {policy:?}");
    println!("{:-<40}", "");

    match round {
        RoundState::Idle => {
            println!("No active round.");
            println!();
            println!("Start one with: guess-anime new-round");
        }
        RoundState::Active { answer, guesses } => {
            let title = state
                .store
                .get_anime(answer.value())
                .await?
                .map_or_else(|| "?".to_string(), |a| a.title);
            println!("🟢 Active round: {title} ({answer})");
            println!("   Guesses so far: {guesses}");
        }
        RoundState::Finished {
            answer,
            guesses,
            solved,
        } => {
            let outcome = if solved { "solved" } else { "not solved" };
            println!("✓ Round finished ({outcome}) after {guesses} guesses, answer {answer}");
        }
    }

    Ok(())
}
