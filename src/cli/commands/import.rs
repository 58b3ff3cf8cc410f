//! Import catalogue command handler

use anyhow::Context;
use std::path::Path;

use crate::config::Config;
use crate::models::import::AnimeRecord;
use crate::state::SharedState;

/// Reads a JSON array of anime records.
pub fn read_records(path: &Path) -> anyhow::Result<Vec<AnimeRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read import file: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse import file: {}", path.display()))
}

pub async fn cmd_import(config: Config, path: &Path) -> anyhow::Result<()> {
    let records = read_records(path)?;

    if records.is_empty() {
        println!("No anime records in {}", path.display());
        return Ok(());
    }

    let state = SharedState::new(config).await?;
    let imported = state
        .anime_service
        .import_anime(&records)
        .await
        .context("Import failed")?;

    let total = state.store.count_anime().await?;
    println!("✓ Imported {imported} anime ({total} in catalogue)");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_an_array_of_records() {
        let path = std::env::temp_dir().join(format!("guess-anime-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            r#"[{"malId": 1, "title": "Cowboy Bebop", "genres": ["Action"]},
                {"id": 5, "title": "Trigun", "start_season": {"season": "spring", "year": 1998}}]"#,
        )
        .unwrap();

        let records = read_records(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].mal_id, 5);
        assert_eq!(records[1].start_season_string().as_deref(), Some("spring 1998"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = std::env::temp_dir().join("guess-anime-does-not-exist.json");
        assert!(read_records(&path).is_err());
    }
}
