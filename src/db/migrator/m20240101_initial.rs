use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    #[allow(clippy::too_many_lines)]
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Anime::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Anime::MalId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Anime::Title).string().not_null())
                    .col(ColumnDef::new(Anime::Source).string())
                    .col(ColumnDef::new(Anime::StartSeason).string())
                    .col(ColumnDef::new(Anime::Mean).double())
                    .col(ColumnDef::new(Anime::MediaType).string())
                    .col(ColumnDef::new(Anime::Thumbnail).string())
                    .col(ColumnDef::new(Anime::UpdatedAt).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AnimeTitles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AnimeTitles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AnimeTitles::AnimeId).integer().not_null())
                    .col(ColumnDef::new(AnimeTitles::Title).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_anime_titles_anime")
                            .from(AnimeTitles::Table, AnimeTitles::AnimeId)
                            .to(Anime::Table, Anime::MalId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_anime_titles_anime_title")
                    .table(AnimeTitles::Table)
                    .col(AnimeTitles::AnimeId)
                    .col(AnimeTitles::Title)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Genres::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Genres::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Genres::Name).string().not_null().unique_key())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Studios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Studios::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Studios::Name).string().not_null().unique_key())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AnimeGenres::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(AnimeGenres::AnimeId).integer().not_null())
                    .col(ColumnDef::new(AnimeGenres::GenreId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(AnimeGenres::AnimeId)
                            .col(AnimeGenres::GenreId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_anime_genres_anime")
                            .from(AnimeGenres::Table, AnimeGenres::AnimeId)
                            .to(Anime::Table, Anime::MalId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_anime_genres_genre")
                            .from(AnimeGenres::Table, AnimeGenres::GenreId)
                            .to(Genres::Table, Genres::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AnimeStudios::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(AnimeStudios::AnimeId).integer().not_null())
                    .col(ColumnDef::new(AnimeStudios::StudioId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(AnimeStudios::AnimeId)
                            .col(AnimeStudios::StudioId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_anime_studios_anime")
                            .from(AnimeStudios::Table, AnimeStudios::AnimeId)
                            .to(Anime::Table, Anime::MalId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_anime_studios_studio")
                            .from(AnimeStudios::Table, AnimeStudios::StudioId)
                            .to(Studios::Table, Studios::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Guesses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Guesses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Guesses::AnimeId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Guesses::Correct).boolean().not_null())
                    .col(ColumnDef::new(Guesses::CreatedAt).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guesses_anime")
                            .from(Guesses::Table, Guesses::AnimeId)
                            .to(Anime::Table, Anime::MalId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_guesses_created_at")
                    .table(Guesses::Table)
                    .col(Guesses::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Fixed primary key: the table can never hold more than one round.
        manager
            .create_table(
                Table::create()
                    .table(GameSession::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GameSession::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GameSession::AnimeId).integer().not_null())
                    .col(ColumnDef::new(GameSession::CreatedAt).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_session_anime")
                            .from(GameSession::Table, GameSession::AnimeId)
                            .to(Anime::Table, Anime::MalId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameSession::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Guesses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AnimeStudios::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AnimeGenres::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Studios::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Genres::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AnimeTitles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Anime::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Anime {
    Table,
    MalId,
    Title,
    Source,
    StartSeason,
    Mean,
    MediaType,
    Thumbnail,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AnimeTitles {
    Table,
    Id,
    AnimeId,
    Title,
}

#[derive(DeriveIden)]
enum Genres {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Studios {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum AnimeGenres {
    Table,
    AnimeId,
    GenreId,
}

#[derive(DeriveIden)]
enum AnimeStudios {
    Table,
    AnimeId,
    StudioId,
}

#[derive(DeriveIden)]
enum Guesses {
    Table,
    Id,
    AnimeId,
    Correct,
    CreatedAt,
}

#[derive(DeriveIden)]
enum GameSession {
    Table,
    Id,
    AnimeId,
    CreatedAt,
}
