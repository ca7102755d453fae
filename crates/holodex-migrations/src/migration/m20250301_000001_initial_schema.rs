use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ========================================
        // CHARACTERS TABLE
        // ========================================
        manager
            .create_table(
                Table::create()
                    .table(Characters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Characters::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Characters::ExternalId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Characters::Name).string().not_null())
                    .col(ColumnDef::new(Characters::Height).string().null())
                    .col(ColumnDef::new(Characters::Mass).string().null())
                    .col(ColumnDef::new(Characters::HairColor).string().null())
                    .col(ColumnDef::new(Characters::SkinColor).string().null())
                    .col(ColumnDef::new(Characters::EyeColor).string().null())
                    .col(ColumnDef::new(Characters::BirthYear).string().null())
                    .col(ColumnDef::new(Characters::Gender).string().null())
                    .col(
                        ColumnDef::new(Characters::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // The unique index on external_id is what makes concurrent imports
        // of the same record collapse into a single row.
        manager
            .create_index(
                Index::create()
                    .name("idx_characters_external_id")
                    .table(Characters::Table)
                    .col(Characters::ExternalId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_characters_name")
                    .table(Characters::Table)
                    .col(Characters::Name)
                    .to_owned(),
            )
            .await?;

        // ========================================
        // FILMS TABLE
        // ========================================
        manager
            .create_table(
                Table::create()
                    .table(Films::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Films::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Films::ExternalId).integer().not_null())
                    .col(ColumnDef::new(Films::Name).string().not_null())
                    .col(ColumnDef::new(Films::EpisodeId).string().null())
                    .col(ColumnDef::new(Films::OpeningCrawl).text().null())
                    .col(ColumnDef::new(Films::Director).string().null())
                    .col(ColumnDef::new(Films::Producer).string().null())
                    .col(ColumnDef::new(Films::ReleaseDate).string().null())
                    .col(
                        ColumnDef::new(Films::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_films_external_id")
                    .table(Films::Table)
                    .col(Films::ExternalId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_films_name")
                    .table(Films::Table)
                    .col(Films::Name)
                    .to_owned(),
            )
            .await?;

        // ========================================
        // STARSHIPS TABLE
        // ========================================
        manager
            .create_table(
                Table::create()
                    .table(Starships::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Starships::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Starships::ExternalId).integer().not_null())
                    .col(ColumnDef::new(Starships::Name).string().not_null())
                    .col(ColumnDef::new(Starships::Model).string().null())
                    .col(ColumnDef::new(Starships::Manufacturer).string().null())
                    .col(ColumnDef::new(Starships::CostInCredits).string().null())
                    .col(ColumnDef::new(Starships::Length).string().null())
                    .col(
                        ColumnDef::new(Starships::MaxAtmospheringSpeed)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(Starships::Crew).string().null())
                    .col(ColumnDef::new(Starships::Passengers).string().null())
                    .col(ColumnDef::new(Starships::CargoCapacity).string().null())
                    .col(ColumnDef::new(Starships::Consumables).string().null())
                    .col(ColumnDef::new(Starships::HyperdriveRating).string().null())
                    .col(ColumnDef::new(Starships::Mglt).string().null())
                    .col(ColumnDef::new(Starships::StarshipClass).string().null())
                    .col(
                        ColumnDef::new(Starships::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_starships_external_id")
                    .table(Starships::Table)
                    .col(Starships::ExternalId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_starships_name")
                    .table(Starships::Table)
                    .col(Starships::Name)
                    .to_owned(),
            )
            .await?;

        // ========================================
        // LINK TABLES
        // ========================================
        // Keyed by upstream identifiers on both sides. No foreign keys:
        // a record may reference entities that are imported later.
        manager
            .create_table(
                Table::create()
                    .table(CharacterFilms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CharacterFilms::CharacterExternalId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CharacterFilms::FilmExternalId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(CharacterFilms::CharacterExternalId)
                            .col(CharacterFilms::FilmExternalId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CharacterStarships::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CharacterStarships::CharacterExternalId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CharacterStarships::StarshipExternalId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(CharacterStarships::CharacterExternalId)
                            .col(CharacterStarships::StarshipExternalId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StarshipFilms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StarshipFilms::StarshipExternalId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StarshipFilms::FilmExternalId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(StarshipFilms::StarshipExternalId)
                            .col(StarshipFilms::FilmExternalId),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StarshipFilms::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CharacterStarships::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CharacterFilms::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Starships::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Films::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Characters::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Characters {
    Table,
    Id,
    ExternalId,
    Name,
    Height,
    Mass,
    HairColor,
    SkinColor,
    EyeColor,
    BirthYear,
    Gender,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Films {
    Table,
    Id,
    ExternalId,
    Name,
    EpisodeId,
    OpeningCrawl,
    Director,
    Producer,
    ReleaseDate,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Starships {
    Table,
    Id,
    ExternalId,
    Name,
    Model,
    Manufacturer,
    CostInCredits,
    Length,
    MaxAtmospheringSpeed,
    Crew,
    Passengers,
    CargoCapacity,
    Consumables,
    HyperdriveRating,
    Mglt,
    StarshipClass,
    CreatedAt,
}

#[derive(DeriveIden)]
enum CharacterFilms {
    Table,
    CharacterExternalId,
    FilmExternalId,
}

#[derive(DeriveIden)]
enum CharacterStarships {
    Table,
    CharacterExternalId,
    StarshipExternalId,
}

#[derive(DeriveIden)]
enum StarshipFilms {
    Table,
    StarshipExternalId,
    FilmExternalId,
}
