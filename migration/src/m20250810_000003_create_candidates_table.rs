use sea_orm_migration::prelude::*;
use sea_orm_migration::schema::{date, string, string_null};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Candidates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Candidates::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(string(Candidates::FullName).not_null())
                    .col(date(Candidates::DateOfBirth).not_null())
                    .col(string(Candidates::Gender).not_null())
                    .col(string(Candidates::FullAddress).not_null())
                    .col(string(Candidates::PhoneNumber).not_null())
                    .col(string(Candidates::ProfessionalEmail).not_null())
                    .col(string(Candidates::Nationality).not_null())
                    .col(string(Candidates::Country).not_null())
                    .col(string_null(Candidates::File))
                    .col(
                        ColumnDef::new(Candidates::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("now()")),
                    )
                    .col(
                        ColumnDef::new(Candidates::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("now()")),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Candidates::Table)
                    .name("idx_candidates_professional_email_unique")
                    .col(Candidates::ProfessionalEmail)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Candidates::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Candidates {
    Table,
    Id,
    FullName,
    DateOfBirth,
    Gender,
    FullAddress,
    PhoneNumber,
    ProfessionalEmail,
    Nationality,
    Country,
    File,
    CreatedAt,
    UpdatedAt,
}
