use sea_orm_migration::prelude::*;
use sea_orm_migration::schema::{json_binary, string, string_null, uuid};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cvs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cvs::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(uuid(Cvs::OwnerId).not_null())
                    .col(string(Cvs::FirstName).not_null())
                    .col(string(Cvs::LastName).not_null())
                    // Persisted lowercased; the unique index below is the
                    // authoritative guard against duplicate emails.
                    .col(string(Cvs::Email).not_null())
                    .col(string(Cvs::Phone).not_null())
                    .col(string(Cvs::Address).not_null())
                    .col(string(Cvs::City).not_null())
                    .col(string(Cvs::ZipCode).not_null())
                    .col(string(Cvs::Country).not_null())
                    .col(string(Cvs::ProfessionalTitle).not_null())
                    .col(string(Cvs::ProfileSummary).not_null())
                    .col(string_null(Cvs::Photo))
                    .col(json_binary(Cvs::Experiences).not_null())
                    .col(json_binary(Cvs::Education).not_null())
                    .col(json_binary(Cvs::Skills).not_null())
                    .col(json_binary(Cvs::Languages).not_null())
                    .col(
                        ColumnDef::new(Cvs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("now()")),
                    )
                    .col(
                        ColumnDef::new(Cvs::UpdatedAt)
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
                    .table(Cvs::Table)
                    .name("idx_cvs_email_unique")
                    .col(Cvs::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Cvs::Table)
                    .name("idx_cvs_owner_id")
                    .col(Cvs::OwnerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cvs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Cvs {
    Table,
    Id,
    OwnerId,
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    City,
    ZipCode,
    Country,
    ProfessionalTitle,
    ProfileSummary,
    Photo,
    Experiences,
    Education,
    Skills,
    Languages,
    CreatedAt,
    UpdatedAt,
}
