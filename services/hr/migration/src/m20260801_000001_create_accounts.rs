use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Accounts::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Accounts::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Accounts::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Accounts::FirstName).string().not_null())
                    .col(ColumnDef::new(Accounts::LastName).string().not_null())
                    .col(ColumnDef::new(Accounts::Position).string())
                    .col(ColumnDef::new(Accounts::Department).string())
                    .col(ColumnDef::new(Accounts::Role).small_integer().not_null())
                    .col(
                        ColumnDef::new(Accounts::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Accounts::VerificationToken).string())
                    .col(ColumnDef::new(Accounts::VerifiedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Accounts::ResetToken).string())
                    .col(ColumnDef::new(Accounts::ResetTokenExpiresAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Accounts::PasswordResetAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Accounts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Accounts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Token lookups run on every verify-email / reset-password call.
        manager
            .create_index(
                Index::create()
                    .table(Accounts::Table)
                    .col(Accounts::VerificationToken)
                    .name("idx_accounts_verification_token")
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Accounts::Table)
                    .col(Accounts::ResetToken)
                    .name("idx_accounts_reset_token")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Accounts {
    Table,
    Id,
    Email,
    PasswordHash,
    FirstName,
    LastName,
    Position,
    Department,
    Role,
    IsActive,
    VerificationToken,
    VerifiedAt,
    ResetToken,
    ResetTokenExpiresAt,
    PasswordResetAt,
    CreatedAt,
    UpdatedAt,
}
