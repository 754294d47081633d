use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserFlag::Table)
                    .if_not_exists()
                    .col(string(UserFlag::UserId).primary_key())
                    .col(boolean(UserFlag::Admin).default(false))
                    .col(boolean(UserFlag::Blacklisted).default(false))
                    .col(
                        timestamp(UserFlag::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserFlag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserFlag {
    Table,
    UserId,
    Admin,
    Blacklisted,
    UpdatedAt,
}
