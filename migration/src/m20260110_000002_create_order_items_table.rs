use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `order_items` table and its columns.
#[derive(DeriveIden)]
enum OrderItems {
    Table,
    Id,
    OrderId,
    Nombre,
    Unidades,
    Precio,
    Categoria,
    FechaCreacion,
}

/// Re-declare parent table identifiers for foreign-key references.
#[derive(DeriveIden)]
enum Orders {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OrderItems::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(OrderItems::OrderId).string().not_null())
                    .col(ColumnDef::new(OrderItems::Nombre).string().not_null())
                    .col(ColumnDef::new(OrderItems::Unidades).integer().not_null())
                    .col(ColumnDef::new(OrderItems::Precio).double())
                    .col(ColumnDef::new(OrderItems::Categoria).string().not_null())
                    .col(
                        ColumnDef::new(OrderItems::FechaCreacion)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_items_order_id")
                            .from(OrderItems::Table, OrderItems::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderItems::Table).to_owned())
            .await
    }
}
