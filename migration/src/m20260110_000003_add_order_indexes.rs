use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Orders {
    Table,
    FechaCreacion,
}

#[derive(DeriveIden)]
enum OrderItems {
    Table,
    OrderId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Index on orders.fecha_creacion for the chronological listing
        manager
            .create_index(
                Index::create()
                    .name("idx_orders_fecha_creacion")
                    .table(Orders::Table)
                    .col(Orders::FechaCreacion)
                    .to_owned(),
            )
            .await?;

        // Index on order_items.order_id for fetching items by order
        manager
            .create_index(
                Index::create()
                    .name("idx_order_items_order_id")
                    .table(OrderItems::Table)
                    .col(OrderItems::OrderId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_orders_fecha_creacion").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_order_items_order_id").to_owned())
            .await?;

        Ok(())
    }
}
