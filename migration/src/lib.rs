pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_orders_table;
mod m20260110_000002_create_order_items_table;
mod m20260110_000003_add_order_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_orders_table::Migration),
            Box::new(m20260110_000002_create_order_items_table::Migration),
            Box::new(m20260110_000003_add_order_indexes::Migration),
        ]
    }
}
