use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `orders` table and its columns.
#[derive(DeriveIden)]
enum Orders {
    Table,
    Id,
    NombreCompleto,
    NombrePenya,
    Direccion,
    CorreoElectronico,
    NumeroTelefono,
    SegundoNumeroTelefono,
    Estado,
    TotalEstimado,
    Comentarios,
    FechaCreacion,
    FechaActualizacion,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Orders::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Orders::NombreCompleto).string().not_null())
                    .col(ColumnDef::new(Orders::NombrePenya).string())
                    .col(ColumnDef::new(Orders::Direccion).text().not_null())
                    .col(
                        ColumnDef::new(Orders::CorreoElectronico)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Orders::NumeroTelefono).string().not_null())
                    .col(ColumnDef::new(Orders::SegundoNumeroTelefono).string())
                    .col(ColumnDef::new(Orders::Estado).string().not_null())
                    .col(ColumnDef::new(Orders::TotalEstimado).double())
                    .col(ColumnDef::new(Orders::Comentarios).text())
                    .col(
                        ColumnDef::new(Orders::FechaCreacion)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Orders::FechaActualizacion)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}
