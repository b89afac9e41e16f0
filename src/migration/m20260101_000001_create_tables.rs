use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null().default("client"))
                    .col(ColumnDef::new(Users::Phone).string().not_null().default(""))
                    .col(ColumnDef::new(Users::Address).string().not_null().default(""))
                    .col(ColumnDef::new(Users::AvatarUrl).string().not_null().default(""))
                    .col(created_at(Users::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Categories::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Categories::Name).string().not_null().unique_key())
                    .col(ColumnDef::new(Categories::IconUrl).string().not_null().default(""))
                    .col(created_at(Categories::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Cakes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Cakes::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Cakes::Name).string().not_null())
                    .col(ColumnDef::new(Cakes::Description).text().null())
                    .col(ColumnDef::new(Cakes::Price).big_integer().not_null())
                    .col(ColumnDef::new(Cakes::Category).string().not_null())
                    .col(ColumnDef::new(Cakes::Images).json_binary().not_null())
                    .col(ColumnDef::new(Cakes::Status).string().not_null())
                    .col(ColumnDef::new(Cakes::Stock).integer().not_null().default(0))
                    .col(ColumnDef::new(Cakes::Rating).double().null())
                    .col(ColumnDef::new(Cakes::DiscountPercent).integer().null())
                    .col(ColumnDef::new(Cakes::Deleted).boolean().not_null().default(false))
                    .col(created_at(Cakes::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Banners::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Banners::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Banners::ImageUrl).string().not_null())
                    .col(ColumnDef::new(Banners::Title).string().not_null().default(""))
                    .col(ColumnDef::new(Banners::Discount).string().not_null().default(""))
                    .col(ColumnDef::new(Banners::Deleted).boolean().not_null().default(false))
                    .col(created_at(Banners::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(InventoryItems::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(InventoryItems::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(InventoryItems::Ingredient).string().not_null())
                    .col(ColumnDef::new(InventoryItems::Quantity).integer().not_null())
                    .col(ColumnDef::new(InventoryItems::Unit).string().not_null())
                    .col(
                        ColumnDef::new(InventoryItems::Category)
                            .string()
                            .not_null()
                            .default("General"),
                    )
                    .col(
                        ColumnDef::new(InventoryItems::LowStock)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(created_at(InventoryItems::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Favorites::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Favorites::UserId).uuid().not_null())
                    .col(ColumnDef::new(Favorites::CakeId).uuid().not_null())
                    .col(created_at(Favorites::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_user")
                            .from(Favorites::Table, Favorites::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_cake")
                            .from(Favorites::Table, Favorites::CakeId)
                            .to(Cakes::Table, Cakes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_favorites_user_cake")
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .col(Favorites::CakeId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CartItems::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CartItems::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(CartItems::UserId).uuid().not_null())
                    .col(ColumnDef::new(CartItems::CakeId).uuid().not_null())
                    .col(ColumnDef::new(CartItems::Quantity).integer().not_null())
                    .col(created_at(CartItems::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_items_user")
                            .from(CartItems::Table, CartItems::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_items_cake")
                            .from(CartItems::Table, CartItems::CakeId)
                            .to(Cakes::Table, Cakes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cart_items_user_cake")
                    .table(CartItems::Table)
                    .col(CartItems::UserId)
                    .col(CartItems::CakeId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Orders::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Orders::UserId).uuid().not_null())
                    .col(ColumnDef::new(Orders::TotalAmount).big_integer().not_null())
                    .col(ColumnDef::new(Orders::Status).string().not_null())
                    .col(ColumnDef::new(Orders::InvoiceNumber).string().not_null().unique_key())
                    .col(ColumnDef::new(Orders::Address).string().not_null())
                    .col(ColumnDef::new(Orders::Note).text().null())
                    .col(created_at(Orders::CreatedAt))
                    .col(created_at(Orders::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_user")
                            .from(Orders::Table, Orders::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OrderItems::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(OrderItems::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(OrderItems::OrderId).uuid().not_null())
                    .col(ColumnDef::new(OrderItems::CakeId).uuid().not_null())
                    .col(ColumnDef::new(OrderItems::Quantity).integer().not_null())
                    .col(ColumnDef::new(OrderItems::Price).big_integer().not_null())
                    .col(created_at(OrderItems::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_items_order")
                            .from(OrderItems::Table, OrderItems::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_items_cake")
                            .from(OrderItems::Table, OrderItems::CakeId)
                            .to(Cakes::Table, Cakes::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AuditLogs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(AuditLogs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(AuditLogs::UserId).uuid().null())
                    .col(ColumnDef::new(AuditLogs::Action).string().not_null())
                    .col(ColumnDef::new(AuditLogs::Resource).string().null())
                    .col(ColumnDef::new(AuditLogs::Metadata).json_binary().null())
                    .col(created_at(AuditLogs::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_audit_logs_user")
                            .from(AuditLogs::Table, AuditLogs::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuditLogs::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(OrderItems::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Orders::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CartItems::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Favorites::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(InventoryItems::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Banners::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Cakes::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

fn created_at<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    PasswordHash,
    Role,
    Phone,
    Address,
    AvatarUrl,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
    Name,
    IconUrl,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Cakes {
    Table,
    Id,
    Name,
    Description,
    Price,
    Category,
    Images,
    Status,
    Stock,
    Rating,
    DiscountPercent,
    Deleted,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Banners {
    Table,
    Id,
    ImageUrl,
    Title,
    Discount,
    Deleted,
    CreatedAt,
}

#[derive(DeriveIden)]
enum InventoryItems {
    Table,
    Id,
    Ingredient,
    Quantity,
    Unit,
    Category,
    LowStock,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Favorites {
    Table,
    Id,
    UserId,
    CakeId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum CartItems {
    Table,
    Id,
    UserId,
    CakeId,
    Quantity,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Orders {
    Table,
    Id,
    UserId,
    TotalAmount,
    Status,
    InvoiceNumber,
    Address,
    Note,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum OrderItems {
    Table,
    Id,
    OrderId,
    CakeId,
    Quantity,
    Price,
    CreatedAt,
}

#[derive(DeriveIden)]
enum AuditLogs {
    Table,
    Id,
    UserId,
    Action,
    Resource,
    Metadata,
    CreatedAt,
}
