pub use sea_orm_migration::prelude::*;

mod m20250312_000001_create_user_table;
mod m20250312_000002_create_post_table;
mod m20250312_000003_create_comment_table;
mod m20250312_000004_create_revoked_token_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250312_000001_create_user_table::Migration),
            Box::new(m20250312_000002_create_post_table::Migration),
            Box::new(m20250312_000003_create_comment_table::Migration),
            Box::new(m20250312_000004_create_revoked_token_table::Migration),
        ]
    }
}
