//! Catalog commands.

use std::path::Path;

use threadline_admin::db::ProductRepository;
use threadline_core::bulk::plan_bulk_request;
use threadline_core::catalog::ProductTemplate;

use super::{CommandError, connect};

/// Read a template file and insert `quantity` copies in one statement.
///
/// Validation happens before connecting, so a bad template or quantity
/// never opens a database connection.
///
/// # Errors
///
/// Returns `CommandError` if the file is unreadable or not a template, the
/// quantity is out of range, or the insert fails (in which case nothing is
/// inserted).
pub async fn bulk_create(path: &Path, quantity: i64, max: u32) -> Result<(), CommandError> {
    let raw = std::fs::read_to_string(path)?;
    let template: ProductTemplate = serde_json::from_str(&raw)?;
    let units = plan_bulk_request(Some(&template), quantity, max)?;

    let pool = connect().await?;
    let created = ProductRepository::new(&pool).insert_batch(units).await?;

    tracing::info!(
        count = created.len(),
        name = %template.name,
        "Bulk products created"
    );
    for product in &created {
        tracing::debug!(product_id = %product.id, "created");
    }
    Ok(())
}
