use std::collections::{BTreeMap, HashMap};

use sqlx::PgConnection;
use uuid::Uuid;

use crate::models::ItemStockRow;

/// Reads and row-locks the given items for the rest of the transaction.
///
/// Ids are locked in ascending order so that two transactions touching the same
/// items cannot deadlock. Missing ids are absent from the result.
pub async fn lock_items(
    conn: &mut PgConnection,
    ids: &[Uuid],
) -> Result<HashMap<Uuid, ItemStockRow>, sqlx::Error> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let mut sorted = ids.to_vec();
    sorted.sort();
    sorted.dedup();

    let rows: Vec<ItemStockRow> = sqlx::query_as(
        "SELECT i.id, i.name, i.stock, u.name AS base_unit_name, i.unit_conversions \
         FROM items i LEFT JOIN units u ON u.id = i.base_unit_id \
         WHERE i.id = ANY($1) \
         ORDER BY i.id \
         FOR UPDATE OF i",
    )
    .bind(sorted.as_slice())
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows.into_iter().map(|row| (row.id, row)).collect())
}

pub async fn set_stock(conn: &mut PgConnection, id: Uuid, stock: i64) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE items SET stock = $1, updated_at = NOW() WHERE id = $2")
        .bind(stock)
        .bind(id)
        .execute(conn)
        .await?;
    Ok(())
}

/// Applies per-item deltas computed by `apply` against the locked rows.
/// Returns the number of items written.
pub async fn write_stock_changes<F>(
    conn: &mut PgConnection,
    locked: &HashMap<Uuid, ItemStockRow>,
    deltas: &BTreeMap<Uuid, i64>,
    apply: F,
) -> Result<usize, sqlx::Error>
where
    F: Fn(i64, i64) -> i64,
{
    let mut written = 0;
    for (id, quantity) in deltas {
        let Some(row) = locked.get(id) else {
            continue;
        };
        let new_stock = apply(row.stock, *quantity);
        tracing::debug!(
            "Stock change: item={} ({}), {} -> {}",
            row.id,
            row.name,
            row.stock,
            new_stock
        );
        set_stock(&mut *conn, *id, new_stock).await?;
        written += 1;
    }
    Ok(written)
}
