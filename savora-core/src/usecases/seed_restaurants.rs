use std::collections::HashSet;

use super::prelude::*;

/// Upsert `rows` into the table, merging on the restaurant name.
///
/// A batch must not contain the same name twice, otherwise the
/// table refuses to merge it. Later duplicates are dropped.
pub async fn seed_restaurants<T>(table: &T, rows: &[NewRestaurant]) -> Result<usize>
where
    T: RestaurantTable + ?Sized,
{
    let mut names = HashSet::with_capacity(rows.len());
    let unique_rows: Vec<_> = rows
        .iter()
        .filter(|row| {
            let first = names.insert(row.name.as_str());
            if !first {
                log::warn!("Skipping duplicate restaurant '{}'", row.name);
            }
            first
        })
        .cloned()
        .collect();
    if unique_rows.is_empty() {
        log::info!("Nothing to seed");
        return Ok(0);
    }
    match table
        .upsert_all(&unique_rows, RESTAURANT_CONFLICT_KEY)
        .await
    {
        Ok(count) => {
            log::info!("Successfully seeded {count} restaurants");
            Ok(count)
        }
        Err(err) => {
            log::error!("Error seeding data: {err}");
            Err(err)
        }
    }
}
