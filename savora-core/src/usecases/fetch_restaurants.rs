use super::prelude::*;

pub async fn fetch_restaurants<T>(table: &T, city: City) -> Result<Vec<Restaurant>>
where
    T: RestaurantTable + ?Sized,
{
    log::debug!("Fetching restaurants in {city}");
    match table.read_by_city(city).await {
        Ok(restaurants) => {
            log::debug!("Fetched {} restaurants in {city}", restaurants.len());
            Ok(restaurants)
        }
        Err(err) => {
            log::error!("Error fetching restaurants: {err}");
            Err(err)
        }
    }
}
