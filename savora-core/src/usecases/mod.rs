mod fetch_restaurants;
mod seed_restaurants;

#[cfg(test)]
pub mod tests;

pub use self::{fetch_restaurants::*, seed_restaurants::*};

mod prelude {
    pub use crate::{
        entities::*,
        table::{Error, RestaurantTable, Result, RESTAURANT_CONFLICT_KEY},
    };
}
