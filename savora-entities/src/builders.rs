pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::restaurant_builder::*;

pub mod restaurant_builder {

    use super::*;
    use crate::restaurant::*;

    #[derive(Debug)]
    pub struct RestaurantBuild {
        restaurant: Restaurant,
    }

    impl RestaurantBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.restaurant.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.restaurant.name = name.into();
            self
        }
        pub fn cuisine_type(mut self, cuisine_type: &str) -> Self {
            self.restaurant.cuisine_type = cuisine_type.into();
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.restaurant.city = city.into();
            self
        }
        pub fn rating(mut self, rating: f64) -> Self {
            self.restaurant.rating = rating;
            self
        }
        pub fn price_range(mut self, price_range: &str) -> Self {
            self.restaurant.price_range = price_range.into();
            self
        }
        pub fn image_url(mut self, image_url: &str) -> Self {
            self.restaurant.image_url = image_url.into();
            self
        }
        pub fn address(mut self, address: Option<&str>) -> Self {
            self.restaurant.address = address.map(Into::into);
            self
        }
        pub fn description(mut self, description: Option<&str>) -> Self {
            self.restaurant.description = description.map(Into::into);
            self
        }
        pub fn finish(self) -> Restaurant {
            self.restaurant
        }
    }

    impl Builder for Restaurant {
        type Build = RestaurantBuild;
        fn build() -> RestaurantBuild {
            RestaurantBuild {
                restaurant: Restaurant {
                    id: "".into(),
                    name: "".into(),
                    cuisine_type: "".into(),
                    city: "".into(),
                    rating: 0.0,
                    price_range: "".into(),
                    image_url: "".into(),
                    description: None,
                    address: None,
                },
            }
        }
    }
}
