use super::*;
use savora_entities as e;

impl From<Restaurant> for e::restaurant::Restaurant {
    fn from(from: Restaurant) -> Self {
        let Restaurant {
            id,
            name,
            cuisine_type,
            city,
            rating,
            price_range,
            image_url,
            description,
            address,
        } = from;
        Self {
            id: id.into(),
            name,
            cuisine_type,
            city,
            rating,
            price_range,
            image_url: image_url.unwrap_or_default(),
            description,
            address,
        }
    }
}

impl From<e::restaurant::Restaurant> for Restaurant {
    fn from(from: e::restaurant::Restaurant) -> Self {
        let e::restaurant::Restaurant {
            id,
            name,
            cuisine_type,
            city,
            rating,
            price_range,
            image_url,
            description,
            address,
        } = from;
        Self {
            id: id.into(),
            name,
            cuisine_type,
            city,
            rating,
            price_range,
            image_url: Some(image_url).filter(|url| !url.is_empty()),
            description,
            address,
        }
    }
}

impl From<NewRestaurant> for e::restaurant::NewRestaurant {
    fn from(from: NewRestaurant) -> Self {
        let NewRestaurant {
            name,
            cuisine_type,
            city,
            rating,
            price_range,
            image_url,
            description,
            address,
        } = from;
        Self {
            name,
            cuisine_type,
            city,
            rating,
            price_range,
            image_url,
            description,
            address,
        }
    }
}

impl From<e::restaurant::NewRestaurant> for NewRestaurant {
    fn from(from: e::restaurant::NewRestaurant) -> Self {
        let e::restaurant::NewRestaurant {
            name,
            cuisine_type,
            city,
            rating,
            price_range,
            image_url,
            description,
            address,
        } = from;
        Self {
            name,
            cuisine_type,
            city,
            rating,
            price_range,
            image_url,
            description,
            address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_image_becomes_empty_string() {
        let row = Restaurant {
            id: "1".into(),
            name: "Fort House".into(),
            cuisine_type: "Seafood".into(),
            city: "Kochi".into(),
            rating: 4.2,
            price_range: "$$$".into(),
            image_url: None,
            description: None,
            address: Some("Calvathy Road".into()),
        };
        let restaurant = e::restaurant::Restaurant::from(row);
        assert_eq!(restaurant.id.as_str(), "1");
        assert_eq!(restaurant.image_url, "");
        assert_eq!(restaurant.address.as_deref(), Some("Calvathy Road"));

        let row = Restaurant::from(restaurant);
        assert_eq!(row.image_url, None);
    }
}
