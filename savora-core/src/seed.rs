//! Demo restaurants bundled with the application.

use crate::entities::*;

const IMG_FINE_DINING: &str =
    "https://images.unsplash.com/photo-1514362545857-3bc16c4c7d1b?auto=format&fit=crop&q=80&w=800";
const IMG_SEAFOOD: &str =
    "https://images.unsplash.com/photo-1551632436-cbf8dd35adfa?auto=format&fit=crop&q=80&w=800";
const IMG_DINING_HALL: &str =
    "https://images.unsplash.com/photo-1555396273-367ea4eb4db5?auto=format&fit=crop&q=80&w=800";
const IMG_CAFE: &str =
    "https://images.unsplash.com/photo-1554118811-1e0d58224f24?auto=format&fit=crop&q=80&w=800";
const IMG_THALI: &str =
    "https://images.unsplash.com/photo-1585937421612-70a008356fbe?auto=format&fit=crop&q=80&w=800";
const IMG_GRILL: &str =
    "https://images.unsplash.com/photo-1544025162-d76694265947?auto=format&fit=crop&q=80&w=800";

struct Row {
    name: &'static str,
    cuisine_type: &'static str,
    city: City,
    rating: f64,
    price_range: &'static str,
    image_url: &'static str,
    description: &'static str,
    address: &'static str,
}

#[rustfmt::skip]
const ROWS: &[Row] = &[
    Row { name: "Paragon Restaurant", cuisine_type: "Kerala", city: City::Kochi, rating: 4.7, price_range: "$$", image_url: IMG_DINING_HALL, description: "Legendary Malabar biryani and fish curry meals.", address: "Lulu Mall, Edappally" },
    Row { name: "Kashi Art Cafe", cuisine_type: "Cafe", city: City::Kochi, rating: 4.5, price_range: "$$", image_url: IMG_CAFE, description: "Gallery cafe in a restored Dutch house.", address: "Burgher Street, Fort Kochi" },
    Row { name: "Malabar Junction", cuisine_type: "Continental", city: City::Kochi, rating: 4.6, price_range: "$$$$", image_url: IMG_FINE_DINING, description: "Courtyard dining at a heritage boutique hotel.", address: "Parade Ground, Fort Kochi" },
    Row { name: "Fort House", cuisine_type: "Seafood", city: City::Kochi, rating: 4.3, price_range: "$$$", image_url: IMG_SEAFOOD, description: "Waterfront seafood by the harbour.", address: "Calvathy Road, Fort Kochi" },
    Row { name: "Dhe Puttu", cuisine_type: "South Indian", city: City::Kochi, rating: 4.2, price_range: "$", image_url: IMG_THALI, description: "Dozens of varieties of puttu.", address: "Edappally Bypass" },
    Row { name: "Trishna", cuisine_type: "Seafood", city: City::Mumbai, rating: 4.6, price_range: "$$$", image_url: IMG_SEAFOOD, description: "Butter garlic crab in Kala Ghoda.", address: "Sai Baba Marg, Fort" },
    Row { name: "Britannia & Co.", cuisine_type: "Parsi", city: City::Mumbai, rating: 4.5, price_range: "$$", image_url: IMG_DINING_HALL, description: "Berry pulav since 1923.", address: "Ballard Estate" },
    Row { name: "Masque", cuisine_type: "Modern Indian", city: City::Mumbai, rating: 4.8, price_range: "$$$$", image_url: IMG_FINE_DINING, description: "Seasonal tasting menus.", address: "Mahalaxmi" },
    Row { name: "Bukhara", cuisine_type: "North Indian", city: City::Delhi, rating: 4.7, price_range: "$$$$", image_url: IMG_GRILL, description: "Tandoor classics and dal bukhara.", address: "ITC Maurya, Chanakyapuri" },
    Row { name: "Karim's", cuisine_type: "Mughlai", city: City::Delhi, rating: 4.4, price_range: "$", image_url: IMG_GRILL, description: "Old Delhi kebabs and nihari.", address: "Jama Masjid" },
    Row { name: "Indian Accent", cuisine_type: "Modern Indian", city: City::Delhi, rating: 4.8, price_range: "$$$$", image_url: IMG_FINE_DINING, description: "Inventive Indian plates.", address: "The Lodhi, Lodhi Road" },
    Row { name: "Karavalli", cuisine_type: "Coastal", city: City::Bangalore, rating: 4.7, price_range: "$$$$", image_url: IMG_SEAFOOD, description: "South-west coastal cuisine in a garden setting.", address: "Residency Road" },
    Row { name: "Mavalli Tiffin Rooms", cuisine_type: "South Indian", city: City::Bangalore, rating: 4.5, price_range: "$", image_url: IMG_THALI, description: "Rava idli and filter coffee since 1924.", address: "Lalbagh Road" },
    Row { name: "Toit", cuisine_type: "Brewpub", city: City::Bangalore, rating: 4.4, price_range: "$$", image_url: IMG_DINING_HALL, description: "Craft beer and pub food.", address: "100 Feet Road, Indiranagar" },
    Row { name: "Paradise Biryani", cuisine_type: "Hyderabadi", city: City::Hyderabad, rating: 4.3, price_range: "$$", image_url: IMG_THALI, description: "Dum biryani institution.", address: "Secunderabad" },
    Row { name: "Jewel of Nizam", cuisine_type: "Mughlai", city: City::Hyderabad, rating: 4.6, price_range: "$$$$", image_url: IMG_FINE_DINING, description: "Nizami cuisine with city views.", address: "Golkonda Hotel, Masab Tank" },
    Row { name: "Murugan Idli Shop", cuisine_type: "South Indian", city: City::Chennai, rating: 4.3, price_range: "$", image_url: IMG_THALI, description: "Soft idlis with four chutneys.", address: "T. Nagar" },
    Row { name: "Dakshin", cuisine_type: "South Indian", city: City::Chennai, rating: 4.7, price_range: "$$$$", image_url: IMG_FINE_DINING, description: "Cuisine of the four southern states.", address: "Guindy" },
    Row { name: "Peter Cat", cuisine_type: "Continental", city: City::Kolkata, rating: 4.5, price_range: "$$", image_url: IMG_GRILL, description: "Chelo kebab on Park Street.", address: "Park Street" },
    Row { name: "Vaishali", cuisine_type: "South Indian", city: City::Pune, rating: 4.4, price_range: "$", image_url: IMG_CAFE, description: "Student favourite on FC Road.", address: "Fergusson College Road" },
    Row { name: "Suvarna Mahal", cuisine_type: "Rajasthani", city: City::Jaipur, rating: 4.6, price_range: "$$$$", image_url: IMG_DINING_HALL, description: "Royal dining hall of a palace hotel.", address: "Rambagh Palace" },
    Row { name: "Agashiye", cuisine_type: "Gujarati", city: City::Ahmedabad, rating: 4.6, price_range: "$$$", image_url: IMG_THALI, description: "Rooftop Gujarati thali.", address: "House of MG, Lal Darwaja" },
];

pub fn demo_restaurants() -> Vec<NewRestaurant> {
    ROWS.iter()
        .map(|row| NewRestaurant {
            name: row.name.to_owned(),
            cuisine_type: row.cuisine_type.to_owned(),
            city: row.city.name().to_owned(),
            rating: row.rating,
            price_range: row.price_range.to_owned(),
            image_url: row.image_url.to_owned(),
            description: Some(row.description.to_owned()),
            address: Some(row.address.to_owned()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let rows = demo_restaurants();
        let names: HashSet<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names.len(), rows.len());
    }

    #[test]
    fn cities_are_known() {
        for row in demo_restaurants() {
            assert!(row.city.parse::<City>().is_ok(), "{}", row.city);
        }
    }

    #[test]
    fn default_city_has_enough_featured_restaurants() {
        let kochi = demo_restaurants()
            .into_iter()
            .filter(|r| r.city == City::default().name())
            .count();
        assert!(kochi >= 3);
    }

    #[test]
    fn ratings_are_in_range() {
        assert!(demo_restaurants()
            .iter()
            .all(|r| (0.0..=5.0).contains(&r.rating)));
    }
}
