use crate::id::Id;

/// Shown whenever a restaurant has no image of its own.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?auto=format&fit=crop&q=80&w=800";

/// A restaurant as stored in the remote table.
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: Id,
    pub name: String,
    pub cuisine_type: String,
    pub city: String,
    pub rating: f64,
    /// Symbolic price tier, e.g. `$$$`.
    pub price_range: String,
    pub image_url: String,
    pub description: Option<String>,
    pub address: Option<String>,
}

impl Restaurant {
    pub fn image_or_placeholder(&self) -> &str {
        if self.image_url.trim().is_empty() {
            PLACEHOLDER_IMAGE_URL
        } else {
            &self.image_url
        }
    }

    /// The address or an empty string.
    pub fn address_or_empty(&self) -> &str {
        self.address.as_deref().unwrap_or_default()
    }
}

/// A restaurant that has not been written to the remote table yet.
///
/// The table assigns the [`Id`] and deduplicates by name.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRestaurant {
    pub name: String,
    pub cuisine_type: String,
    pub city: String,
    pub rating: f64,
    pub price_range: String,
    pub image_url: String,
    pub description: Option<String>,
    pub address: Option<String>,
}

impl NewRestaurant {
    pub fn into_restaurant(self, id: Id) -> Restaurant {
        let Self {
            name,
            cuisine_type,
            city,
            rating,
            price_range,
            image_url,
            description,
            address,
        } = self;
        Restaurant {
            id,
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
