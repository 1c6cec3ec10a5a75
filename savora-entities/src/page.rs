use strum::{AsRefStr, EnumCount, EnumIter, IntoEnumIterator};

/// The top-level views of the application.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Restaurants,
    Reservations,
    Profile,
}

impl Page {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Restaurants => "Restaurants",
            Self::Reservations => "Reservations",
            Self::Profile => "Profile",
        }
    }

    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}
