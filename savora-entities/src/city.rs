use std::str::FromStr;

use strum::{AsRefStr, Display, EnumCount, EnumIter, IntoEnumIterator, IntoStaticStr};
use thiserror::Error;

/// The cities restaurants can be browsed in.
///
/// The declaration order is the order of the city selection.
#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, Display, AsRefStr, IntoStaticStr)]
pub enum City {
    #[default]
    Kochi,
    Mumbai,
    Delhi,
    Bangalore,
    Hyderabad,
    Chennai,
    Kolkata,
    Ahmedabad,
    Pune,
    Jaipur,
    Surat,
    Lucknow,
    Kanpur,
    Nagpur,
    Indore,
    Thane,
    Bhopal,
    Visakhapatnam,
    #[strum(serialize = "Pimpri-Chinchwad")]
    PimpriChinchwad,
    Patna,
}

impl City {
    pub const COUNTRY: &'static str = "India";

    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Display label including the country, e.g. `Kochi, India`.
    pub fn label(self) -> String {
        format!("{}, {}", self.name(), Self::COUNTRY)
    }

    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown city: {0}")]
pub struct UnknownCity(pub String);

impl FromStr for City {
    type Err = UnknownCity;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::iter()
            .find(|city| city.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownCity(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_cities_starting_with_kochi() {
        assert_eq!(City::COUNT, 20);
        assert_eq!(City::all().count(), 20);
        assert_eq!(City::all().next(), Some(City::Kochi));
        assert_eq!(City::default(), City::Kochi);
        assert_eq!(City::all().last(), Some(City::Patna));
    }

    #[test]
    fn hyphenated_city_name() {
        assert_eq!(City::PimpriChinchwad.name(), "Pimpri-Chinchwad");
        assert_eq!(City::PimpriChinchwad.to_string(), "Pimpri-Chinchwad");
        assert_eq!(
            "pimpri-chinchwad".parse::<City>(),
            Ok(City::PimpriChinchwad)
        );
    }

    #[test]
    fn parse_city_names() {
        assert_eq!("Kochi".parse::<City>(), Ok(City::Kochi));
        assert_eq!(" mumbai ".parse::<City>(), Ok(City::Mumbai));
        assert_eq!(
            "Berlin".parse::<City>(),
            Err(UnknownCity("Berlin".to_string()))
        );
    }

    #[test]
    fn every_name_round_trips() {
        for city in City::all() {
            assert_eq!(city.name().parse::<City>(), Ok(city));
        }
    }

    #[test]
    fn label_contains_country() {
        assert_eq!(City::Delhi.label(), "Delhi, India");
    }
}
