use strum::{AsRefStr, Display, EnumIter};

use crate::id::Id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ReservationStatus {
    Confirmed,
    Pending,
    Cancelled,
    Past,
}

impl ReservationStatus {
    pub const fn is_past(self) -> bool {
        matches!(self, Self::Past)
    }
}

/// A table reservation.
///
/// Date and time are display strings, they are
/// never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: Id,
    pub restaurant_name: String,
    pub date: String,
    pub time: String,
    pub guests: u16,
    pub location: String,
    pub status: ReservationStatus,
    pub image_url: String,
}

impl Reservation {
    pub const fn is_past(&self) -> bool {
        self.status.is_past()
    }
}

/// The two views of the reservation list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ReservationTab {
    #[default]
    Upcoming,
    Past,
}

impl ReservationTab {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Past => "Past",
        }
    }

    pub const fn contains(self, status: ReservationStatus) -> bool {
        match self {
            Self::Upcoming => !status.is_past(),
            Self::Past => status.is_past(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn status_names() {
        assert_eq!(ReservationStatus::Confirmed.to_string(), "confirmed");
        assert_eq!(ReservationStatus::Cancelled.as_ref(), "cancelled");
    }

    #[test]
    fn every_status_belongs_to_exactly_one_tab() {
        for status in ReservationStatus::iter() {
            let tabs = ReservationTab::iter()
                .filter(|tab| tab.contains(status))
                .count();
            assert_eq!(tabs, 1);
        }
        assert!(ReservationTab::Past.contains(ReservationStatus::Past));
        assert!(ReservationTab::Upcoming.contains(ReservationStatus::Cancelled));
    }
}
