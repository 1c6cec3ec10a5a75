use crate::entities::*;

#[allow(clippy::too_many_arguments)]
fn reservation(
    id: &str,
    restaurant_name: &str,
    date: &str,
    time: &str,
    guests: u16,
    location: &str,
    status: ReservationStatus,
    image_url: &str,
) -> Reservation {
    Reservation {
        id: id.into(),
        restaurant_name: restaurant_name.into(),
        date: date.into(),
        time: time.into(),
        guests,
        location: location.into(),
        status,
        image_url: image_url.into(),
    }
}

/// The reservations of the demo account.
///
/// Reservations are not persisted anywhere yet.
pub fn mock_reservations() -> Vec<Reservation> {
    vec![
        reservation(
            "res-1",
            "The Gilded Ivy",
            "Friday, Oct 27",
            "7:30 PM",
            2,
            "Fort Kochi",
            ReservationStatus::Confirmed,
            "https://images.unsplash.com/photo-1514362545857-3bc16c4c7d1b?auto=format&fit=crop&q=80&w=800",
        ),
        reservation(
            "res-2",
            "Malabar Junction",
            "Saturday, Oct 28",
            "8:00 PM",
            4,
            "Willingdon Island",
            ReservationStatus::Pending,
            "https://images.unsplash.com/photo-1551632436-cbf8dd35adfa?auto=format&fit=crop&q=80&w=800",
        ),
        reservation(
            "res-3",
            "Paragon Restaurant",
            "Sep 12, 2024",
            "8:30 PM",
            3,
            "Lulu Mall, Kochi",
            ReservationStatus::Past,
            "https://images.unsplash.com/photo-1555396273-367ea4eb4db5?auto=format&fit=crop&q=80&w=800",
        ),
    ]
}

/// The reservations shown in `tab`, keeping their order.
pub fn reservations_in_tab(reservations: &[Reservation], tab: ReservationTab) -> Vec<Reservation> {
    reservations
        .iter()
        .filter(|r| tab.contains(r.status))
        .cloned()
        .collect()
}

/// The reservation previewed on the home page.
pub fn upcoming_preview(reservations: &[Reservation]) -> Option<&Reservation> {
    reservations.first()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_partition_the_fixture() {
        let all = mock_reservations();
        let upcoming = reservations_in_tab(&all, ReservationTab::Upcoming);
        let past = reservations_in_tab(&all, ReservationTab::Past);

        assert_eq!(all.len(), 3);
        assert_eq!(upcoming.len(), 2);
        assert_eq!(past.len(), 1);
        assert!(upcoming.iter().all(|r| !r.is_past()));
        assert!(past.iter().all(Reservation::is_past));

        let mut ids: Vec<_> = upcoming.iter().chain(&past).map(|r| r.id.clone()).collect();
        ids.sort();
        let mut all_ids: Vec<_> = all.iter().map(|r| r.id.clone()).collect();
        all_ids.sort();
        assert_eq!(ids, all_ids);
    }

    #[test]
    fn tabs_keep_order() {
        let all = mock_reservations();
        let upcoming = reservations_in_tab(&all, ReservationTab::Upcoming);
        assert_eq!(upcoming[0].restaurant_name, "The Gilded Ivy");
        assert_eq!(upcoming[1].restaurant_name, "Malabar Junction");
    }

    #[test]
    fn preview_first_reservation() {
        let all = mock_reservations();
        assert_eq!(upcoming_preview(&all).map(|r| r.id.as_str()), Some("res-1"));
        assert!(upcoming_preview(&[]).is_none());
    }
}
