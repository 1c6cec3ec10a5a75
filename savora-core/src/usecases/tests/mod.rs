use std::cell::RefCell;

use async_trait::async_trait;

use super::{prelude::*, *};

/// In-memory stand-in for the remote table.
#[derive(Debug, Default)]
pub struct MockTable {
    pub rows: RefCell<Vec<Restaurant>>,
    pub reads: RefCell<Vec<City>>,
    pub upserts: RefCell<Vec<(Vec<NewRestaurant>, String)>>,
    pub failure: RefCell<Option<Error>>,
}

impl MockTable {
    pub fn with_rows(rows: Vec<Restaurant>) -> Self {
        Self {
            rows: RefCell::new(rows),
            ..Default::default()
        }
    }

    pub fn fail_with(&self, message: &str) {
        *self.failure.borrow_mut() = Some(Error::Remote {
            message: message.to_owned(),
            code: None,
        });
    }

    pub fn recover(&self) {
        self.failure.borrow_mut().take();
    }

    fn check_failure(&self) -> Result<()> {
        match &*self.failure.borrow() {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl RestaurantTable for MockTable {
    async fn read_by_city(&self, city: City) -> Result<Vec<Restaurant>> {
        self.reads.borrow_mut().push(city);
        self.check_failure()?;
        Ok(self
            .rows
            .borrow()
            .iter()
            .filter(|r| r.city == city.name())
            .cloned()
            .collect())
    }

    async fn upsert_all(&self, rows: &[NewRestaurant], conflict_key: &str) -> Result<usize> {
        self.upserts
            .borrow_mut()
            .push((rows.to_vec(), conflict_key.to_owned()));
        self.check_failure()?;
        let mut stored = self.rows.borrow_mut();
        for row in rows {
            match stored.iter_mut().find(|r| r.name == row.name) {
                Some(existing) => {
                    let id = existing.id.clone();
                    *existing = row.clone().into_restaurant(id);
                }
                None => {
                    let id = Id::from(format!("mock-{}", stored.len() + 1));
                    stored.push(row.clone().into_restaurant(id));
                }
            }
        }
        Ok(rows.len())
    }
}

pub fn new_restaurant(name: &str, city: &str) -> NewRestaurant {
    NewRestaurant {
        name: name.into(),
        cuisine_type: "South Indian".into(),
        city: city.into(),
        rating: 4.5,
        price_range: "$$".into(),
        image_url: String::new(),
        description: None,
        address: None,
    }
}

#[tokio::test]
async fn fetch_only_restaurants_of_the_city() {
    let table = MockTable::default();
    table
        .upsert_all(
            &[
                new_restaurant("Paragon", "Kochi"),
                new_restaurant("Trishna", "Mumbai"),
                new_restaurant("Dhe Puttu", "Kochi"),
            ],
            RESTAURANT_CONFLICT_KEY,
        )
        .await
        .unwrap();

    let restaurants = fetch_restaurants(&table, City::Kochi).await.unwrap();
    assert_eq!(restaurants.len(), 2);
    assert!(restaurants.iter().all(|r| r.city == "Kochi"));
    assert_eq!(*table.reads.borrow(), vec![City::Kochi]);
}

#[tokio::test]
async fn fetch_empty_city() {
    let table = MockTable::default();
    let restaurants = fetch_restaurants(&table, City::Patna).await.unwrap();
    assert!(restaurants.is_empty());
}

#[tokio::test]
async fn fetch_failure_is_passed_through() {
    let table = MockTable::default();
    table.fail_with("JWT expired");
    let err = fetch_restaurants(&table, City::Kochi).await.unwrap_err();
    assert_eq!(err.to_string(), "JWT expired");
}

#[tokio::test]
async fn seed_merges_by_name() {
    let table = MockTable::default();
    let count = seed_restaurants(&table, &[new_restaurant("Paragon", "Kochi")])
        .await
        .unwrap();
    assert_eq!(count, 1);

    let mut updated = new_restaurant("Paragon", "Kochi");
    updated.rating = 4.9;
    seed_restaurants(&table, &[updated]).await.unwrap();

    let rows = table.rows.borrow();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].rating, 4.9);
    assert_eq!(rows[0].id.as_str(), "mock-1");

    let upserts = table.upserts.borrow();
    assert!(upserts.iter().all(|(_, key)| key == "name"));
}

#[tokio::test]
async fn seed_drops_duplicate_names_within_a_batch() {
    let table = MockTable::default();
    let count = seed_restaurants(
        &table,
        &[
            new_restaurant("Paragon", "Kochi"),
            new_restaurant("Paragon", "Kozhikode"),
            new_restaurant("Trishna", "Mumbai"),
        ],
    )
    .await
    .unwrap();
    assert_eq!(count, 2);
    let upserts = table.upserts.borrow();
    let (rows, _) = &upserts[0];
    assert_eq!(rows[0].city, "Kochi");
    assert_eq!(rows[1].name, "Trishna");
}

#[tokio::test]
async fn seed_nothing() {
    let table = MockTable::default();
    assert_eq!(seed_restaurants(&table, &[]).await.unwrap(), 0);
    assert!(table.upserts.borrow().is_empty());
}
