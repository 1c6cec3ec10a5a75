//! Application state of the restaurant browser.
//!
//! [`AppState`] is a plain state machine: user intents and
//! completed table operations go in, [`Command`]s come out.
//! The caller executes the commands (see [`execute`]) and
//! feeds the outcome back with [`AppState::apply`].

use std::fmt;

use crate::{
    entities::*,
    seed,
    table::{self, RestaurantTable},
    usecases,
};


/// Number of restaurants featured on the home page.
pub const FEATURED_COUNT: usize = 3;

const FETCH_ERROR_FALLBACK: &str =
    "Failed to connect to the restaurant table. Please check the table configuration.";

/// Identifies an issued table request.
///
/// Ids increase monotonically within one [`AppState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchRestaurants {
        request: RequestId,
        city: City,
    },
    SeedRestaurants {
        request: RequestId,
        rows: Vec<NewRestaurant>,
    },
    ScrollToTop,
}

/// The outcome of a table command.
#[derive(Debug, Clone, PartialEq)]
pub enum Settled {
    Fetched {
        request: RequestId,
        result: table::Result<Vec<Restaurant>>,
    },
    Seeded {
        request: RequestId,
        result: table::Result<usize>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    page: Page,
    city: City,
    restaurants: Vec<Restaurant>,
    error: Option<String>,
    notice: Option<String>,
    last_request: u64,
    pending_fetch: Option<RequestId>,
    pending_seed: Option<RequestId>,
}

impl AppState {
    /// The initial state together with the fetch of the
    /// restaurants in the default city.
    pub fn init() -> (Self, Command) {
        let mut state = Self {
            page: Page::default(),
            city: City::default(),
            restaurants: vec![],
            error: None,
            notice: None,
            last_request: 0,
            pending_fetch: None,
            pending_seed: None,
        };
        let cmd = state.start_fetch();
        (state, cmd)
    }

    pub const fn page(&self) -> Page {
        self.page
    }

    pub const fn city(&self) -> City {
        self.city
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn featured(&self) -> &[Restaurant] {
        let end = self.restaurants.len().min(FEATURED_COUNT);
        &self.restaurants[..end]
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// A fetch or a seed is outstanding.
    pub const fn is_loading(&self) -> bool {
        self.pending_fetch.is_some() || self.pending_seed.is_some()
    }

    pub const fn is_seeding(&self) -> bool {
        self.pending_seed.is_some()
    }

    pub fn navigate(&mut self, page: Page) -> Command {
        log::debug!("Navigate to {}", page.as_ref());
        self.page = page;
        Command::ScrollToTop
    }

    /// Selecting the current city again does not refetch.
    pub fn select_city(&mut self, city: City) -> Option<Command> {
        if city == self.city {
            return None;
        }
        log::debug!("Selected city changed from {} to {city}", self.city);
        self.city = city;
        Some(self.start_fetch())
    }

    pub fn retry(&mut self) -> Command {
        self.start_fetch()
    }

    /// Write the demo restaurants into the table.
    ///
    /// Returns `None` while a previous seed is still outstanding.
    pub fn seed(&mut self) -> Option<Command> {
        if let Some(request) = self.pending_seed {
            log::debug!("Seed request {request} is still outstanding");
            return None;
        }
        let request = self.next_request();
        self.pending_seed = Some(request);
        self.error = None;
        self.notice = None;
        Some(Command::SeedRestaurants {
            request,
            rows: seed::demo_restaurants(),
        })
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Process the outcome of a table command.
    ///
    /// Returns a follow-up command if one is needed.
    pub fn apply(&mut self, settled: Settled) -> Option<Command> {
        match settled {
            Settled::Fetched { request, result } => {
                self.finish_fetch(request, result);
                None
            }
            Settled::Seeded { request, result } => self.finish_seed(request, result),
        }
    }

    fn next_request(&mut self) -> RequestId {
        self.last_request += 1;
        RequestId(self.last_request)
    }

    fn start_fetch(&mut self) -> Command {
        let request = self.next_request();
        if let Some(previous) = self.pending_fetch.replace(request) {
            log::debug!("Fetch request {previous} is superseded by {request}");
        }
        self.error = None;
        self.notice = None;
        Command::FetchRestaurants {
            request,
            city: self.city,
        }
    }

    fn finish_fetch(&mut self, request: RequestId, result: table::Result<Vec<Restaurant>>) {
        if self.pending_fetch != Some(request) {
            log::debug!("Discard result of stale fetch request {request}");
            return;
        }
        self.pending_fetch = None;
        match result {
            Ok(restaurants) => {
                self.restaurants = restaurants;
                self.error = None;
            }
            Err(err) => {
                self.restaurants.clear();
                let msg = err.to_string();
                self.error = Some(if msg.trim().is_empty() {
                    FETCH_ERROR_FALLBACK.to_owned()
                } else {
                    msg
                });
            }
        }
    }

    fn finish_seed(&mut self, request: RequestId, result: table::Result<usize>) -> Option<Command> {
        if self.pending_seed != Some(request) {
            log::debug!("Discard result of unknown seed request {request}");
            return None;
        }
        self.pending_seed = None;
        match result {
            Ok(count) => {
                let cmd = self.start_fetch();
                self.notice = Some(format!("Successfully seeded {count} restaurants!"));
                Some(cmd)
            }
            Err(err) => {
                self.error = Some(format!("Failed to seed data: {err}"));
                None
            }
        }
    }
}

/// Run a table command against `table`.
///
/// [`Command::ScrollToTop`] is a UI effect that is left
/// to the caller, it yields `None`.
pub async fn execute<T>(table: &T, command: Command) -> Option<Settled>
where
    T: RestaurantTable + ?Sized,
{
    match command {
        Command::FetchRestaurants { request, city } => {
            let result = usecases::fetch_restaurants(table, city).await;
            Some(Settled::Fetched { request, result })
        }
        Command::SeedRestaurants { request, rows } => {
            let result = usecases::seed_restaurants(table, &rows).await;
            Some(Settled::Seeded { request, result })
        }
        Command::ScrollToTop => None,
    }
}
