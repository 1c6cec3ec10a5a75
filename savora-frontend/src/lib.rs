use leptos::*;

use savora_core::{
    app::{self, AppState, Command},
    entities::*,
};
use savora_frontend_api::TableApi;

mod components;
use components::*;

mod pages;
use pages::*;

const DEFAULT_TABLE_URL: &str = "http://localhost:54321";
const TABLE_NAME: &str = "restaurants";

fn table_api() -> TableApi {
    let url = option_env!("SAVORA_TABLE_URL").unwrap_or(DEFAULT_TABLE_URL);
    let api_key = option_env!("SAVORA_TABLE_KEY").unwrap_or_default();
    if api_key.is_empty() {
        log::warn!("No table API key configured");
    }
    TableApi::new(url.to_owned(), api_key.to_owned(), TABLE_NAME.to_owned())
}

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    // -- signals -- //

    let (initial_state, fetch_initial) = AppState::init();
    let state = RwSignal::new(initial_state);
    let table = StoredValue::new(table_api());

    // -- memos -- //

    let derived = DerivedState::new(state);
    let page = Signal::from(derived.page);
    let city = Signal::from(derived.city);
    let loading = Signal::from(derived.loading);
    let error = Signal::from(derived.error);
    let notice = Signal::from(derived.notice);
    let restaurants = derived.restaurants;
    let featured = derived.featured;

    // -- callbacks -- //

    let on_navigate = Callback::new(move |page: Page| {
        dispatch(state, table, |s| Some(s.navigate(page)));
    });
    let on_select_city = Callback::new(move |city: City| {
        dispatch(state, table, |s| s.select_city(city));
    });
    let on_retry = Callback::new(move |()| {
        dispatch(state, table, |s| Some(s.retry()));
    });
    let on_seed = Callback::new(move |()| {
        dispatch(state, table, AppState::seed);
    });
    let on_dismiss_notice = Callback::new(move |()| {
        state.update(AppState::dismiss_notice);
    });

    // -- init -- //

    run_command(state, table, fetch_initial);

    view! {
      <div class="min-h-screen flex flex-col relative">
        <BackgroundAnimation />
        <NavBar active = page on_navigate = move |page| on_navigate.call(page) />
        <main class="flex-1">
          {move || {
            let content = match page.get() {
              Page::Home => view! {
                <Home
                  city
                  featured = featured.into()
                  on_navigate
                  on_select_city
                  on_retry
                />
              }.into_view(),
              Page::Restaurants => view! {
                <Restaurants
                  city
                  restaurants = restaurants.into()
                  loading
                  error
                  notice
                  on_select_city
                  on_retry
                  on_seed
                  on_dismiss_notice
                />
              }.into_view(),
              Page::Reservations => view! { <Reservations /> }.into_view(),
              Page::Profile => view! { <Profile /> }.into_view(),
            };
            view! { <div class="page-enter">{ content }</div> }
          }}
        </main>
        <Footer />
      </div>
    }
}

/// Memoized projections of the [`AppState`].
///
/// Subscribers are only notified when their part of the state
/// changed, e.g. the current page is not rebuilt when a fetch settles.
#[derive(Clone, Copy)]
struct DerivedState {
    page: Memo<Page>,
    city: Memo<City>,
    loading: Memo<bool>,
    error: Memo<Option<String>>,
    notice: Memo<Option<String>>,
    restaurants: Memo<Vec<Restaurant>>,
    featured: Memo<Vec<Restaurant>>,
}

impl DerivedState {
    fn new(state: RwSignal<AppState>) -> Self {
        Self {
            page: create_memo(move |_| state.with(AppState::page)),
            city: create_memo(move |_| state.with(AppState::city)),
            loading: create_memo(move |_| state.with(AppState::is_loading)),
            error: create_memo(move |_| state.with(|s| s.error().map(ToOwned::to_owned))),
            notice: create_memo(move |_| state.with(|s| s.notice().map(ToOwned::to_owned))),
            restaurants: create_memo(move |_| state.with(|s| s.restaurants().to_vec())),
            featured: create_memo(move |_| state.with(|s| s.featured().to_vec())),
        }
    }
}

/// Apply a transition and run the resulting command, if any.
fn dispatch<F>(state: RwSignal<AppState>, table: StoredValue<TableApi>, transition: F)
where
    F: FnOnce(&mut AppState) -> Option<Command>,
{
    if let Some(cmd) = state.try_update(transition).flatten() {
        run_command(state, table, cmd);
    }
}

fn run_command(state: RwSignal<AppState>, table: StoredValue<TableApi>, cmd: Command) {
    if cmd == Command::ScrollToTop {
        window().scroll_to_with_x_and_y(0.0, 0.0);
        return;
    }
    let api = table.get_value();
    spawn_local(async move {
        let Some(settled) = app::execute(&api, cmd).await else {
            return;
        };
        if let Some(next) = state.try_update(|s| s.apply(settled)).flatten() {
            run_command(state, table, next);
        }
    });
}

fn open_in_new_tab(url: &str) {
    log::debug!("Open {url}");
    if let Err(err) = window().open_with_url_and_target(url, "_blank") {
        log::warn!("Unable to open {url}: {err:?}");
    }
}
