use leptos::*;

use savora_core::{entities::*, map};

use crate::{components::*, open_in_new_tab};

const SKELETON_COUNT: usize = 6;

// The filters are displayed but do not narrow the query yet.
const FILTERS: [&str; 5] = [
    "South Indian",
    "North Indian",
    "Chinese",
    "Price: $$",
    "Rating: 4.5+",
];

#[allow(clippy::too_many_arguments, clippy::too_many_lines)]
#[component]
pub fn Restaurants(
    city: Signal<City>,
    restaurants: Signal<Vec<Restaurant>>,
    loading: Signal<bool>,
    error: Signal<Option<String>>,
    notice: Signal<Option<String>>,
    on_select_city: Callback<City>,
    on_retry: Callback<()>,
    on_seed: Callback<()>,
    on_dismiss_notice: Callback<()>,
) -> impl IntoView {
    let on_open_map = move |_| open_in_new_tab(&map::city_map_url(city.get_untracked()));

    view! {
      <div class="max-w-7xl mx-auto px-6 md:px-20 py-12 space-y-12">
        <div class="flex flex-col md:flex-row md:items-end justify-between gap-8">
          <div class="space-y-2">
            <h1 class="text-4xl font-bold tracking-tight text-charcoal">"Find your next flavor"</h1>
            <p class="text-charcoal/50 font-medium">
              { move || format!("Discover the best premium dining experiences in {}.", city.get()) }
            </p>
          </div>
          <div class="flex items-center gap-2 text-charcoal/80 bg-white px-4 py-2 rounded-full border border-sage/10 shadow-sm relative">
            <span class="text-primary">"📍"</span>
            <CitySelect
              city
              on_select = on_select_city
              class = "bg-transparent border-none focus:ring-0 font-bold text-sm pr-6 appearance-none cursor-pointer"
            />
          </div>
        </div>

        // Filters
        <div class="flex items-center gap-4 overflow-x-auto no-scrollbar pb-2">
          <button class="flex items-center gap-2 px-6 py-2.5 bg-primary text-charcoal font-bold rounded-full shadow-lg shadow-primary/20 whitespace-nowrap">
            <span>"All Filters"</span>
          </button>
          { FILTERS.iter().map(|filter| view! {
              <button class="flex items-center gap-2 px-6 py-2.5 bg-white border border-sage/10 text-charcoal/60 font-semibold rounded-full hover:border-primary hover:text-primary transition-all whitespace-nowrap">
                <span>{ *filter }</span>
                <span class="opacity-30">"⌄"</span>
              </button>
            }).collect_view()
          }
        </div>

        { move || notice.get().map(|msg| view! {
            <div class="flex items-center justify-between gap-4 px-6 py-4 bg-primary/10 text-sage-dark font-semibold rounded-2xl">
              <span>{ msg }</span>
              <button
                class="text-charcoal/40 hover:text-charcoal"
                title="Dismiss"
                on:click = move |_| on_dismiss_notice.call(())
              >
                "✕"
              </button>
            </div>
          })
        }

        { move || {
            if loading.get() {
                view! { <LoadingSkeleton /> }.into_view()
            } else if let Some(error) = error.get() {
                view! { <ConnectionError error on_retry /> }.into_view()
            } else if restaurants.with(Vec::is_empty) {
                view! { <NoRestaurants city on_retry on_seed /> }.into_view()
            } else {
                view! {
                  <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-10">
                    <For
                      each = move || restaurants.get()
                      key = |restaurant| restaurant.id.clone()
                      children = move |restaurant| view! { <RestaurantCard restaurant /> }
                    />
                  </div>
                }.into_view()
            }
          }
        }

        // Floating map button
        <div class="fixed bottom-10 left-1/2 -translate-x-1/2 z-40">
          <button
            class="flex items-center gap-3 px-8 py-4 bg-charcoal text-white font-bold rounded-full shadow-2xl hover:scale-105 transition-transform"
            on:click = on_open_map
          >
            <span>"🗺"</span>
            <span>"Show Map View"</span>
          </button>
        </div>
      </div>
    }
}

#[component]
fn LoadingSkeleton() -> impl IntoView {
    view! {
      <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-10">
        { (0..SKELETON_COUNT).map(|_| view! {
            <div class="bg-white rounded-2xl h-[400px] animate-pulse border border-sage/5"></div>
          }).collect_view()
        }
      </div>
    }
}

#[component]
fn ConnectionError(error: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
      <div class="py-20 text-center space-y-6 bg-white rounded-3xl border border-sage/5 shadow-sm">
        <div class="w-16 h-16 bg-red-50 text-red-500 rounded-full flex items-center justify-center mx-auto text-2xl">"⚙"</div>
        <div class="space-y-2">
          <h3 class="text-xl font-bold text-charcoal">"Connection Error"</h3>
          <p class="text-charcoal/50 max-w-md mx-auto">{ error }</p>
        </div>
        <div class="flex justify-center gap-4">
          <button
            class="px-8 py-3 bg-primary text-charcoal font-bold rounded-xl shadow-lg shadow-primary/20"
            on:click = move |_| on_retry.call(())
          >
            "Retry Connection"
          </button>
        </div>
      </div>
    }
}

#[component]
fn NoRestaurants(city: Signal<City>, on_retry: Callback<()>, on_seed: Callback<()>) -> impl IntoView {
    view! {
      <div class="py-20 text-center space-y-6 bg-white rounded-3xl border border-sage/5 shadow-sm">
        <div class="w-16 h-16 bg-beige text-sage rounded-full flex items-center justify-center mx-auto text-2xl">"🍴"</div>
        <div class="space-y-2">
          <h3 class="text-xl font-bold text-charcoal">"No Restaurants Found"</h3>
          <p class="text-charcoal/50 max-w-md mx-auto">
            { move || format!("We couldn't find any restaurants in {} in your database.", city.get()) }
          </p>
        </div>
        <div class="flex flex-col md:flex-row justify-center gap-4">
          <button
            class="px-8 py-3 border border-sage/10 text-charcoal/60 font-bold rounded-xl hover:bg-ivory transition-colors"
            on:click = move |_| on_retry.call(())
          >
            "Refresh"
          </button>
          <button
            class="px-8 py-3 bg-primary text-charcoal font-bold rounded-xl shadow-lg shadow-primary/20"
            on:click = move |_| on_seed.call(())
          >
            "Seed with Demo Data"
          </button>
        </div>
      </div>
    }
}
