use leptos::*;

use savora_core::{entities::Restaurant, map};

use crate::open_in_new_tab;

#[component]
pub fn RestaurantCard(restaurant: Restaurant) -> impl IntoView {
    let map_url = map::restaurant_map_url(&restaurant);
    let on_open_map = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        open_in_new_tab(&map_url);
    };
    let image_url = restaurant.image_or_placeholder().to_owned();
    let Restaurant {
        name,
        cuisine_type,
        city,
        rating,
        price_range,
        ..
    } = restaurant;

    view! {
      <div class="card-lift group bg-white rounded-2xl overflow-hidden border border-sage/5 shadow-sm hover:shadow-xl transition-all duration-300">
        <div class="relative aspect-[4/5] overflow-hidden">
          <img
            src = image_url
            alt = name.clone()
            class="w-full h-full object-cover group-hover:scale-110 transition-transform duration-700"
          />
          <div class="absolute top-4 right-4 bg-white/90 backdrop-blur-sm px-2 py-1 rounded-lg flex items-center gap-1 shadow-sm">
            <span class="text-yellow-500 text-xs">"★"</span>
            <span class="text-xs font-bold text-charcoal">{ rating }</span>
          </div>
          // Favourites are not implemented yet.
          <button class="absolute top-4 left-4 w-10 h-10 rounded-full bg-white/20 backdrop-blur-md flex items-center justify-center text-white hover:bg-primary hover:text-charcoal transition-colors">
            "♥"
          </button>
        </div>
        <div class="p-6">
          <div class="flex justify-between items-start mb-1">
            <h3 class="text-xl font-bold text-charcoal">{ name }</h3>
            <span class="text-primary font-bold">{ price_range.clone() }</span>
          </div>
          <p class="text-charcoal/50 text-sm mb-4">{ format!("{cuisine_type} • {city}") }</p>
          <div class="flex flex-wrap gap-2 mb-6">
            <Tag label = cuisine_type />
            <Tag label = price_range />
          </div>
          <div class="flex gap-2">
            // Booking is not implemented yet.
            <button class="flex-1 py-3 bg-primary hover:bg-primary/90 text-charcoal font-bold rounded-xl transition-all shadow-lg shadow-primary/20">
              "Book Now"
            </button>
            <button
              class="p-3 bg-beige text-charcoal/60 rounded-xl hover:bg-sage/10 transition-colors"
              title="Show on map"
              on:click = on_open_map
            >
              "🗺"
            </button>
          </div>
        </div>
      </div>
    }
}

#[component]
fn Tag(label: String) -> impl IntoView {
    view! {
      <span class="px-2 py-1 bg-sage/5 text-sage text-[10px] font-bold uppercase rounded-md tracking-wider">
        { label }
      </span>
    }
}
