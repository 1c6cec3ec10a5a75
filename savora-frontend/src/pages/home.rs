use leptos::*;

use savora_core::{entities::*, reservations};

use crate::components::*;

const CTA_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1514362545857-3bc16c4c7d1b?auto=format&fit=crop&q=80&w=1200";

#[component]
pub fn Home(
    city: Signal<City>,
    featured: Signal<Vec<Restaurant>>,
    on_navigate: Callback<Page>,
    on_select_city: Callback<City>,
    on_retry: Callback<()>,
) -> impl IntoView {
    let preview = reservations::upcoming_preview(&reservations::mock_reservations()).cloned();

    view! {
      <div class="space-y-20 pb-20">

        // Hero
        <section class="pt-16 md:pt-24 px-6 md:px-20 text-center flex flex-col items-center gap-10">
          <div class="fade-up space-y-6 max-w-4xl">
            <h1 class="text-5xl md:text-7xl font-black leading-[1.1] tracking-tight text-charcoal">
              "Plan your perfect dinner, "
              <span class="text-sage italic font-medium">"effortlessly."</span>
            </h1>
            <p class="text-charcoal/60 text-lg md:text-xl font-medium max-w-2xl mx-auto">
              "Experience the art of fine dining with seamless planning and elegant reservations at the world's finest tables."
            </p>
          </div>

          // Search bar
          <div class="fade-up fade-up-delayed w-full max-w-3xl">
            <div class="flex flex-col md:flex-row items-center p-2 bg-white rounded-[2rem] shadow-2xl shadow-sage/10 border border-sage/5">
              <div class="flex-1 flex items-center px-6 gap-3 w-full">
                <span class="text-sage">"🔍"</span>
                // Text search is not implemented yet.
                <input
                  type="text"
                  placeholder="Search for a restaurant or cuisine"
                  class="w-full border-none focus:ring-0 bg-transparent text-charcoal placeholder:text-charcoal/30 py-4"
                />
              </div>
              <div class="hidden md:block w-px h-8 bg-sage/10 mx-2"></div>
              <div class="flex-1 flex items-center px-6 gap-3 w-full relative">
                <span class="text-sage">"📍"</span>
                <CitySelect
                  city
                  on_select = on_select_city
                  class = "w-full border-none focus:ring-0 bg-transparent text-charcoal py-4 appearance-none cursor-pointer"
                />
              </div>
              <button
                class="w-full md:w-auto bg-primary hover:bg-primary/90 text-charcoal px-10 py-4 rounded-2xl font-bold transition-all shadow-lg shadow-primary/20"
                on:click = move |_| on_navigate.call(Page::Restaurants)
              >
                "Find Table"
              </button>
            </div>
          </div>
        </section>

        // Upcoming reservation
        <section class="max-w-7xl mx-auto px-6 md:px-20">
          <div class="flex items-center justify-between mb-8">
            <h2 class="text-2xl font-bold tracking-tight text-charcoal">"Upcoming Reservation"</h2>
            <button
              class="text-primary font-bold text-sm hover:underline"
              on:click = move |_| on_navigate.call(Page::Reservations)
            >
              "View all"
            </button>
          </div>
          { preview.map(|reservation| view! { <ReservationCard reservation /> }) }
        </section>

        // Featured restaurants
        <section class="max-w-7xl mx-auto px-6 md:px-20">
          <div class="flex items-center justify-between mb-10">
            <div>
              <h2 class="text-3xl font-bold tracking-tight text-charcoal">
                { move || format!("Featured in {}", city.get()) }
              </h2>
              <p class="text-charcoal/40 font-medium">"Hand-picked selections for your next evening"</p>
            </div>
            // Carousel paging is not implemented yet.
            <div class="flex gap-3">
              <button class="w-12 h-12 flex items-center justify-center border border-sage/10 rounded-full hover:bg-white hover:shadow-md transition-all">"‹"</button>
              <button class="w-12 h-12 flex items-center justify-center border border-sage/10 rounded-full hover:bg-white hover:shadow-md transition-all">"›"</button>
            </div>
          </div>
          <div class="grid grid-cols-1 md:grid-cols-3 gap-10">
            <For
              each = move || featured.get()
              key = |restaurant| restaurant.id.clone()
              children = move |restaurant| view! { <RestaurantCard restaurant /> }
            />
            <Show when = move || featured.with(Vec::is_empty)>
              <div class="col-span-3 py-20 text-center space-y-6 bg-white rounded-3xl border border-sage/5 shadow-sm">
                <div class="w-12 h-12 bg-beige text-sage rounded-full flex items-center justify-center mx-auto">"🍴"</div>
                <div class="space-y-1">
                  <h3 class="text-lg font-bold text-charcoal">"No Restaurants Found"</h3>
                  <p class="text-charcoal/40 text-sm">
                    { move || format!("We couldn't find any restaurants in {}.", city.get()) }
                  </p>
                </div>
                <div class="flex justify-center gap-3">
                  <button
                    class="px-6 py-2 border border-sage/10 text-charcoal/60 font-bold rounded-xl text-sm hover:bg-ivory transition-colors"
                    on:click = move |_| on_retry.call(())
                  >
                    "Refresh"
                  </button>
                  <button
                    class="px-6 py-2 bg-primary text-charcoal font-bold rounded-xl text-sm shadow-lg shadow-primary/20"
                    on:click = move |_| on_navigate.call(Page::Restaurants)
                  >
                    "Setup Database"
                  </button>
                </div>
              </div>
            </Show>
          </div>
        </section>

        // Call to action
        <section class="max-w-7xl mx-auto px-6 md:px-20">
          <div class="bg-charcoal text-white rounded-[3rem] p-12 md:p-20 relative overflow-hidden">
            <div class="relative z-10 max-w-xl space-y-8">
              <h2 class="text-4xl md:text-5xl font-bold leading-tight">"Elevate your dining experience"</h2>
              <p class="text-white/60 text-lg leading-relaxed">
                "Join Savora Select to get early access to reservations at the city's most exclusive tables and personalized recommendations."
              </p>
              <button class="bg-primary text-charcoal px-10 py-4 rounded-2xl font-bold text-lg hover:scale-105 transition-transform shadow-xl shadow-primary/10">
                "Get Started for Free"
              </button>
            </div>
            <div class="absolute top-0 right-0 h-full w-1/2 opacity-20 hidden lg:block">
              <img src=CTA_IMAGE_URL alt="Dining" class="w-full h-full object-cover" />
            </div>
          </div>
        </section>
      </div>
    }
}
