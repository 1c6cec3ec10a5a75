use leptos::*;

const AVATAR_URL: &str =
    "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?auto=format&fit=crop&q=80&w=200";

const SETTINGS: [&str; 4] = [
    "Personal Information",
    "Payment Methods",
    "Notification Preferences",
    "Privacy & Security",
];

/// Static account page, there is no authentication.
#[component]
pub fn Profile() -> impl IntoView {
    view! {
      <div class="max-w-4xl mx-auto px-6 md:px-20 py-12 space-y-12">
        <div class="flex flex-col md:flex-row items-center gap-8 bg-white p-8 rounded-[2rem] border border-sage/5 shadow-sm">
          <div class="relative">
            <div class="w-32 h-32 rounded-full border-4 border-primary/20 overflow-hidden shadow-xl">
              <img src=AVATAR_URL alt="Arjun Nair" class="w-full h-full object-cover" />
            </div>
            <button class="absolute bottom-0 right-0 p-2 bg-primary text-charcoal rounded-full shadow-lg hover:scale-110 transition-transform">"⚙"</button>
          </div>
          <div class="flex-1 text-center md:text-left space-y-2">
            <h1 class="text-3xl font-black text-charcoal">"Arjun Nair"</h1>
            <p class="text-charcoal/50 font-medium">"Food Enthusiast • Kochi, India"</p>
            <div class="flex flex-wrap justify-center md:justify-start gap-4 mt-4">
              <div class="flex items-center gap-2 text-sm text-charcoal/60 bg-beige px-4 py-1.5 rounded-full">
                <span>"✉"</span>
                <span>"arjun.nair@example.com"</span>
              </div>
              <div class="flex items-center gap-2 text-sm text-charcoal/60 bg-beige px-4 py-1.5 rounded-full">
                <span>"☎"</span>
                <span>"+91 98765 43210"</span>
              </div>
            </div>
          </div>
        </div>

        <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
          <Stat icon="🕘" value="12" label="Total Bookings" accent="bg-primary/10 text-primary" />
          <Stat icon="♥" value="8" label="Favorites" accent="bg-sage/10 text-sage" />
          <Stat icon="★" value="4.8" label="Review Average" accent="bg-terracotta/10 text-terracotta" />
        </div>

        <div class="space-y-6">
          <h2 class="text-xl font-bold text-charcoal">"Account Settings"</h2>
          <div class="bg-white rounded-2xl border border-sage/5 shadow-sm divide-y divide-sage/5">
            { SETTINGS.iter().map(|item| view! {
                <button class="w-full px-6 py-4 flex items-center justify-between hover:bg-ivory transition-colors text-left">
                  <span class="text-sm font-semibold text-charcoal/80">{ *item }</span>
                  <span class="text-charcoal/20">"›"</span>
                </button>
              }).collect_view()
            }
            <button class="w-full px-6 py-4 flex items-center justify-between hover:bg-red-50 transition-colors text-left group">
              <span class="text-sm font-semibold text-red-500">"Log Out"</span>
              <span class="text-red-300 group-hover:text-red-500">"⎋"</span>
            </button>
          </div>
        </div>
      </div>
    }
}

#[component]
fn Stat(
    icon: &'static str,
    value: &'static str,
    label: &'static str,
    accent: &'static str,
) -> impl IntoView {
    view! {
      <div class="bg-white p-6 rounded-2xl border border-sage/5 shadow-sm space-y-4">
        <div class=format!("w-10 h-10 rounded-lg flex items-center justify-center {accent}")>{ icon }</div>
        <div>
          <h3 class="font-bold text-charcoal">{ value }</h3>
          <p class="text-xs text-charcoal/40 font-bold uppercase tracking-wider">{ label }</p>
        </div>
      </div>
    }
}
