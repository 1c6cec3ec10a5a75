use leptos::*;

use savora_core::entities::Page;

const AVATAR_URL: &str =
    "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?auto=format&fit=crop&q=80&w=100";

#[component]
pub fn NavBar<F>(active: Signal<Page>, on_navigate: F) -> impl IntoView
where
    F: Fn(Page) + 'static + Copy,
{
    view! {
      <header class="sticky top-0 z-50 bg-ivory/80 backdrop-blur-md border-b border-sage/10 px-6 md:px-20 py-4 flex items-center justify-between">

        // Logo
        <div class="flex items-center gap-2 cursor-pointer" on:click = move |_| on_navigate(Page::Home)>
          <div class="w-8 h-8 bg-primary rounded-lg flex items-center justify-center text-white shadow-lg shadow-primary/20">
            "🍴"
          </div>
          <h1 class="text-xl font-extrabold tracking-tight text-charcoal">"Savora"</h1>
        </div>

        // Menu items
        <nav class="hidden md:flex items-center gap-10">
          { Page::all().map(|page| view! { <MenuItem page active on_navigate /> }).collect_view() }
        </nav>

        <div class="flex items-center gap-4">
          // Notifications are not implemented yet.
          <button class="p-2 text-charcoal/60 hover:text-primary transition-colors">"🔔"</button>
          <div
            class="w-10 h-10 rounded-full border-2 border-primary/20 overflow-hidden cursor-pointer"
            on:click = move |_| on_navigate(Page::Profile)
          >
            <img src=AVATAR_URL alt="Profile" class="w-full h-full object-cover" />
          </div>
        </div>
      </header>
    }
}

#[component]
fn MenuItem<F>(page: Page, active: Signal<Page>, on_navigate: F) -> impl IntoView
where
    F: Fn(Page) + 'static + Copy,
{
    view! {
      <button
        class = move || {
          if active.get() == page {
            "text-sm font-semibold transition-colors text-primary"
          } else {
            "text-sm font-semibold transition-colors text-charcoal/60 hover:text-primary"
          }
        }
        on:click = move |_| on_navigate(page)
      >
        { page.label() }
      </button>
    }
}
