use leptos::*;

const EXPLORE_LINKS: [&str; 3] = ["Restaurants", "Experiences", "Gift Cards"];
const SUPPORT_LINKS: [&str; 3] = ["Help Center", "For Restaurants", "Privacy"];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
      <footer class="bg-white border-t border-sage/10 py-20 px-6 md:px-20">
        <div class="max-w-7xl mx-auto flex flex-col md:flex-row justify-between items-start gap-16">
          <div class="space-y-6 max-w-sm">
            <div class="flex items-center gap-2 text-sage">
              <span class="text-2xl">"🍴"</span>
              <h2 class="text-2xl font-black tracking-tight text-charcoal">"Savora"</h2>
            </div>
            <p class="text-charcoal/50 text-sm leading-relaxed">
              "The world's most elegant dinner planning platform. Curated experiences for those who appreciate the finer things in life."
            </p>
          </div>
          <div class="grid grid-cols-2 md:grid-cols-3 gap-16">
            <LinkColumn title="Explore" links=&EXPLORE_LINKS />
            <LinkColumn title="Support" links=&SUPPORT_LINKS />
            <div class="space-y-6 col-span-2 md:col-span-1">
              <h4 class="font-bold text-charcoal">"Follow"</h4>
              <div class="flex gap-4">
                <a href="#" class="w-12 h-12 rounded-full bg-beige flex items-center justify-center text-charcoal/60 hover:bg-primary hover:text-charcoal transition-all">"♥"</a>
                <a href="#" class="w-12 h-12 rounded-full bg-beige flex items-center justify-center text-charcoal/60 hover:bg-primary hover:text-charcoal transition-all">"👤"</a>
              </div>
            </div>
          </div>
        </div>
        <div class="max-w-7xl mx-auto pt-16 mt-16 border-t border-sage/10 text-center">
          <p class="text-charcoal/30 text-xs font-medium tracking-wide">
            "© 2024 Savora Dining Experiences. All rights reserved."
          </p>
        </div>
      </footer>
    }
}

#[component]
fn LinkColumn(title: &'static str, links: &'static [&'static str]) -> impl IntoView {
    view! {
      <div class="space-y-6">
        <h4 class="font-bold text-charcoal">{ title }</h4>
        <ul class="space-y-4 text-sm text-charcoal/50">
          { links.iter().map(|label| view! {
              <li><a href="#" class="hover:text-primary transition-colors">{ *label }</a></li>
            }).collect_view()
          }
        </ul>
      </div>
    }
}
