use leptos::*;

use savora_core::{entities::*, reservations};

use crate::components::*;

#[component]
pub fn Reservations() -> impl IntoView {
    let all = StoredValue::new(reservations::mock_reservations());
    let (tab, set_tab) = create_signal(ReservationTab::default());
    let in_tab = move || all.with_value(|all| reservations::reservations_in_tab(all, tab.get()));

    view! {
      <div class="max-w-5xl mx-auto px-6 md:px-20 py-12 space-y-12">
        <div class="flex flex-col md:flex-row md:items-end justify-between gap-8">
          <div class="space-y-2">
            <h1 class="text-4xl font-bold tracking-tight text-charcoal">"My Reservations"</h1>
            <p class="text-sage font-medium">"Manage your upcoming and past dining experiences."</p>
          </div>
          <div class="flex bg-beige p-1 rounded-full w-fit">
            <TabButton tab = ReservationTab::Upcoming active = tab.into() on_select = set_tab />
            <TabButton tab = ReservationTab::Past active = tab.into() on_select = set_tab />
          </div>
        </div>

        <section class="space-y-8">
          <div class="flex items-center gap-3 text-charcoal/80">
            <span>{ move || if tab.get() == ReservationTab::Upcoming { "🕒" } else { "🕘" } }</span>
            <h3 class="text-xl font-bold">{ move || tab.get().label() }</h3>
          </div>
          { move || match tab.get() {
              ReservationTab::Upcoming => view! {
                <div class="grid grid-cols-1 gap-8">
                  { in_tab().into_iter().map(|reservation| view! { <ReservationCard reservation /> }).collect_view() }
                </div>
              },
              ReservationTab::Past => view! {
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                  { in_tab().into_iter().map(|reservation| view! { <PastVisitCard reservation /> }).collect_view() }
                </div>
              },
            }
          }
        </section>
      </div>
    }
}

#[component]
fn TabButton(
    tab: ReservationTab,
    active: Signal<ReservationTab>,
    on_select: WriteSignal<ReservationTab>,
) -> impl IntoView {
    view! {
      <button
        class = move || {
          if active.get() == tab {
            "px-8 py-2.5 rounded-full text-sm font-bold transition-all bg-white text-charcoal shadow-sm"
          } else {
            "px-8 py-2.5 rounded-full text-sm font-bold transition-all text-charcoal/40"
          }
        }
        on:click = move |_| on_select.set(tab)
      >
        { tab.label() }
      </button>
    }
}
