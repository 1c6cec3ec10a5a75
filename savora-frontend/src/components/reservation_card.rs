use leptos::*;

use savora_core::entities::{Reservation, ReservationStatus};

const fn badge_class(status: ReservationStatus) -> &'static str {
    match status {
        ReservationStatus::Confirmed => "bg-primary/10 text-sage-dark",
        ReservationStatus::Pending => "bg-yellow-100 text-yellow-700",
        ReservationStatus::Cancelled => "bg-red-100 text-red-700",
        ReservationStatus::Past => "bg-charcoal/10 text-charcoal/60",
    }
}

const fn dot_class(status: ReservationStatus) -> &'static str {
    match status {
        ReservationStatus::Confirmed => "w-2 h-2 rounded-full bg-primary",
        _ => "w-2 h-2 rounded-full bg-yellow-500",
    }
}

// None of the reservation actions are wired up, reservations are not persisted.

#[component]
pub fn ReservationCard(reservation: Reservation) -> impl IntoView {
    let Reservation {
        restaurant_name,
        date,
        time,
        guests,
        location,
        status,
        image_url,
        ..
    } = reservation;
    let is_past = status.is_past();
    let card_class = if is_past {
        "bg-white rounded-2xl overflow-hidden border border-sage/5 shadow-sm flex flex-col md:flex-row transition-all opacity-70 hover:opacity-100 bg-beige/30"
    } else {
        "bg-white rounded-2xl overflow-hidden border border-sage/5 shadow-sm flex flex-col md:flex-row transition-all"
    };

    view! {
      <div class=card_class>
        <div class="w-full md:w-64 h-48 md:h-auto overflow-hidden">
          <img src=image_url alt=restaurant_name.clone() class="w-full h-full object-cover" />
        </div>
        <div class="flex-1 p-6 flex flex-col justify-between">
          <div>
            <div class="flex justify-between items-start mb-3">
              <h4 class="text-xl font-bold text-charcoal">{ restaurant_name }</h4>
              <span class=format!(
                "px-3 py-1 rounded-full text-[10px] font-bold uppercase tracking-widest flex items-center gap-1.5 {}",
                badge_class(status)
              )>
                { (!is_past).then(|| view! { <div class=dot_class(status)></div> }) }
                { status.to_string() }
              </span>
            </div>
            <div class="space-y-2 text-charcoal/60">
              <div class="flex items-center gap-2 text-sm">
                <span>"📅"</span>
                <span>{ format!("{date} • {time}") }</span>
              </div>
              <div class="flex items-center gap-2 text-sm">
                <span>"👥"</span>
                <span>{ format!("Table for {guests} • {location}") }</span>
              </div>
            </div>
          </div>

          <div class="flex flex-wrap gap-3 mt-6 pt-6 border-t border-sage/10">
            { if is_past {
                view! {
                  <button class="flex-1 md:flex-none px-6 py-2 bg-primary/10 text-sage-dark font-bold rounded-full text-xs hover:bg-primary/20 transition-colors">"Rebook"</button>
                  <button class="flex-1 md:flex-none px-6 py-2 border border-sage/20 text-charcoal/60 font-bold rounded-full text-xs hover:bg-white transition-colors">"Leave Review"</button>
                }.into_view()
              } else {
                view! {
                  <button class="flex-1 md:flex-none px-6 py-2 bg-primary text-charcoal font-bold rounded-full hover:shadow-lg hover:shadow-primary/20 transition-all text-sm">"Modify"</button>
                  <button class="flex-1 md:flex-none px-6 py-2 bg-beige text-charcoal/60 font-bold rounded-full hover:bg-red-50 hover:text-red-600 transition-colors text-sm">"Cancel"</button>
                  <button class="flex-1 md:flex-none px-6 py-2 border border-sage/10 text-charcoal/40 font-bold rounded-full hover:bg-ivory transition-colors text-sm">"View Details"</button>
                }.into_view()
              }
            }
          </div>
        </div>
      </div>
    }
}

/// Compact card of a past visit.
#[component]
pub fn PastVisitCard(reservation: Reservation) -> impl IntoView {
    let Reservation {
        restaurant_name,
        date,
        guests,
        location,
        ..
    } = reservation;

    view! {
      <div class="bg-beige/30 rounded-2xl p-6 border border-sage/10 flex flex-col gap-6 opacity-80 hover:opacity-100 transition-opacity">
        <div class="flex justify-between items-start">
          <div>
            <h4 class="font-bold text-lg text-charcoal">{ restaurant_name }</h4>
            <p class="text-[10px] text-sage font-bold uppercase tracking-widest mt-1">{ format!("Visited {date}") }</p>
          </div>
          <div class="w-10 h-10 bg-white rounded-full flex items-center justify-center text-sage shadow-sm">"🍴"</div>
        </div>
        <div class="text-sm text-charcoal/60 space-y-1">
          <p>{ format!("{guests} Guests • Dinner") }</p>
          <p>{ location }</p>
        </div>
        <div class="flex gap-3 mt-2">
          <button class="flex-1 py-2.5 bg-primary/10 text-sage-dark font-bold rounded-full text-xs hover:bg-primary/20 transition-colors">"Rebook"</button>
          <button class="flex-1 py-2.5 border border-sage/20 text-charcoal/60 font-bold rounded-full text-xs hover:bg-white transition-colors">"Leave Review"</button>
        </div>
      </div>
    }
}
