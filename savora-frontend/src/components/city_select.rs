use leptos::*;

use savora_core::entities::City;

#[component]
pub fn CitySelect(
    city: Signal<City>,
    #[prop(into)] on_select: Callback<City>,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
      <select
        class = class
        prop:value = move || city.get().name()
        on:change = move |ev| {
          let value = event_target_value(&ev);
          match value.parse::<City>() {
            Ok(city) => on_select.call(city),
            Err(err) => log::warn!("{err}"),
          }
        }
      >
        { City::all().map(|c| view! {
            <option value = c.name() selected = move || city.get() == c>{ c.label() }</option>
          }).collect_view()
        }
      </select>
    }
}
