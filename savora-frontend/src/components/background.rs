use leptos::*;

/// Slowly drifting blurred shapes behind the content.
#[component]
pub fn BackgroundAnimation() -> impl IntoView {
    view! {
      <div class="fixed inset-0 -z-10 overflow-hidden pointer-events-none">
        <div class="blob blob-drift-1 absolute -top-20 -left-20 w-96 h-96 bg-sage/10 rounded-full blur-3xl"></div>
        <div class="blob blob-drift-2 absolute top-1/2 -right-20 w-[500px] h-[500px] bg-terracotta/5 rounded-full blur-3xl"></div>
        <div class="blob blob-drift-3 absolute bottom-0 left-1/4 w-80 h-80 bg-sage/5 rounded-full blur-3xl"></div>
      </div>
    }
}
