use leptos::*;

#[component]
pub fn PlaceSearch(on_search: Callback<String, ()>) -> impl IntoView {
    view! {
      <input
        type="search"
        class="form-control mb-3"
        placeholder="Search a place"
        on:keyup = move |ev| {
          ev.stop_propagation();
          let target = event_target::<web_sys::HtmlInputElement>(&ev);
          match &*ev.key() {
            "Enter" => {
              let value = event_target_value(&ev);
              let value = value.trim();
              if !value.is_empty() {
                on_search.call(value.to_string());
              }
            }
            "Escape" => {
              target.set_value("");
            }
            _=> { /* nothing to to */ }
          }
        }
      />
    }
}
