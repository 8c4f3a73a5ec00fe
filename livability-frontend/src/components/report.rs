use leptos::*;

use crate::regions::SignalRegion;

/// A card with a list of rendered report items.
#[component]
pub fn ReportList(title: &'static str, region: SignalRegion) -> impl IntoView {
    let html = region.html();
    view! {
      <div class="card mb-3">
        <div class="card-header">{ title }</div>
        <ul class="list-group list-group-flush" inner_html=move || html.get() />
      </div>
    }
}

/// A card with free-form rendered content.
#[component]
pub fn ReportCard(title: &'static str, region: SignalRegion) -> impl IntoView {
    let html = region.html();
    view! {
      <div class="card mb-3">
        <div class="card-header">{ title }</div>
        <div class="card-body" inner_html=move || html.get() />
      </div>
    }
}
