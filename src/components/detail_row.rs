//! Detail Row Component
//!
//! Small labeled-value row shared by the detail pages.

use leptos::prelude::*;

#[component]
pub fn DetailRow(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
) -> impl IntoView {
    view! {
        <div class="detail-row">
            <strong>{label}": "</strong>
            {value}
        </div>
    }
}
