//! Translated inline text

use leptos::prelude::*;

/// One piece of copy in all three languages.
#[component]
pub fn Tr(zh: &'static str, en: &'static str, jp: &'static str) -> impl IntoView {
    view! {
        <span class="t-zh">{zh}</span>
        <span class="t-en">{en}</span>
        <span class="t-jp">{jp}</span>
    }
}
