//! Full-screen opening headline

use folio_core::content::catalog::{HERO_HINT, HERO_LINES};
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    let [first, second] = HERO_LINES;
    view! {
        <section class="hero">
            <div class="hero-inner">
                <h1 class="hero-line">{first}</h1>
                <h1 class="hero-line text-accent">{second}</h1>
                <p class="hero-hint">{HERO_HINT}</p>
            </div>
        </section>
    }
}
