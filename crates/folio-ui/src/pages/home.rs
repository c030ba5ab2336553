//! The single-page portfolio

use leptos::prelude::*;

use crate::components::{Experience, Hero, Projects};

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="home-page">
            <Hero />
            <Experience />
            <Projects />
        </div>
    }
}
