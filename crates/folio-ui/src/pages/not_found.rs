//! 404 page

use leptos::prelude::*;

use crate::router::routes;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="not-found-page">
            <h1>"404"</h1>
            <p>"Nothing lives at this address."</p>
            <a href=routes::HOME>"BACK TO THE PORTFOLIO"</a>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_component_exists() {
        let _component = NotFound;
    }
}
