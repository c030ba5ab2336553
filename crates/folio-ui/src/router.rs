//! Route table

use leptos::prelude::*;
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{Home, NotFound};

pub mod routes {
    pub const HOME: &str = "/";
}

#[component]
pub fn AppRouter() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=StaticSegment("") view=Home />
            </Routes>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_route_is_root() {
        assert_eq!(routes::HOME, "/");
    }

    #[test]
    fn test_router_component_exists() {
        let _component = AppRouter;
    }
}
