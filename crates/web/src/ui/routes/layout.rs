use dioxus::prelude::*;

use super::Route;
use crate::ui::presentation::components::{Footer, Navbar, ToastHost};

#[component]
pub fn SiteLayout() -> Element {
    rsx! {
        div {
            class: "site",
            Navbar {}
            main {
                class: "site-main",
                Outlet::<Route> {}
            }
            ToastHost {}
            Footer {}
        }
    }
}
