//! Top navigation
//!
//! Links change with the session: visitors see sign-in and sign-up, signed-in
//! users see their trips, their name and a sign-out button.

use dioxus::prelude::*;

use crate::ui::presentation::services::use_auth_service;
use crate::ui::presentation::state::{use_auth_state, use_toast_state};
use crate::ui::Route;
use crate::ui::use_platform;

#[component]
pub fn Navbar() -> Element {
    let auth_state = use_auth_state();
    let auth = use_auth_service();
    let platform = use_platform();
    let navigator = use_navigator();
    let toasts = use_toast_state();
    let mut menu_open = use_signal(|| false);

    let signed_in = auth_state.is_signed_in();
    let greeting = auth_state.greeting_name();

    let sign_out = move |_| {
        let auth = auth.clone();
        let platform = platform.clone();
        let mut toasts = toasts;
        spawn(async move {
            auth.sign_out().await;
            toasts.info(&platform, "Você saiu da sua conta.");
            navigator.push(Route::HomeRoute {});
        });
    };

    rsx! {
        header {
            class: "navbar",
            Link {
                class: "brand",
                to: Route::HomeRoute {},
                "Tripmate"
            }
            button {
                class: "menu-toggle",
                aria_label: "Abrir menu",
                onclick: move |_| menu_open.toggle(),
                "☰"
            }
            nav {
                class: if menu_open() { "nav-links open" } else { "nav-links" },
                onclick: move |_| menu_open.set(false),
                Link { to: Route::PlannerRoute {}, "Planejar" }
                Link { to: Route::OffersRoute {}, "Ofertas" }
                Link { to: Route::PackagesRoute {}, "Pacotes" }
                if signed_in {
                    Link { to: Route::MyTripsRoute {}, "Minhas viagens" }
                    if let Some(name) = greeting {
                        span { class: "nav-greeting", "Olá, {name}" }
                    }
                    button {
                        class: "btn btn-ghost",
                        onclick: sign_out,
                        "Sair"
                    }
                } else {
                    Link { to: Route::SignInRoute {}, "Entrar" }
                    Link { class: "btn btn-primary", to: Route::SignUpRoute {}, "Criar conta" }
                }
            }
        }
    }
}
