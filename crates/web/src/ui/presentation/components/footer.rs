use dioxus::prelude::*;

use crate::ui::Route;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "site-footer",
            div {
                class: "footer-links",
                Link { to: Route::OffersRoute {}, "Ofertas" }
                Link { to: Route::PackagesRoute {}, "Pacotes" }
                Link { to: Route::PlannerRoute {}, "Planejar viagem" }
            }
            p {
                class: "footer-note",
                "Tripmate · Roteiros gerados por inteligência artificial. Confirme preços e disponibilidade antes de reservar."
            }
        }
    }
}
