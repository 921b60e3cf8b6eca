//! Landing page

use dioxus::prelude::*;

use super::{use_page_title, Route};
use crate::ui::presentation::components::PackageCard;
use crate::ui::presentation::services::use_catalog_service;
use crate::ui::presentation::state::use_auth_state;

const FEATURED_PACKAGES: usize = 3;

#[component]
pub fn HomeRoute() -> Element {
    use_page_title("");
    let catalog = use_catalog_service();
    let auth_state = use_auth_state();

    let featured = use_resource(move || {
        let catalog = catalog.clone();
        async move { catalog.featured_packages(FEATURED_PACKAGES).await }
    });

    let cta = if auth_state.is_signed_in() {
        Route::PlannerRoute {}
    } else {
        Route::SignUpRoute {}
    };

    rsx! {
        section {
            class: "hero",
            h1 { "Sua próxima viagem, planejada em minutos" }
            p {
                class: "hero-lead",
                "Conte para onde quer ir, quando e quanto pretende gastar. A gente monta um roteiro dia a dia sob medida para você."
            }
            div {
                class: "hero-actions",
                Link { class: "btn btn-primary", to: cta, "Planejar minha viagem" }
                Link { class: "btn btn-ghost", to: Route::OffersRoute {}, "Ver ofertas" }
            }
        }

        section {
            class: "page",
            h2 { "Pacotes em destaque" }
            match featured.cloned() {
                Some(packages) => rsx! {
                    div {
                        class: "card-grid",
                        for package in packages {
                            PackageCard { key: "{package.id}", package }
                        }
                    }
                },
                None => rsx! {
                    p { class: "page-loading", "Carregando pacotes..." }
                },
            }
            Link { class: "see-all", to: Route::PackagesRoute {}, "Ver todos os pacotes" }
        }
    }
}
