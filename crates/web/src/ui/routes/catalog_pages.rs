//! Offer and package listings

use dioxus::prelude::*;

use super::use_page_title;
use crate::ui::presentation::components::{OfferCard, PackageCard};
use crate::ui::presentation::services::use_catalog_service;
use crate::ui::use_platform;

#[component]
pub fn PackagesRoute() -> Element {
    use_page_title("Pacotes");
    let catalog = use_catalog_service();

    let packages = use_resource(move || {
        let catalog = catalog.clone();
        async move { catalog.packages().await }
    });

    rsx! {
        section {
            class: "page",
            h1 { "Pacotes" }
            p { class: "page-lead", "Hospedagem e passeios combinados, prontos para personalizar." }
            match packages.cloned() {
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
        }
    }
}

#[component]
pub fn OffersRoute() -> Element {
    use_page_title("Ofertas");
    let catalog = use_catalog_service();
    let platform = use_platform();

    let offers = use_resource(move || {
        let catalog = catalog.clone();
        let today = platform.now().date_naive();
        async move {
            catalog
                .offers()
                .await
                .into_iter()
                .filter(|offer| offer.is_valid_on(today))
                .collect::<Vec<_>>()
        }
    });

    rsx! {
        section {
            class: "page",
            h1 { "Ofertas" }
            p { class: "page-lead", "Preços promocionais por tempo limitado." }
            match offers.cloned() {
                Some(offers) if offers.is_empty() => rsx! {
                    p { class: "empty-state", "Nenhuma oferta válida no momento. Volte em breve!" }
                },
                Some(offers) => rsx! {
                    div {
                        class: "card-grid",
                        for offer in offers {
                            OfferCard { key: "{offer.id}", offer }
                        }
                    }
                },
                None => rsx! {
                    p { class: "page-loading", "Carregando ofertas..." }
                },
            }
        }
    }
}
