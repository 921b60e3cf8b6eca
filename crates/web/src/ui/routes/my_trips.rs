//! Trips the signed-in user generated before

use dioxus::prelude::*;
use tripmate_domain::UserTrip;

use super::{use_page_title, Route};
use crate::ui::presentation::services::use_catalog_service;
use crate::ui::presentation::state::use_auth_state;

fn trip_dates(trip: &UserTrip) -> Option<String> {
    let fmt = |d: chrono::NaiveDate| d.format("%d/%m/%Y").to_string();
    match (trip.departure_date, trip.return_date) {
        (Some(from), Some(to)) => Some(format!("{} a {}", fmt(from), fmt(to))),
        (Some(from), None) => Some(format!("a partir de {}", fmt(from))),
        _ => None,
    }
}

fn created_on(trip: &UserTrip) -> String {
    trip.created_at.format("%d/%m/%Y").to_string()
}

#[component]
pub fn MyTripsRoute() -> Element {
    use_page_title("Minhas viagens");
    let auth_state = use_auth_state();
    let catalog = use_catalog_service();
    let navigator = use_navigator();

    // Wait for the stored session to be restored before deciding
    use_effect(move || {
        if *auth_state.initialized.read() && auth_state.session.read().is_none() {
            navigator.replace(Route::SignInRoute {});
        }
    });

    let trips = use_resource(move || {
        let catalog = catalog.clone();
        let user = auth_state.session.read().as_ref().map(|s| s.user.clone());
        async move {
            match user {
                Some(user) => Some(catalog.user_trips(&user).await.map_err(|e| e.message)),
                None => None,
            }
        }
    });

    rsx! {
        section {
            class: "page page-narrow",
            h1 { "Minhas viagens" }
            match trips.cloned().flatten() {
                None => rsx! {
                    p { class: "page-loading", "Carregando suas viagens..." }
                },
                Some(Err(message)) => rsx! {
                    p { class: "error-state", "{message}" }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    div {
                        class: "empty-state",
                        p { "Você ainda não planejou nenhuma viagem." }
                        Link {
                            class: "btn btn-primary",
                            to: Route::PlannerRoute {},
                            "Planejar agora"
                        }
                    }
                },
                Some(Ok(list)) => rsx! {
                    ul {
                        class: "trip-list",
                        for trip in list {
                            li {
                                key: "{trip.id}",
                                class: "card trip-item",
                                h3 { "{trip.origin} → {trip.destination}" }
                                if let Some(dates) = trip_dates(&trip) {
                                    p { class: "card-subtitle", "{dates}" }
                                }
                                if let Some(summary) = trip.summary.clone() {
                                    p { "{summary}" }
                                }
                                p { class: "price-note", "Criada em ", {created_on(&trip)} }
                            }
                        }
                    }
                },
            }
        }
    }
}
