//! Result page: shows the last stored itinerary

use dioxus::prelude::*;
use tripmate_domain::{ItineraryContent, StoredTrip};

use super::{use_page_title, Route};
use crate::ui::presentation::services::use_trip_service;

fn format_date(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// One-line summary of the request behind an itinerary
pub fn trip_summary(trip: &StoredTrip) -> String {
    let form = &trip.form;
    let travelers = if form.travelers == 1 {
        "1 viajante".to_string()
    } else {
        format!("{} viajantes", form.travelers)
    };
    let mut summary = format!(
        "{} → {} · {} a {} · {}",
        form.origin.trim(),
        form.destination.trim(),
        format_date(form.departure_date),
        format_date(form.return_date),
        travelers
    );
    let budget = form.budget();
    if !budget.is_zero() {
        summary.push_str(&format!(" · {}", budget.format()));
    }
    summary
}

/// Where to send the visitor instead of rendering, if anywhere
pub fn redirect_target(trip: Option<&StoredTrip>) -> Option<Route> {
    match trip {
        Some(_) => None,
        None => Some(Route::PlannerRoute {}),
    }
}

#[component]
pub fn ResultRoute() -> Element {
    use_page_title("Seu roteiro");
    let trips = use_trip_service();
    let navigator = use_navigator();

    let trip = use_hook({
        let trips = trips.clone();
        move || trips.last_trip()
    });

    let redirect = redirect_target(trip.as_ref());
    use_effect(move || {
        if let Some(target) = redirect.clone() {
            navigator.replace(target);
        }
    });

    let Some(trip) = trip else {
        return rsx! {
            p { class: "page-loading", "Redirecionando para o planejador..." }
        };
    };

    let summary = trip_summary(&trip);
    let saved_at = trip.saved_at.format("%d/%m/%Y %H:%M").to_string();
    let destination = trip.form.destination.trim().to_string();
    let preferences = trip.form.preferences.trim().to_string();

    rsx! {
        section {
            class: "page page-narrow",
            h1 { "Seu roteiro para {destination}" }
            p { class: "trip-summary", "{summary}" }
            if !preferences.is_empty() {
                p { class: "trip-preferences", "Preferências: {preferences}" }
            }

            article {
                class: "itinerary",
                match &trip.response {
                    ItineraryContent::Text(text) => rsx! {
                        div { class: "itinerary-text", "{text}" }
                    },
                    ItineraryContent::Json(_) => rsx! {
                        pre { class: "itinerary-json", {trip.response.display_text()} }
                    },
                }
            }
            p { class: "price-note", "Gerado em {saved_at}" }

            div {
                class: "result-actions",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        trips.start_over();
                        navigator.push(Route::PlannerRoute {});
                    },
                    "Planejar nova viagem"
                }
                Link { class: "btn btn-ghost", to: Route::PackagesRoute {}, "Ver pacotes" }
            }
        }
    }
}
