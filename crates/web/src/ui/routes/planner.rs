//! Trip planner page
//!
//! The generation webhook can take tens of seconds. While it runs the form
//! stays locked and the button walks through a few progress messages.

use dioxus::prelude::*;
use tripmate_domain::TripFormData;

use super::{use_page_title, Route};
use crate::ui::presentation::components::TripForm;
use crate::ui::presentation::services::use_trip_service;
use crate::ui::presentation::state::{use_auth_state, use_toast_state};
use crate::ui::use_platform;

pub const PROGRESS_STAGES: [&str; 4] = [
    "Analisando seu destino...",
    "Buscando hospedagens e passeios...",
    "Montando o roteiro dia a dia...",
    "Finalizando os detalhes...",
];
pub const PROGRESS_STEP_MS: u64 = 4_000;

#[component]
pub fn PlannerRoute() -> Element {
    use_page_title("Planejar viagem");
    let platform = use_platform();
    let trips = use_trip_service();
    let auth_state = use_auth_state();
    let toasts = use_toast_state();
    let navigator = use_navigator();
    let mut loading = use_signal(|| false);
    let mut progress = use_signal(|| None::<String>);

    let on_submit = move |form: TripFormData| {
        let mut toasts = toasts;
        if let Err(e) = form.validate() {
            toasts.error(&platform, e.to_string());
            return;
        }

        tracing::info!(destination = %form.destination.trim(), "Planning trip");
        loading.set(true);
        let trips = trips.clone();
        let platform = platform.clone();
        spawn(async move {
            let ticker_platform = platform.clone();
            let ticker = spawn(async move {
                for stage in PROGRESS_STAGES.iter().cycle() {
                    progress.set(Some(stage.to_string()));
                    ticker_platform.sleep_ms(PROGRESS_STEP_MS).await;
                }
            });

            let result = trips.plan_trip(&form).await;
            ticker.cancel();
            progress.set(None);
            loading.set(false);

            match result {
                Ok(_) => {
                    toasts.success(&platform, "Seu roteiro está pronto!");
                    navigator.push(Route::ResultRoute {});
                }
                Err(e) if e.is_auth() => {
                    toasts.error(&platform, e.user_message());
                    navigator.push(Route::SignInRoute {});
                }
                Err(e) => toasts.error(&platform, e.user_message()),
            }
        });
    };

    rsx! {
        section {
            class: "page page-narrow",
            h1 { "Planeje sua viagem" }
            p {
                class: "page-lead",
                "Preencha os dados abaixo e receba um roteiro completo gerado por inteligência artificial."
            }
            if !auth_state.is_signed_in() {
                div {
                    class: "notice",
                    "Você precisa "
                    Link { to: Route::SignInRoute {}, "entrar" }
                    " para gerar um roteiro."
                }
            }
            TripForm {
                initial: TripFormData::default(),
                loading: loading(),
                progress: progress(),
                on_submit,
            }
        }
    }
}
