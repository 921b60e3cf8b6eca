//! Planner form
//!
//! Every field is controlled. The budget is reformatted as currency on each
//! keystroke and the return date picker cannot go before the departure.

use chrono::NaiveDate;
use dioxus::prelude::*;
use tripmate_domain::{format_currency_input, TripFormData};

use super::FormField;

const DATE_FORMAT: &str = "%Y-%m-%d";
pub const MAX_TRAVELERS: u32 = 20;

/// Value for an `<input type="date">`
pub fn date_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Read an `<input type="date">` value; empty or malformed means unset
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Party size from the number input, kept within `1..=MAX_TRAVELERS`
pub fn parse_travelers(value: &str) -> u32 {
    value
        .trim()
        .parse::<u32>()
        .unwrap_or(1)
        .clamp(1, MAX_TRAVELERS)
}

#[component]
pub fn TripForm(
    initial: TripFormData,
    loading: bool,
    #[props(default)] progress: Option<String>,
    on_submit: EventHandler<TripFormData>,
) -> Element {
    let mut form = use_signal(|| initial.clone());

    let current = form.read().clone();
    let departure = date_input_value(current.departure_date);
    let return_date = date_input_value(current.return_date);
    let nights = current.nights().filter(|n| *n > 0);

    rsx! {
        form {
            class: "trip-form",
            novalidate: true,
            onsubmit: move |evt| {
                evt.prevent_default();
                if !loading {
                    on_submit.call(form.read().clone());
                }
            },

            div {
                class: "form-row",
                FormField {
                    label: "Origem",
                    id: "origin",
                    value: current.origin.clone(),
                    placeholder: "De onde você sai?",
                    disabled: loading,
                    oninput: move |v: String| form.write().origin = v,
                }
                FormField {
                    label: "Destino",
                    id: "destination",
                    value: current.destination.clone(),
                    placeholder: "Para onde você vai?",
                    disabled: loading,
                    oninput: move |v: String| form.write().destination = v,
                }
            }

            div {
                class: "form-row",
                FormField {
                    label: "Ida",
                    id: "departure_date",
                    input_type: "date",
                    value: departure.clone(),
                    disabled: loading,
                    oninput: move |v: String| form.write().departure_date = parse_date_input(&v),
                }
                FormField {
                    label: "Volta",
                    id: "return_date",
                    input_type: "date",
                    value: return_date,
                    min: departure,
                    disabled: loading,
                    oninput: move |v: String| form.write().return_date = parse_date_input(&v),
                }
            }
            if let Some(nights) = nights {
                p { class: "form-hint", "{nights} noite(s)" }
            }

            div {
                class: "form-row",
                FormField {
                    label: "Viajantes",
                    id: "travelers",
                    input_type: "number",
                    value: current.travelers.to_string(),
                    min: "1".to_string(),
                    disabled: loading,
                    oninput: move |v: String| form.write().travelers = parse_travelers(&v),
                }
                FormField {
                    label: "Orçamento",
                    id: "budget",
                    value: current.budget_text.clone(),
                    placeholder: "R$ 0,00",
                    disabled: loading,
                    oninput: move |v: String| form.write().budget_text = format_currency_input(&v),
                }
            }

            div {
                class: "form-field",
                label { r#for: "preferences", "Preferências" }
                textarea {
                    id: "preferences",
                    name: "preferences",
                    rows: "4",
                    placeholder: "Praia, gastronomia, passeios com crianças...",
                    value: "{current.preferences}",
                    disabled: loading,
                    oninput: move |evt| form.write().preferences = evt.value(),
                }
            }

            button {
                class: "btn btn-primary btn-block",
                r#type: "submit",
                disabled: loading,
                if loading {
                    span { class: "spinner" }
                    {progress.unwrap_or_else(|| "Gerando roteiro...".to_string())}
                } else {
                    "Gerar roteiro"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_inputs_round_trip_iso_dates() {
        let date = NaiveDate::from_ymd_opt(2026, 12, 24);
        assert_eq!(date_input_value(date), "2026-12-24");
        assert_eq!(parse_date_input("2026-12-24"), date);
        assert_eq!(date_input_value(None), "");
    }

    #[test]
    fn cleared_or_partial_dates_are_unset() {
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("2026-13-01"), None);
        assert_eq!(parse_date_input("24/12/2026"), None);
    }

    #[test]
    fn travelers_stay_in_range() {
        assert_eq!(parse_travelers("3"), 3);
        assert_eq!(parse_travelers("0"), 1);
        assert_eq!(parse_travelers(""), 1);
        assert_eq!(parse_travelers("-2"), 1);
        assert_eq!(parse_travelers("99"), MAX_TRAVELERS);
    }
}
