use dioxus::prelude::*;
use tripmate_domain::TravelPackage;

use crate::ui::Route;

#[component]
pub fn PackageCard(package: TravelPackage) -> Element {
    let per_night = package
        .price_per_night()
        .map(|p| format!("{} por noite", p.format()));
    let price = package.price.format();
    let nights = if package.nights == 1 {
        "1 noite".to_string()
    } else {
        format!("{} noites", package.nights)
    };

    rsx! {
        article {
            class: "card package-card",
            if let Some(url) = package.image_url.clone() {
                img { class: "card-image", src: "{url}", alt: "{package.destination}" }
            }
            div {
                class: "card-body",
                h3 { "{package.title}" }
                p { class: "card-subtitle", "{package.destination} · {nights}" }
                ul {
                    class: "highlights",
                    for highlight in package.highlights.iter() {
                        li { key: "{highlight}", "{highlight}" }
                    }
                }
                p { class: "price", "{price}" }
                if let Some(per_night) = per_night {
                    p { class: "price-note", "{per_night}" }
                }
                Link {
                    class: "btn btn-primary",
                    to: Route::PlannerRoute {},
                    "Planejar esta viagem"
                }
            }
        }
    }
}
