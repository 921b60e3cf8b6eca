use dioxus::prelude::*;
use tripmate_domain::TravelOffer;

#[component]
pub fn OfferCard(offer: TravelOffer) -> Element {
    let discount = offer.discount_percent();
    let original = offer.original_price.format();
    let discounted = offer.discounted_price.format();
    let valid_until = offer.valid_until.format("%d/%m/%Y").to_string();

    rsx! {
        article {
            class: "card offer-card",
            if discount > 0 {
                span { class: "badge", "-{discount}%" }
            }
            div {
                class: "card-body",
                h3 { "{offer.title}" }
                p { class: "card-subtitle", "{offer.destination}" }
                p {
                    class: "price",
                    if discount > 0 {
                        s { class: "price-original", "{original}" }
                        " "
                    }
                    "{discounted}"
                }
                p { class: "price-note", "Válida até {valid_until}" }
            }
        }
    }
}
