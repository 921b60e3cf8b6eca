//! Router and pages
//!
//! Every page shares `SiteLayout` (navbar, toasts, footer). Route paths are
//! the public pt-BR URLs of the site.

use dioxus::prelude::*;

mod auth_pages;
mod catalog_pages;
mod home;
mod layout;
mod my_trips;
mod planner;
mod result;

pub use auth_pages::{ResetPasswordRoute, SignInRoute, SignUpRoute};
pub use catalog_pages::{OffersRoute, PackagesRoute};
pub use home::HomeRoute;
pub use layout::SiteLayout;
pub use my_trips::MyTripsRoute;
pub use planner::PlannerRoute;
pub use result::ResultRoute;

use crate::ui::use_platform;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        HomeRoute {},
        #[route("/planejar")]
        PlannerRoute {},
        #[route("/resultado")]
        ResultRoute {},
        #[route("/ofertas")]
        OffersRoute {},
        #[route("/pacotes")]
        PackagesRoute {},
        #[route("/minhas-viagens")]
        MyTripsRoute {},
        #[route("/entrar")]
        SignInRoute {},
        #[route("/cadastro")]
        SignUpRoute {},
        #[route("/recuperar-senha")]
        ResetPasswordRoute {},
        #[route("/:..segments")]
        NotFoundRoute { segments: Vec<String> },
}

pub const SITE_NAME: &str = "Tripmate";

/// Browser tab title for a page
pub fn page_title(page: &str) -> String {
    if page.is_empty() {
        SITE_NAME.to_string()
    } else {
        format!("{page} | {SITE_NAME}")
    }
}

/// Set the document title once the page mounts
fn use_page_title(page: &'static str) {
    let platform = use_platform();
    use_effect(move || {
        platform.set_page_title(&page_title(page));
    });
}

#[component]
fn NotFoundRoute(segments: Vec<String>) -> Element {
    use_page_title("Página não encontrada");
    let path = segments.join("/");

    rsx! {
        section {
            class: "page page-narrow",
            h1 { "Página não encontrada" }
            p { "Não existe nada em /{path}." }
            Link { class: "btn btn-primary", to: Route::HomeRoute {}, "Voltar ao início" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_the_public_urls() {
        assert_eq!(Route::HomeRoute {}.to_string(), "/");
        assert_eq!(Route::PlannerRoute {}.to_string(), "/planejar");
        assert_eq!(Route::MyTripsRoute {}.to_string(), "/minhas-viagens");
        assert_eq!(Route::ResetPasswordRoute {}.to_string(), "/recuperar-senha");
    }

    #[test]
    fn test_unknown_paths_fall_through() {
        let route: Route = "/resultado".parse().unwrap();
        assert_eq!(route, Route::ResultRoute {});

        let route: Route = "/praias/nordeste".parse().unwrap();
        assert_eq!(
            route,
            Route::NotFoundRoute {
                segments: vec!["praias".to_string(), "nordeste".to_string()]
            }
        );
    }

    #[test]
    fn test_page_titles() {
        assert_eq!(page_title("Ofertas"), "Ofertas | Tripmate");
        assert_eq!(page_title(""), "Tripmate");
    }
}
