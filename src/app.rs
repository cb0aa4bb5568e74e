use dioxus::prelude::*;

use crate::context::services;
use crate::pages::{
    About, AboutClassic, Admin, Contact, Education, Experience, Home, Login, NotFound, Projects,
    Skills,
};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Home, one tile per section
/// - `/about`, `/projects`, `/skills`, `/experience` - inline card grids
/// - `/about-classic` - About with popup overlays
/// - `/education`, `/contact` - static lists
/// - `/login` - admin login form
/// - `/admin` - message dashboard, guarded
/// - anything else redirects to `/`
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/about-classic")]
    AboutClassic {},
    #[route("/projects")]
    Projects {},
    #[route("/skills")]
    Skills {},
    #[route("/experience")]
    Experience {},
    #[route("/education")]
    Education {},
    #[route("/contact")]
    Contact {},
    #[route("/login")]
    Login {},
    #[route("/admin")]
    Admin {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles, service context, and routing.
#[component]
pub fn App() -> Element {
    let Some(services) = use_hook(services) else {
        return rsx! {
            style { {GLOBAL_STYLES} }
            main { class: "page",
                p { class: "error-text", "The application was started without its services." }
            }
        };
    };

    use_context_provider(|| services.session.clone());
    use_context_provider(|| services.api.clone());
    use_context_provider(|| services.config.clone());

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
