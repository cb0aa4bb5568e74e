//! Navigation Header Component
//!
//! Site title on the left, one link per section, and the admin entry on the
//! right.

use dioxus::prelude::*;
use portfolio_core::content::OWNER_NAME;

use crate::app::Route;

/// Navigation location within the site
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavLocation {
    Home,
    About,
    Projects,
    Skills,
    Experience,
    Education,
    Contact,
    Admin,
}

impl NavLocation {
    /// Section links, in header order. Admin is rendered separately.
    pub const SECTIONS: [NavLocation; 7] = [
        NavLocation::Home,
        NavLocation::About,
        NavLocation::Projects,
        NavLocation::Skills,
        NavLocation::Experience,
        NavLocation::Education,
        NavLocation::Contact,
    ];

    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Home => "Home",
            NavLocation::About => "About",
            NavLocation::Projects => "Projects",
            NavLocation::Skills => "Skills",
            NavLocation::Experience => "Experience",
            NavLocation::Education => "Education",
            NavLocation::Contact => "Contact",
            NavLocation::Admin => "Admin",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Home => Route::Home {},
            NavLocation::About => Route::About {},
            NavLocation::Projects => Route::Projects {},
            NavLocation::Skills => Route::Skills {},
            NavLocation::Experience => Route::Experience {},
            NavLocation::Education => Route::Education {},
            NavLocation::Contact => Route::Contact {},
            NavLocation::Admin => Route::Admin {},
        }
    }

    /// Short description used on the home page tiles.
    pub fn blurb(&self) -> &'static str {
        match self {
            NavLocation::Home => "Start here",
            NavLocation::About => "Who I am and what I work on",
            NavLocation::Projects => "Things I have built",
            NavLocation::Skills => "Technical and soft skills",
            NavLocation::Experience => "Internships and roles",
            NavLocation::Education => "Degrees and certifications",
            NavLocation::Contact => "Get in touch",
            NavLocation::Admin => "Message console",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Current location in the site
    pub current: NavLocation,
}

#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let admin_class = if props.current == NavLocation::Admin {
        "nav-admin active"
    } else {
        "nav-admin"
    };

    rsx! {
        header { class: "nav-header",
            Link { class: "nav-title", to: Route::Home {}, "{OWNER_NAME}" }

            nav { class: "nav-links",
                for location in NavLocation::SECTIONS {
                    {
                        let name = location.display_name();
                        let link_class = if location == props.current { "nav-link active" } else { "nav-link" };
                        rsx! {
                            Link { key: "{name}", class: "{link_class}", to: location.route(), "{name}" }
                        }
                    }
                }
            }

            Link { class: "{admin_class}", to: NavLocation::Admin.route(), "Admin" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_exclude_admin() {
        assert!(!NavLocation::SECTIONS.contains(&NavLocation::Admin));
        assert_eq!(NavLocation::SECTIONS[0], NavLocation::Home);
    }

    #[test]
    fn routes_match_locations() {
        assert_eq!(NavLocation::Projects.route(), Route::Projects {});
        assert_eq!(NavLocation::Admin.route().to_string(), "/admin");
        assert_eq!(NavLocation::Education.display_name(), "Education");
    }
}
