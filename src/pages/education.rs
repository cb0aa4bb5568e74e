//! Education page - degrees and certifications.

use dioxus::prelude::*;
use portfolio_core::content::{CERTIFICATIONS, DEGREES};
use portfolio_ui::TagList;

use crate::components::{NavHeader, NavLocation};

#[component]
pub fn Education() -> Element {
    rsx! {
        NavHeader { current: NavLocation::Education }

        main { class: "page education",
            header { class: "page-header",
                h1 { class: "page-title", "Education" }
                p { class: "page-subtitle", "Academic background and certifications" }
            }

            section { class: "timeline",
                for degree in DEGREES.iter() {
                    article { key: "{degree.degree}", class: "timeline-entry",
                        header { class: "timeline-header",
                            h2 { class: "timeline-title", "{degree.degree}" }
                            span { class: "timeline-duration", "{degree.duration}" }
                        }
                        p { class: "timeline-institution", "{degree.institution}" }
                        p { class: "body-text", "{degree.description}" }
                        TagList { tags: degree.subjects }
                    }
                }
            }

            section { class: "certifications",
                h2 { class: "section-header", "Certifications" }
                ul { class: "cert-list",
                    for cert in CERTIFICATIONS.iter() {
                        li { key: "{cert.name}", class: "cert-item",
                            span { class: "cert-name", "{cert.name}" }
                            span { class: "cert-issuer", "{cert.issuer}" }
                            span { class: "cert-date", "{cert.date}" }
                        }
                    }
                }
            }
        }
    }
}
