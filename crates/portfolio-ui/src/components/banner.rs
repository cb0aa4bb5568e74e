//! Status banner for dashboard actions.

use dioxus::prelude::*;
use portfolio_core::{Banner, BannerKind};

pub fn banner_class(kind: BannerKind) -> &'static str {
    match kind {
        BannerKind::Success => "banner banner-success",
        BannerKind::Error => "banner banner-error",
    }
}

/// Renders the current banner, or nothing.
///
/// Errors are announced assertively to screen readers.
#[component]
pub fn StatusBanner(#[props(!optional)] banner: Option<Banner>) -> Element {
    let Some(banner) = banner else {
        return rsx! {};
    };
    let live = if banner.is_error() { "assertive" } else { "polite" };

    rsx! {
        div {
            class: banner_class(banner.kind),
            role: "status",
            "aria-live": live,
            "{banner.text}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_per_kind() {
        assert_eq!(banner_class(BannerKind::Success), "banner banner-success");
        assert_eq!(banner_class(BannerKind::Error), "banner banner-error");
    }
}
