use dioxus::prelude::*;

/// Row of small tags (tech stack, skills).
#[component]
pub fn TagList(tags: &'static [&'static str], #[props(default)] accent: Option<String>) -> Element {
    let style = accent
        .map(|color| format!("border-color: {color}; color: {color};"))
        .unwrap_or_default();

    rsx! {
        ul { class: "tag-list",
            for tag in tags.iter() {
                li { key: "{tag}", class: "tag", style: "{style}", "{tag}" }
            }
        }
    }
}
