use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CardProps {
    #[props(default)]
    title: Option<String>,
    #[props(default)]
    class: String,
    children: Element,
}

#[component]
pub fn Card(props: CardProps) -> Element {
    rsx! {
        div { class: "card {props.class}",
            if let Some(title) = &props.title {
                h3 { class: "text-lg font-semibold text-duel-400 mb-4", "{title}" }
            }
            {props.children}
        }
    }
}
