use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
    Higher,
    Lower,
}

impl Variant {
    fn class(self) -> &'static str {
        match self {
            Variant::Primary => "btn btn-primary",
            Variant::Secondary => "btn btn-secondary",
            Variant::Higher => "btn bg-green-600 hover:bg-green-500 text-white",
            Variant::Lower => "btn bg-red-600 hover:bg-red-500 text-white",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    label: String,
    #[props(default)]
    variant: Variant,
    #[props(default = false)]
    disabled: bool,
    #[props(default)]
    class: String,
    onclick: EventHandler<MouseEvent>,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let variant_class = props.variant.class();
    let state_class = if props.disabled {
        "opacity-50 cursor-not-allowed"
    } else {
        ""
    };

    rsx! {
        button {
            class: "{variant_class} {state_class} {props.class}",
            disabled: props.disabled,
            onclick: move |evt| {
                if !props.disabled {
                    props.onclick.call(evt);
                }
            },
            "{props.label}"
        }
    }
}
