use dioxus::prelude::*;
use duels_api::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Tone {
    Success,
    Danger,
    Warning,
    Info,
    #[default]
    Neutral,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Tone::Success => "bg-green-900/40 text-green-400 border-green-700",
            Tone::Danger => "bg-red-900/40 text-red-400 border-red-700",
            Tone::Warning => "bg-yellow-900/40 text-yellow-400 border-yellow-700",
            Tone::Info => "bg-blue-900/40 text-blue-400 border-blue-700",
            Tone::Neutral => "bg-gray-800 text-gray-300 border-gray-700",
        }
    }
}

impl From<Outcome> for Tone {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Pending => Tone::Warning,
            Outcome::Won => Tone::Success,
            Outcome::Lost => Tone::Danger,
        }
    }
}

impl From<DuelStatus> for Tone {
    fn from(status: DuelStatus) -> Self {
        match status {
            DuelStatus::Open => Tone::Info,
            DuelStatus::Active => Tone::Success,
            DuelStatus::Ended => Tone::Warning,
            DuelStatus::Resolved => Tone::Neutral,
        }
    }
}

#[component]
pub fn Badge(label: String, #[props(default)] tone: Tone) -> Element {
    let tone_class = tone.class();

    rsx! {
        span { class: "inline-flex items-center px-2 py-0.5 rounded border text-xs font-semibold {tone_class}",
            "{label}"
        }
    }
}
