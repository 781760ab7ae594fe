use crate::prelude::*;

use crate::{
    components::svg::{DrawSvg, Star, SvgSize},
    recipes::prelude::NewReview,
};

/// Five stars, the first `filled` of them highlighted
#[component]
pub fn StarRating(filled: u8, #[props(default = SvgSize::Size5)] size: SvgSize) -> Element {
    rsx! {
        div { class: "flex items-center",
            for i in 1..=NewReview::MAX_RATING {
                span { class: if i <= filled { "text-yellow-400" } else { "text-gray-300" },
                    DrawSvg::<Star> { size }
                }
            }
        }
    }
}

/// Clickable stars used to pick a rating
#[component]
pub fn StarRatingInput(mut rating: Signal<u8>, #[props(default = false)] disabled: bool) -> Element {
    rsx! {
        div { class: "flex items-center gap-1",
            for i in 1..=NewReview::MAX_RATING {
                button {
                    r#type: "button",
                    class: "transition-colors",
                    class: if i <= rating() { "text-yellow-400" } else { "text-gray-300 hover:text-yellow-200" },
                    title: "{i}",
                    disabled,
                    onclick: move |_| rating.set(i),
                    DrawSvg::<Star> { size: SvgSize::Size8 }
                }
            }
        }
    }
}
