use crate::prelude::*;

use crate::{
    components::svg::{DrawSvg, Heart, HeartOutline, SvgSize::Size6},
    utils::CCStr,
};

#[component]
pub fn FavoriteButton(recipe_id: ReadOnlySignal<CCStr>) -> Element {
    let favorites_service = state_management::use_favorites_service();
    let is_favorite = helper_hooks::use_memo_is_favorite(recipe_id);

    rsx! {
        button {
            class: "btn btn-circle btn-ghost",
            title: if is_favorite() { "Hapus dari favorit" } else { "Tambah ke favorit" },
            onclick: move |_| state_management::toggle_favorite(favorites_service, recipe_id()),
            if is_favorite() {
                span { class: "text-red-500",
                    DrawSvg::<Heart> { size: Size6 }
                }
            } else {
                span { class: "text-gray-400",
                    DrawSvg::<HeartOutline> { size: Size6 }
                }
            }
        }
    }
}
