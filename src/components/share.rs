use crate::prelude::*;

use crate::{
    components::{
        copy::CopyTextarea,
        modal::InfoModal,
        qrcode::QRCode,
        svg::{DrawSvg, ShareVariant, SvgSize::Size6},
    },
    recipes::prelude::Category,
    utils::{async_sleep, recipe_share_url, CCStr},
};

const SHARED_BADGE_MS: u64 = 3000;

/// Copies a link to the recipe and shows it as a QR code
#[component]
pub fn ShareButton(recipe_id: CCStr, category: Category, recipe_name: CCStr) -> Element {
    let clipboard_service = state_management::use_clipboard_service();
    let mut show_copied = use_signal(|| false);
    let mut qr_open = use_signal(|| false);

    let share_url = use_memo(use_reactive!(|(recipe_id, category)| {
        let base_url = state_management::APP_CONFIG.read().share_base_url.clone();
        CCStr::from(recipe_share_url(&base_url, &recipe_id, &category.to_string()))
    }));

    let share = move |_| async move {
        let url = share_url();
        log::debug!("ShareButton - sharing {url}");
        qr_open.set(true);
        match state_management::copy_to_clipboard(clipboard_service, url.as_ref()).await {
            Ok(()) => {
                alert_info("Link resep disalin ke clipboard");
                show_copied.set(true);
                async_sleep(SHARED_BADGE_MS).await;
                show_copied.set(false);
            }
            Err(e) => {
                log::error!("ShareButton - {e}");
                alert_error("Gagal membagikan resep");
            }
        }
    };

    rsx! {
        div { class: "relative",
            button {
                class: "btn btn-circle btn-ghost",
                title: "Bagikan resep",
                onclick: share,
                DrawSvg::<ShareVariant> { size: Size6 }
            }
            if show_copied() {
                div { class: "absolute right-0 top-full mt-2 whitespace-nowrap rounded-md bg-gray-800 px-3 py-1 text-sm text-white",
                    "Link disalin!"
                }
            }
        }
        InfoModal { is_open: qr_open, title: "Bagikan resep",
            div { class: "flex w-80 flex-col items-center gap-4",
                p { class: "text-center font-semibold", "{recipe_name}" }
                div { class: "w-64 text-gray-900",
                    QRCode { data: share_url() }
                }
                div { class: "w-full",
                    CopyTextarea { value: share_url() }
                }
            }
        }
    }
}
