use crate::prelude::*;

use crate::{
    components::svg::{ContentCopy, DrawSvg, SvgSize::Size5},
    utils::CCStr,
};

#[component]
pub fn CopyToClipboardButtonIcon(value: CCStr) -> Element {
    let clipboard_service = state_management::use_clipboard_service();
    rsx! {
        button {
            class: "btn btn-circle btn-xs",
            title: "Salin",
            onclick: move |_| {
                let value = value.clone();
                async move {
                    match state_management::copy_to_clipboard(clipboard_service, value.as_ref()).await {
                        Ok(()) => alert_info("Disalin ke clipboard"),
                        Err(e) => alert_error(e),
                    }
                }
            },
            DrawSvg::<ContentCopy> { size: Size5 }
        }
    }
}

#[component]
pub fn CopyTextarea(value: CCStr, rows: Option<usize>) -> Element {
    rsx! {
        div { class: "relative",
            textarea {
                class: "textarea textarea-bordered font-mono pr-8 text-xs w-full",
                readonly: true,
                rows: rows.unwrap_or(2),
                value: "{value}",
            }
            div { class: "absolute top-2 right-2",
                CopyToClipboardButtonIcon { value: value.clone() }
            }
        }
    }
}
