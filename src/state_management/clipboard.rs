use dioxus::prelude::*;

use futures_util::stream::StreamExt;
use tokio::sync::oneshot;

use crate::{prelude::alert_warn, utils::CCStr};

pub enum ClipboardCommand {
    Set {
        text: String,
        result: oneshot::Sender<Result<(), CCStr>>,
    },
}
impl core::fmt::Debug for ClipboardCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Set { text, .. } => f
                .debug_struct("Set")
                .field("text", text)
                .finish_non_exhaustive(),
        }
    }
}

pub(super) fn use_clipboard_service() -> Coroutine<ClipboardCommand> {
    use_coroutine(
        move |mut rx: UnboundedReceiver<ClipboardCommand>| async move {
            log::info!("clipboard_service (coroutine) - start");

            let mut clipboard = match arboard::Clipboard::new() {
                Ok(c) => Some(c),
                Err(e) => {
                    log::warn!("Clipboard service failed to init: {e}");
                    alert_warn("Clipboard tidak tersedia");
                    None
                }
            };

            while let Some(cmd) = rx.next().await {
                log::debug!("clipboard_service (coroutine) - Processing command {cmd:?}...");
                match cmd {
                    ClipboardCommand::Set { text, result } => {
                        let outcome = match clipboard.as_mut() {
                            Some(clipboard) => clipboard.set_text(text).map_err(|e| {
                                log::error!("Failed to copy to clipboard: {e}");
                                CCStr::from("Gagal menyalin ke clipboard")
                            }),
                            None => Err(CCStr::from("Clipboard tidak tersedia")),
                        };
                        let _ = result.send(outcome);
                    }
                }
                log::debug!("clipboard_service (coroutine) - Command processed");
            }
        },
    )
}
