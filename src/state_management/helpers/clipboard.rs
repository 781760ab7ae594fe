use super::*;

pub async fn copy_to_clipboard(
    clipboard_service: Coroutine<ClipboardCommand>,
    s: impl Into<String>,
) -> Result<(), CCStr> {
    log::debug!("copy_to_clipboard - start");
    let (result, rx) = oneshot::channel();
    clipboard_service.send(ClipboardCommand::Set {
        text: s.into(),
        result,
    });
    let outcome = service_reply(rx, "clipboard_service").await?;
    log::debug!("copy_to_clipboard - finished");
    outcome
}
