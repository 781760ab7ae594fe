use crate::prelude::*;

use crate::utils::CCStr;

/// An image that shows a placeholder until it comes close to the viewport,
/// then fetches the real picture and swaps it in.
///
/// The picture stays blurred while loading. A failed fetch keeps the
/// placeholder.
#[component]
pub fn LazyImage(
    src: ReadOnlySignal<CCStr>,
    alt: CCStr,
    #[props(default)] class: CCStr,
    #[props(default)] placeholder: Option<CCStr>,
    #[props(default)] on_load: Option<EventHandler<()>>,
) -> Element {
    let (state, events) = helper_hooks::use_lazy_image(src, alt.clone(), placeholder, on_load);

    let state = state.read();
    let blur = if state.is_loading { "blur-sm" } else { "blur-0" };

    rsx! {
        img {
            src: "{state.current_source}",
            alt: "{alt}",
            class: "transition-all duration-300 {blur} {class}",
            "data-visible": "{state.is_visible}",
            onmounted: move |event| events.on_mounted.call(event),
            onresize: move |event| events.on_resize.call(event),
        }
    }
}
