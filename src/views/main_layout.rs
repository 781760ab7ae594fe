use crate::prelude::*;

use crate::{
    components::svg::{ChefHat, DrawSvg, SvgSize::Size8},
    Route,
};

/// Application frame. Its `main` element is the scroll container the lazy
/// images are measured against.
#[component]
pub fn MainLayout() -> Element {
    log::debug!("MainLayout reload");

    let viewport_service = state_management::use_viewport_service();
    let mut scroll_container = use_signal(|| None::<std::rc::Rc<MountedData>>);

    let measure = move || {
        if let Some(mounted) = scroll_container.peek().clone() {
            viewport_service.send(ViewportCommand::Measure(mounted));
        }
    };

    use_drop(|| log::debug!("MainLayout Dropped"));

    rsx! {
        div { class: "flex h-dvh flex-col bg-gray-50",
            header { class: "z-20 flex-none bg-white shadow-md",
                NavBar {}
            }
            main {
                class: "flex-1 overflow-y-auto",
                onmounted: move |event| {
                    scroll_container.set(Some(event.data()));
                    measure();
                },
                onscroll: move |_| measure(),
                onresize: move |_| measure(),
                Outlet::<Route> {}
                Footer {}
            }
        }
    }
}

#[component]
fn NavBar() -> Element {
    rsx! {
        nav { class: "mx-auto flex h-14 max-w-6xl items-center gap-3 px-4",
            Link { to: Route::RecipeListView {}, class: "flex items-center gap-2",
                span { class: "text-orange-500",
                    DrawSvg::<ChefHat> { size: Size8 }
                }
                div {
                    div { class: "text-lg font-black text-nowrap", "Resep Nusantara" }
                    div { class: "text-xs italic text-gray-500", "Masakan dan minuman Indonesia" }
                }
            }
            div { class: "grow" }
            div { class: "text-sm text-gray-500", "{state_management::APP_CONFIG.read().username}" }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer { class: "mx-auto max-w-6xl px-4 py-6 text-right text-sm text-gray-400",
            "Resep Nusantara"
        }
    }
}
