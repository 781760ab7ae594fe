#![windows_subsystem = "windows"]
mod components;
mod helper_hooks;
mod lazy_image;
mod recipes;
mod state_management;
mod utils;
mod views;

mod prelude {
    pub use super::components::alerts::{alert_error, alert_info, alert_success, alert_warn};
    pub use super::helper_hooks::prelude::*;
    pub use super::state_management::prelude::*;
    pub use dioxus::prelude::*;
}

use serde::{Deserialize, Serialize};

use components::alerts::AlertsContainer;
use prelude::*;

use recipes::prelude::Category;
use utils::CCStr;
use views::{
    main_layout::MainLayout, recipe_detail::RecipeDetailView, recipe_edit::RecipeEditView,
    recipe_list::RecipeListView,
};

#[derive(Clone, Routable, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[rustfmt::skip]
pub enum Route {
    #[layout(MainLayout)]
        #[route("/")]
        RecipeListView {},
        #[route("/recipes/:category/:recipe_id")]
        RecipeDetailView { category: Category, recipe_id: CCStr },
        #[route("/recipes/:category/:recipe_id/edit")]
        RecipeEditView { category: Category, recipe_id: CCStr },
    #[end_layout]
    #[route("/:..route")]
    PageNotFound { route: Vec<String> },
}

static TITLE: &str = "Resep Nusantara";

// Utility classes are generated at runtime by the Tailwind play build
static TAILWIND_SCRIPT: &str = "https://cdn.tailwindcss.com";
static DAISYUI_STYLESHEET: &str = "https://cdn.jsdelivr.net/npm/daisyui@4.12.24/dist/full.min.css";

#[allow(non_snake_case)]
fn App() -> Element {
    log::debug!("App reload");

    crate::state_management::use_init_services();

    use_drop(|| log::debug!("App Dropped"));

    rsx! {
        document::Title { "{TITLE}" }
        document::Link { rel: "stylesheet", href: DAISYUI_STYLESHEET }
        document::Script { src: TAILWIND_SCRIPT }
        document::Stylesheet { href: asset!("/assets/main.css") }

        div { id: "app", class: "text-base", "data-theme": "light",
            AlertsContainer {}
            Router::<Route> {}
        }
    }
}

#[component]
fn PageNotFound(route: Vec<String>) -> Element {
    rsx! {
        div { class: "mx-auto max-w-xl p-8",
            h1 { class: "text-2xl font-bold", "Halaman tidak ditemukan" }
            p { "Halaman yang Anda cari tidak ada." }
            pre { class: "mt-4 text-error", "log:\nattemped to navigate to: {route:?}" }
            Link { to: Route::RecipeListView {}, class: "btn btn-primary mt-4", "Ke daftar resep" }
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    log::info!("starting app");
    use dioxus::desktop::{Config, WindowBuilder};
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_menu(None).with_window(
                WindowBuilder::new()
                    .with_title(TITLE)
                    .with_inner_size(dioxus::desktop::LogicalSize::new(1280, 900))
                    .with_resizable(true),
            ),
        )
        .launch(App)
}
