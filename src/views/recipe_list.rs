use crate::prelude::*;

use crate::{
    components::{misc::Spinner, recipe_card::RecipeCard},
    recipes::prelude::Category,
};

#[component]
pub fn RecipeListView() -> Element {
    log::debug!("RecipeListView Rendered");

    let mut category = use_signal(|| None::<Category>);
    let recipes = helper_hooks::use_resource_recipes(category.into());

    use_drop(|| log::debug!("RecipeListView Dropped"));

    let spinner_class = category().unwrap_or_default().palette().spinner;
    let content = match &*recipes.read() {
        None => rsx! {
            Spinner { color_class: spinner_class, label: "Memuat resep..." }
        },
        Some(Err(e)) => rsx! {
            div { class: "alert alert-error", "{e}" }
        },
        Some(Ok(recipes)) if recipes.is_empty() => rsx! {
            p { class: "py-16 text-center text-gray-500", "Belum ada resep di kategori ini." }
        },
        Some(Ok(recipes)) => rsx! {
            div { class: "grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-3",
                for recipe in recipes.iter() {
                    RecipeCard { key: "{recipe.id}", recipe: recipe.clone() }
                }
            }
        },
    };

    rsx! {
        div { class: "mx-auto max-w-6xl px-4 py-8",
            h1 { class: "mb-6 text-4xl font-black text-gray-900", "Resep Nusantara" }
            div { role: "tablist", class: "tabs tabs-boxed mb-8 w-fit",
                CategoryTab { category, value: None, label: "Semua" }
                for c in Category::ALL {
                    CategoryTab { category, value: Some(c), label: c.label() }
                }
            }
            {content}
        }
    }
}

#[component]
fn CategoryTab(
    mut category: Signal<Option<Category>>,
    value: Option<Category>,
    label: &'static str,
) -> Element {
    rsx! {
        button {
            role: "tab",
            class: "tab",
            class: if category() == value { "tab-active" },
            onclick: move |_| category.set(value),
            {label}
        }
    }
}
