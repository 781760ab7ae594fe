use crate::prelude::*;

use crate::{
    components::{
        favorite::FavoriteButton,
        lazy_image::LazyImage,
        misc::{BackButton, Spinner},
        modal::ConfirmModal,
        rating::StarRating,
        reviews::ReviewSection,
        share::ShareButton,
        svg::{
            AccountMultiple, AlertCircle, ChefHat, ClockOutline, Delete, DrawSvg, Pencil,
            SvgSize::{Size10, Size5, Size6},
        },
    },
    recipes::prelude::{Category, Recipe},
    utils::CCStr,
};

#[component]
pub fn RecipeDetailView(category: Category, recipe_id: ReadOnlySignal<CCStr>) -> Element {
    log::debug!("RecipeDetailView Rendered");

    let recipe = helper_hooks::use_resource_recipe(recipe_id);
    let palette = category.palette();

    use_drop(|| log::debug!("RecipeDetailView Dropped"));

    let content = match &*recipe.read() {
        None => rsx! {
            Spinner { color_class: palette.spinner, label: "Memuat resep..." }
        },
        Some(Err(e)) => rsx! {
            div { class: "flex flex-col items-center gap-4 py-16 text-center",
                span { class: "text-error",
                    DrawSvg::<AlertCircle> { size: Size10 }
                }
                p { class: "text-gray-700", "{e}" }
                BackButton {}
            }
        },
        Some(Ok(None)) => rsx! {
            div { class: "flex flex-col items-center gap-4 py-16 text-center",
                p { class: "text-xl font-semibold text-gray-700", "Resep tidak ditemukan" }
                BackButton {}
            }
        },
        Some(Ok(Some(recipe))) => rsx! {
            RecipeDetail { recipe: recipe.clone() }
        },
    };

    rsx! {
        div { class: "min-h-full bg-gradient-to-br {palette.gradient}", {content} }
    }
}

#[component]
fn RecipeDetail(recipe: Recipe) -> Element {
    let palette = recipe.category.palette();
    let enable_edit = state_management::APP_CONFIG.read().enable_edit;

    rsx! {
        div { class: "sticky top-0 z-10 bg-white/80 backdrop-blur",
            div { class: "mx-auto flex max-w-4xl items-center justify-between px-4 py-2",
                BackButton {}
                div { class: "flex items-center gap-1",
                    ShareButton {
                        recipe_id: recipe.id.clone(),
                        category: recipe.category,
                        recipe_name: recipe.name.clone(),
                    }
                    if enable_edit {
                        EditButton { category: recipe.category, recipe_id: recipe.id.clone() }
                        DeleteButton { recipe_id: recipe.id.clone(), recipe_name: recipe.name.clone() }
                    }
                }
            }
        }
        div { class: "mx-auto max-w-4xl space-y-8 px-4 py-8",
            div { class: "overflow-hidden rounded-2xl bg-white shadow-lg",
                div { class: "relative aspect-video bg-gray-100",
                    LazyImage {
                        src: recipe.image_url.clone(),
                        alt: recipe.name.clone(),
                        class: CCStr::from("size-full object-cover"),
                    }
                    div { class: "absolute right-4 top-4 rounded-full bg-white/90",
                        FavoriteButton { recipe_id: recipe.id.clone() }
                    }
                }
                div { class: "space-y-4 p-6",
                    span { class: "rounded-full px-3 py-1 text-sm font-semibold {palette.badge}",
                        {recipe.category.label()}
                    }
                    h1 { class: "text-3xl font-black text-gray-900", "{recipe.name}" }
                    if let Some(description) = recipe.description.as_ref() {
                        p { class: "text-gray-600", "{description}" }
                    }
                    RecipeStats { recipe: recipe.clone() }
                    if recipe.has_rating() {
                        div { class: "flex items-center gap-3 rounded-xl p-4 {palette.soft_bg}",
                            StarRating { filled: recipe.rounded_rating() }
                            span { class: "text-lg font-bold", "{recipe.average_rating:.1}" }
                            span { class: "text-sm text-gray-600", "({recipe.review_count} ulasan)" }
                        }
                    }
                }
            }
            div { class: "rounded-2xl bg-white p-6 shadow-lg",
                h2 { class: "mb-4 text-2xl font-bold text-gray-900", "Bahan-bahan" }
                ul { class: "space-y-2",
                    for ingredient in recipe.ingredients.iter() {
                        li {
                            key: "{ingredient.id}",
                            class: "flex justify-between border-b border-gray-100 pb-2 last:border-0",
                            span { class: "text-gray-800", "{ingredient.name}" }
                            span { class: "font-medium {palette.accent_text}", "{ingredient.quantity}" }
                        }
                    }
                }
            }
            div { class: "rounded-2xl bg-white p-6 shadow-lg",
                h2 { class: "mb-4 text-2xl font-bold text-gray-900", "Langkah-langkah" }
                ol { class: "space-y-4",
                    for step in recipe.steps.iter() {
                        li { key: "{step.id}", class: "flex gap-4",
                            span { class: "flex size-8 flex-none items-center justify-center rounded-full font-bold text-white {palette.accent_bg}",
                                "{step.step_number}"
                            }
                            p { class: "pt-1 text-gray-700", "{step.instruction}" }
                        }
                    }
                }
            }
            ReviewSection { recipe_id: recipe.id.clone(), palette }
        }
    }
}

#[component]
fn RecipeStats(recipe: Recipe) -> Element {
    rsx! {
        div { class: "grid grid-cols-2 gap-4 md:grid-cols-4",
            StatTile { label: "Persiapan", value: recipe.prep_time.to_string(),
                DrawSvg::<ClockOutline> { size: Size6 }
            }
            StatTile { label: "Memasak", value: format!("{} menit", recipe.cook_time),
                DrawSvg::<ClockOutline> { size: Size6 }
            }
            StatTile { label: "Porsi", value: format!("{} orang", recipe.servings),
                DrawSvg::<AccountMultiple> { size: Size6 }
            }
            StatTile {
                label: "Kesulitan",
                value: recipe.difficulty.to_string(),
                value_class: recipe.difficulty.text_class(),
                DrawSvg::<ChefHat> { size: Size6 }
            }
        }
    }
}

#[component]
fn StatTile(
    label: &'static str,
    value: String,
    #[props(default = "text-gray-900")] value_class: &'static str,
    children: Element,
) -> Element {
    rsx! {
        div { class: "flex flex-col items-center gap-1 rounded-xl bg-gray-50 p-3 text-center",
            span { class: "text-gray-500", {children} }
            span { class: "text-xs uppercase text-gray-500", {label} }
            span { class: "font-semibold capitalize {value_class}", "{value}" }
        }
    }
}

#[component]
fn EditButton(category: Category, recipe_id: CCStr) -> Element {
    rsx! {
        button {
            class: "btn btn-circle btn-ghost",
            title: "Ubah resep",
            onclick: move |_| {
                navigator().push(crate::Route::RecipeEditView {
                    category,
                    recipe_id: recipe_id.clone(),
                });
            },
            DrawSvg::<Pencil> { size: Size5 }
        }
    }
}

#[component]
fn DeleteButton(recipe_id: CCStr, recipe_name: CCStr) -> Element {
    let catalog_service = state_management::use_catalog_service();
    let mut is_open = use_signal(|| false);
    let mut deleting = use_signal(|| false);

    let message = CCStr::from(format!(
        "Resep \"{recipe_name}\" akan dihapus beserta semua ulasannya."
    ));

    let on_confirm = move |_| {
        let recipe_id = recipe_id.clone();
        async move {
            deleting.set(true);
            match state_management::delete_recipe(catalog_service, recipe_id).await {
                Ok(recipe) => {
                    alert_success(format!("Resep \"{}\" dihapus", recipe.name));
                    is_open.set(false);
                    navigator().replace(crate::Route::RecipeListView {});
                }
                Err(e) => alert_error(format!("Gagal menghapus resep: {e}")),
            }
            deleting.set(false);
        }
    };

    rsx! {
        button {
            class: "btn btn-circle btn-ghost text-error",
            title: "Hapus resep",
            onclick: move |_| is_open.set(true),
            DrawSvg::<Delete> { size: Size5 }
        }
        ConfirmModal {
            is_open,
            title: "Hapus resep?",
            message,
            busy: deleting(),
            on_confirm,
        }
    }
}
