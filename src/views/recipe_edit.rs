use crate::prelude::*;

use crate::{
    components::misc::{BackButton, Spinner},
    recipes::prelude::{Category, Difficulty, Recipe, RecipeForm},
    utils::CCStr,
};

#[component]
pub fn RecipeEditView(category: Category, recipe_id: ReadOnlySignal<CCStr>) -> Element {
    log::debug!("RecipeEditView Rendered");

    let recipe = helper_hooks::use_resource_recipe(recipe_id);
    let palette = category.palette();
    let enable_edit = state_management::APP_CONFIG.read().enable_edit;

    use_drop(|| log::debug!("RecipeEditView Dropped"));

    let content = if !enable_edit {
        rsx! {
            div { class: "flex flex-col items-center gap-4 py-16 text-center",
                p { class: "text-xl font-semibold text-gray-700", "Penyuntingan resep tidak diaktifkan" }
                BackButton {}
            }
        }
    } else {
        match &*recipe.read() {
            None => rsx! {
                Spinner { color_class: palette.spinner, label: "Memuat resep..." }
            },
            Some(Err(e)) => rsx! {
                div { class: "flex flex-col items-center gap-4 py-16 text-center",
                    p { class: "text-error", "{e}" }
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
                RecipeEditForm { recipe: recipe.clone() }
            },
        }
    };

    rsx! {
        div { class: "min-h-full bg-gradient-to-br {palette.gradient}", {content} }
    }
}

#[component]
fn RecipeEditForm(recipe: Recipe) -> Element {
    let catalog_service = state_management::use_catalog_service();
    let palette = recipe.category.palette();
    let recipe_id = recipe.id.clone();

    let mut form = use_signal(|| RecipeForm::from_recipe(&recipe));
    let mut form_error = use_signal(|| None::<CCStr>);
    let mut saving = use_signal(|| false);

    let save = move |event: FormEvent| {
        event.prevent_default();
        let recipe_id = recipe_id.clone();
        async move {
            let validated = form.read().validate();
            let draft = match validated {
                Ok(draft) => draft,
                Err(e) => {
                    form_error.set(Some(CCStr::from(e.to_string())));
                    return;
                }
            };
            form_error.set(None);
            saving.set(true);
            match state_management::update_recipe(catalog_service, recipe_id, draft).await {
                Ok(recipe) => {
                    alert_success(format!("Resep \"{}\" disimpan", recipe.name));
                    navigator().replace(crate::Route::RecipeDetailView {
                        category: recipe.category,
                        recipe_id: recipe.id,
                    });
                }
                Err(e) => alert_error(format!("Gagal menyimpan resep: {e}")),
            }
            saving.set(false);
        }
    };

    rsx! {
        div { class: "mx-auto max-w-3xl px-4 py-8",
            div { class: "mb-4 flex items-center justify-between",
                BackButton { label: "Batal" }
                h1 { class: "text-2xl font-black text-gray-900", "Ubah Resep" }
            }
            form {
                class: "space-y-4 rounded-2xl bg-white p-6 shadow-lg",
                onsubmit: save,
                FormField { label: "Nama resep",
                    input {
                        class: "input input-bordered w-full",
                        value: "{form.read().name}",
                        oninput: move |event| form.write().name = event.value(),
                    }
                }
                FormField { label: "Deskripsi",
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        rows: 3,
                        value: "{form.read().description}",
                        oninput: move |event| form.write().description = event.value(),
                    }
                }
                FormField { label: "URL gambar",
                    input {
                        class: "input input-bordered w-full",
                        r#type: "url",
                        value: "{form.read().image_url}",
                        oninput: move |event| form.write().image_url = event.value(),
                    }
                }
                div { class: "grid grid-cols-2 gap-4 md:grid-cols-4",
                    FormField { label: "Persiapan",
                        input {
                            class: "input input-bordered w-full",
                            value: "{form.read().prep_time}",
                            oninput: move |event| form.write().prep_time = event.value(),
                        }
                    }
                    FormField { label: "Memasak (menit)",
                        input {
                            class: "input input-bordered w-full",
                            r#type: "number",
                            min: "0",
                            value: "{form.read().cook_time}",
                            oninput: move |event| form.write().cook_time = event.value(),
                        }
                    }
                    FormField { label: "Porsi",
                        input {
                            class: "input input-bordered w-full",
                            r#type: "number",
                            min: "1",
                            value: "{form.read().servings}",
                            oninput: move |event| form.write().servings = event.value(),
                        }
                    }
                    FormField { label: "Kesulitan",
                        select {
                            class: "select select-bordered w-full capitalize",
                            onchange: move |event| {
                                if let Ok(difficulty) = event.value().parse::<Difficulty>() {
                                    form.write().difficulty = difficulty;
                                }
                            },
                            for difficulty in Difficulty::ALL {
                                option {
                                    value: "{difficulty}",
                                    selected: form.read().difficulty == difficulty,
                                    "{difficulty}"
                                }
                            }
                        }
                    }
                }
                FormField { label: "Bahan-bahan (satu per baris: nama | jumlah)",
                    textarea {
                        class: "textarea textarea-bordered w-full font-mono",
                        rows: 6,
                        value: "{form.read().ingredients}",
                        oninput: move |event| form.write().ingredients = event.value(),
                    }
                }
                FormField { label: "Langkah-langkah (satu per baris)",
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        rows: 6,
                        value: "{form.read().steps}",
                        oninput: move |event| form.write().steps = event.value(),
                    }
                }
                if let Some(e) = form_error() {
                    p { class: "text-sm text-error", "{e}" }
                }
                button {
                    r#type: "submit",
                    class: "btn w-full text-white {palette.accent_bg}",
                    disabled: saving(),
                    if saving() {
                        "Menyimpan..."
                    } else {
                        "Simpan Resep"
                    }
                }
            }
        }
    }
}

#[component]
fn FormField(label: &'static str, children: Element) -> Element {
    rsx! {
        label { class: "block",
            span { class: "mb-1 block text-sm font-medium text-gray-700", {label} }
            {children}
        }
    }
}
