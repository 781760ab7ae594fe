use crate::prelude::*;

use crate::components::svg::{ArrowLeft, DrawSvg, SvgSize::Size5};

/// Goes back in history, or to the recipe list when there is none
#[component]
pub fn BackButton(#[props(default = "Kembali")] label: &'static str) -> Element {
    let click_back = move |_| {
        let nav = navigator();
        if nav.can_go_back() {
            nav.go_back();
        } else {
            nav.replace(crate::Route::RecipeListView {});
        }
    };

    rsx! {
        button {
            class: "btn btn-ghost btn-sm gap-2",
            onclick: click_back,
            DrawSvg::<ArrowLeft> { size: Size5 }
            {label}
        }
    }
}

#[component]
pub fn Spinner(
    #[props(default = "border-blue-600")] color_class: &'static str,
    #[props(default)] label: Option<&'static str>,
) -> Element {
    rsx! {
        div { class: "flex flex-col items-center justify-center gap-4 py-12",
            div { class: "spinner size-12 rounded-full border-4 border-t-transparent {color_class}" }
            if let Some(label) = label {
                p { class: "text-gray-600", {label} }
            }
        }
    }
}

#[component]
pub fn Teleport(children: Element) -> Element {
    let id = use_hook(uuid::Uuid::new_v4);

    log::debug!("Teleport {id} Rendered");

    use_effect(move || {
        document::eval(&format!(
            r#"
            const div_to_tp = document.getElementById("{id}");
            const div_app = document.getElementById("app");
            div_app.append(div_to_tp);
        "#
        ));
    });

    use_drop(move || {
        log::debug!("Teleport {id} Dropped");
        document::eval(&format!(
            r#"
            const div_to_tp = document.getElementById("{id}");
            const div_orig_parent = document.getElementById("parent_{id}");
            if (div_to_tp && div_orig_parent) div_orig_parent.append(div_to_tp);
        "#
        ));
    });

    rsx! {
        div { id: "parent_{id}", class: "fixed",
            div { id: "{id}", {children} }
        }
    }
}
