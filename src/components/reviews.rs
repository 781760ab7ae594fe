use crate::prelude::*;

use crate::{
    components::{
        misc::Spinner,
        rating::{StarRating, StarRatingInput},
        svg::{DrawSvg, Send, SvgSize::Size5},
    },
    recipes::prelude::{NewReview, Palette, Review},
    utils::{format_date, CCStr},
};

/// Reviews of a recipe with a toggleable form to write a new one
#[component]
pub fn ReviewSection(recipe_id: ReadOnlySignal<CCStr>, palette: Palette) -> Element {
    let catalog_service = state_management::use_catalog_service();
    let reviews = helper_hooks::use_resource_reviews(recipe_id);
    let mut show_form = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    let review_count = reviews.lrmap_ok(|r| r.len()).unwrap_or(0);

    let on_submit = move |(rating, comment): (u8, CCStr)| async move {
        let username = state_management::APP_CONFIG.peek().username.clone();
        let review = match NewReview::new(&username, rating, &comment) {
            Ok(review) => review,
            Err(e) => {
                alert_warn(e.to_string());
                return;
            }
        };
        submitting.set(true);
        match state_management::create_review(catalog_service, recipe_id(), review).await {
            Ok(_) => {
                alert_success("Ulasan terkirim, terima kasih!");
                show_form.set(false);
            }
            Err(e) => alert_error(e),
        }
        submitting.set(false);
    };

    rsx! {
        div { class: "rounded-2xl bg-white p-6 shadow-lg",
            div { class: "mb-6 flex items-center justify-between",
                h2 { class: "text-2xl font-bold text-gray-900", "Ulasan ({review_count})" }
                button {
                    class: "btn text-white {palette.accent_bg}",
                    onclick: move |_| show_form.toggle(),
                    if show_form() {
                        "Batal"
                    } else {
                        "Tulis Ulasan"
                    }
                }
            }
            if show_form() {
                div { class: "mb-6",
                    ReviewForm {
                        palette,
                        submitting: submitting(),
                        on_submit,
                    }
                }
            }
            ReviewList { reviews, palette }
        }
    }
}

#[component]
pub fn ReviewForm(
    palette: Palette,
    submitting: bool,
    on_submit: EventHandler<(u8, CCStr)>,
) -> Element {
    let rating = use_signal(|| NewReview::MAX_RATING);
    let mut comment = use_signal(String::new);

    let can_submit = !submitting && !comment.read().trim().is_empty();

    rsx! {
        form {
            class: "space-y-4 rounded-xl bg-gray-50 p-4",
            onsubmit: move |event| {
                event.prevent_default();
                on_submit.call((rating(), CCStr::from(comment.read().trim())));
                let mut rating = rating;
                rating.set(NewReview::MAX_RATING);
                comment.set(String::new());
            },
            div {
                label { class: "mb-2 block text-sm font-medium text-gray-700", "Rating" }
                StarRatingInput { rating, disabled: submitting }
            }
            div {
                label { class: "mb-2 block text-sm font-medium text-gray-700", "Komentar" }
                textarea {
                    class: "textarea textarea-bordered w-full {palette.ring}",
                    rows: 4,
                    placeholder: "Bagikan pengalaman Anda memasak resep ini...",
                    disabled: submitting,
                    value: "{comment}",
                    oninput: move |event| comment.set(event.value()),
                }
            }
            button {
                r#type: "submit",
                class: "btn w-full text-white {palette.accent_bg}",
                disabled: !can_submit,
                DrawSvg::<Send> { size: Size5 }
                if submitting {
                    "Mengirim..."
                } else {
                    "Kirim Ulasan"
                }
            }
        }
    }
}

#[component]
pub fn ReviewList(reviews: FResource<Vec<Review>>, palette: Palette) -> Element {
    let content = match &*reviews.read() {
        None => rsx! {
            Spinner { color_class: palette.spinner }
        },
        Some(Err(e)) => rsx! {
            p { class: "py-8 text-center text-error", "{e}" }
        },
        Some(Ok(reviews)) if reviews.is_empty() => rsx! {
            div { class: "py-8 text-center text-gray-500",
                p { "Belum ada ulasan untuk resep ini." }
                p { class: "mt-1 text-sm", "Jadilah yang pertama memberikan ulasan!" }
            }
        },
        Some(Ok(reviews)) => rsx! {
            div { class: "space-y-4",
                for review in reviews.iter() {
                    ReviewItem { key: "{review.id}", review: review.clone() }
                }
            }
        },
    };
    content
}

#[component]
fn ReviewItem(review: Review) -> Element {
    let date = format_date(review.created_at);
    rsx! {
        div { class: "border-b border-gray-100 pb-4 last:border-0",
            div { class: "mb-2 flex items-center justify-between",
                span { class: "font-semibold text-gray-900", "{review.user_identifier}" }
                span { class: "text-sm text-gray-500", "{date}" }
            }
            StarRating { filled: review.rating }
            if let Some(comment) = review.comment.as_ref() {
                p { class: "mt-2 text-gray-700", "{comment}" }
            }
        }
    }
}
