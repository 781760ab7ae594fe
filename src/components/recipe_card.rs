use crate::prelude::*;

use crate::{
    components::{
        lazy_image::LazyImage,
        rating::StarRating,
        svg::{ClockOutline, DrawSvg, SvgSize::Size4},
    },
    recipes::prelude::Recipe,
    utils::CCStr,
};

#[component]
pub fn RecipeCard(recipe: Recipe) -> Element {
    let palette = recipe.category.palette();
    let route = crate::Route::RecipeDetailView {
        category: recipe.category,
        recipe_id: recipe.id.clone(),
    };

    rsx! {
        Link {
            to: route,
            class: "group block overflow-hidden rounded-2xl bg-white shadow-md transition-shadow hover:shadow-xl",
            div { class: "aspect-[4/3] overflow-hidden bg-gray-100",
                LazyImage {
                    src: recipe.image_url.clone(),
                    alt: recipe.name.clone(),
                    class: CCStr::from("size-full object-cover group-hover:scale-105"),
                }
            }
            div { class: "space-y-2 p-4",
                span { class: "rounded-full px-2 py-0.5 text-xs font-semibold {palette.badge}",
                    {recipe.category.label()}
                }
                h3 { class: "text-lg font-bold text-gray-900", "{recipe.name}" }
                if let Some(description) = recipe.description.as_ref() {
                    p { class: "line-clamp-2 text-sm text-gray-600", "{description}" }
                }
                div { class: "flex items-center justify-between text-sm text-gray-500",
                    span { class: "flex items-center gap-1",
                        DrawSvg::<ClockOutline> { size: Size4 }
                        "{recipe.prep_time}"
                    }
                    if recipe.has_rating() {
                        span { class: "flex items-center gap-1",
                            StarRating { filled: recipe.rounded_rating(), size: Size4 }
                            "({recipe.review_count})"
                        }
                    }
                }
            }
        }
    }
}
