use serde::{Deserialize, Serialize};

use crate::utils::CCStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Makanan,
    Minuman,
}
impl Category {
    pub const ALL: [Category; 2] = [Category::Makanan, Category::Minuman];

    pub fn label(self) -> &'static str {
        match self {
            Self::Makanan => "Makanan",
            Self::Minuman => "Minuman",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Makanan => Palette {
                gradient: "from-blue-50 via-white to-indigo-50",
                badge: "text-blue-700 bg-blue-100",
                accent_text: "text-blue-600",
                accent_bg: "bg-blue-600 hover:bg-blue-700",
                soft_bg: "bg-blue-100",
                spinner: "border-blue-600",
                ring: "focus:ring-blue-500",
            },
            Self::Minuman => Palette {
                gradient: "from-green-50 via-white to-cyan-50",
                badge: "text-green-700 bg-green-100",
                accent_text: "text-green-600",
                accent_bg: "bg-green-600 hover:bg-green-700",
                soft_bg: "bg-green-100",
                spinner: "border-green-600",
                ring: "focus:ring-green-500",
            },
        }
    }
}
impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Makanan => "makanan",
            Self::Minuman => "minuman",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category {0:?}")]
pub struct ParseCategoryError(String);

impl core::str::FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "makanan" => Ok(Self::Makanan),
            "minuman" => Ok(Self::Minuman),
            _ => Err(ParseCategoryError(s.to_owned())),
        }
    }
}

/// Class names used to tint a view after its category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub gradient: &'static str,
    pub badge: &'static str,
    pub accent_text: &'static str,
    pub accent_bg: &'static str,
    pub soft_bg: &'static str,
    pub spinner: &'static str,
    pub ring: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Mudah,
    #[default]
    Sedang,
    Sulit,
}
impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Mudah, Difficulty::Sedang, Difficulty::Sulit];

    pub fn text_class(self) -> &'static str {
        match self {
            Self::Mudah => "text-green-600",
            Self::Sedang => "text-yellow-600",
            Self::Sulit => "text-red-600",
        }
    }
}
impl core::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Mudah => "mudah",
            Self::Sedang => "sedang",
            Self::Sulit => "sulit",
        })
    }
}

impl core::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mudah" => Ok(Self::Mudah),
            "sedang" => Ok(Self::Sedang),
            "sulit" => Ok(Self::Sulit),
            _ => Err(format!("unknown difficulty {s:?}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: u32,
    pub name: CCStr,
    pub quantity: CCStr,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub id: u32,
    pub step_number: u32,
    pub instruction: CCStr,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: CCStr,
    pub name: CCStr,
    #[serde(default)]
    pub description: Option<CCStr>,
    pub image_url: CCStr,
    #[serde(default)]
    pub category: Category,
    pub prep_time: CCStr,
    /// Minutes
    pub cook_time: u32,
    pub servings: u32,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<Step>,
}
impl Recipe {
    /// Number of filled stars out of five
    pub fn rounded_rating(&self) -> u8 {
        self.average_rating.round().clamp(0.0, 5.0) as u8
    }

    pub fn has_rating(&self) -> bool {
        self.average_rating > 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: u64,
    pub recipe_id: CCStr,
    pub user_identifier: CCStr,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<CCStr>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReviewError {
    #[error("Rating harus antara 1 dan 5, bukan {0}")]
    RatingOutOfRange(u8),
    #[error("Komentar tidak boleh kosong")]
    EmptyComment,
    #[error("Nama pengulas tidak boleh kosong")]
    EmptyAuthor,
}

/// A review ready to be submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    user_identifier: CCStr,
    rating: u8,
    comment: CCStr,
}
impl NewReview {
    pub const MAX_RATING: u8 = 5;

    pub fn new(user_identifier: &str, rating: u8, comment: &str) -> Result<Self, ReviewError> {
        let user_identifier = user_identifier.trim();
        if user_identifier.is_empty() {
            return Err(ReviewError::EmptyAuthor);
        }
        if !(1..=Self::MAX_RATING).contains(&rating) {
            return Err(ReviewError::RatingOutOfRange(rating));
        }
        let comment = comment.trim();
        if comment.is_empty() {
            return Err(ReviewError::EmptyComment);
        }
        Ok(Self {
            user_identifier: CCStr::from(user_identifier),
            rating,
            comment: CCStr::from(comment),
        })
    }

    pub fn user_identifier(&self) -> &CCStr {
        &self.user_identifier
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn comment(&self) -> &CCStr {
        &self.comment
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecipeFormError {
    #[error("Nama resep tidak boleh kosong")]
    EmptyName,
    #[error("URL gambar tidak boleh kosong")]
    EmptyImageUrl,
    #[error("Waktu persiapan tidak boleh kosong")]
    EmptyPrepTime,
    #[error("Waktu memasak harus berupa jumlah menit, bukan {0:?}")]
    InvalidCookTime(String),
    #[error("Porsi harus berupa angka lebih dari 0, bukan {0:?}")]
    InvalidServings(String),
    #[error("Bahan baris {0} harus berformat \"nama | jumlah\"")]
    InvalidIngredient(usize),
}

/// Raw text of the recipe edit form
///
/// Ingredients are one `name | quantity` per line, steps one instruction per line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecipeForm {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: String,
    pub difficulty: Difficulty,
    pub ingredients: String,
    pub steps: String,
}
impl RecipeForm {
    pub fn from_recipe(recipe: &Recipe) -> Self {
        let mut steps = recipe.steps.iter().collect::<Vec<_>>();
        steps.sort_by_key(|s| s.step_number);
        Self {
            name: recipe.name.to_string(),
            description: recipe
                .description
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            image_url: recipe.image_url.to_string(),
            prep_time: recipe.prep_time.to_string(),
            cook_time: recipe.cook_time.to_string(),
            servings: recipe.servings.to_string(),
            difficulty: recipe.difficulty,
            ingredients: recipe
                .ingredients
                .iter()
                .map(|i| format!("{} | {}", i.name, i.quantity))
                .collect::<Vec<_>>()
                .join("\n"),
            steps: steps
                .iter()
                .map(|s| s.instruction.as_ref())
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    pub fn validate(&self) -> Result<RecipeDraft, RecipeFormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(RecipeFormError::EmptyName);
        }
        let image_url = self.image_url.trim();
        if image_url.is_empty() {
            return Err(RecipeFormError::EmptyImageUrl);
        }
        let prep_time = self.prep_time.trim();
        if prep_time.is_empty() {
            return Err(RecipeFormError::EmptyPrepTime);
        }
        let cook_time = self
            .cook_time
            .trim()
            .parse::<u32>()
            .map_err(|_| RecipeFormError::InvalidCookTime(self.cook_time.clone()))?;
        let servings = self
            .servings
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|s| *s > 0)
            .ok_or_else(|| RecipeFormError::InvalidServings(self.servings.clone()))?;

        let ingredients = non_blank_lines(&self.ingredients)
            .enumerate()
            .map(|(i, line)| match line.split_once('|') {
                Some((name, quantity)) if !name.trim().is_empty() => {
                    Ok((CCStr::from(name.trim()), CCStr::from(quantity.trim())))
                }
                _ => Err(RecipeFormError::InvalidIngredient(i + 1)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        let steps = non_blank_lines(&self.steps).map(CCStr::from).collect();

        let description = self.description.trim();
        Ok(RecipeDraft {
            name: CCStr::from(name),
            description: (!description.is_empty()).then(|| CCStr::from(description)),
            image_url: CCStr::from(image_url),
            prep_time: CCStr::from(prep_time),
            cook_time,
            servings,
            difficulty: self.difficulty,
            ingredients,
            steps,
        })
    }
}

fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty())
}

/// Validated edits of a recipe
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDraft {
    name: CCStr,
    description: Option<CCStr>,
    image_url: CCStr,
    prep_time: CCStr,
    cook_time: u32,
    servings: u32,
    difficulty: Difficulty,
    ingredients: Vec<(CCStr, CCStr)>,
    steps: Vec<CCStr>,
}
impl RecipeDraft {
    /// Overwrites the editable fields, leaving id, category and ratings alone
    pub fn apply_to(self, recipe: &mut Recipe) {
        recipe.name = self.name;
        recipe.description = self.description;
        recipe.image_url = self.image_url;
        recipe.prep_time = self.prep_time;
        recipe.cook_time = self.cook_time;
        recipe.servings = self.servings;
        recipe.difficulty = self.difficulty;
        recipe.ingredients = self
            .ingredients
            .into_iter()
            .zip(1..)
            .map(|((name, quantity), id)| Ingredient { id, name, quantity })
            .collect();
        recipe.steps = self
            .steps
            .into_iter()
            .zip(1..)
            .map(|(instruction, n)| Step {
                id: n,
                step_number: n,
                instruction,
            })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_review_is_validated() {
        assert_eq!(
            NewReview::new("budi", 0, "enak"),
            Err(ReviewError::RatingOutOfRange(0))
        );
        assert_eq!(
            NewReview::new("budi", 6, "enak"),
            Err(ReviewError::RatingOutOfRange(6))
        );
        assert_eq!(
            NewReview::new("budi", 4, "   \n"),
            Err(ReviewError::EmptyComment)
        );
        assert_eq!(NewReview::new("  ", 4, "enak"), Err(ReviewError::EmptyAuthor));

        let review = NewReview::new(" budi ", 4, "  enak sekali ").unwrap();
        assert_eq!(review.user_identifier().as_ref(), "budi");
        assert_eq!(review.comment().as_ref(), "enak sekali");
        assert_eq!(review.rating(), 4);
    }

    fn nasi_goreng() -> Recipe {
        Recipe {
            id: CCStr::from("nasi-goreng"),
            name: CCStr::from("Nasi Goreng"),
            description: None,
            image_url: CCStr::from("img/nasi.jpg"),
            category: Category::Makanan,
            prep_time: CCStr::from("10 menit"),
            cook_time: 15,
            servings: 2,
            difficulty: Difficulty::Mudah,
            average_rating: 4.0,
            review_count: 3,
            ingredients: vec![Ingredient {
                id: 1,
                name: CCStr::from("Nasi putih"),
                quantity: CCStr::from("2 piring"),
            }],
            steps: vec![
                Step {
                    id: 2,
                    step_number: 2,
                    instruction: CCStr::from("Masukkan nasi"),
                },
                Step {
                    id: 1,
                    step_number: 1,
                    instruction: CCStr::from("Tumis bumbu"),
                },
            ],
        }
    }

    #[test]
    fn recipe_form_edits_keep_identity_and_ratings() {
        let mut recipe = nasi_goreng();
        let mut form = RecipeForm::from_recipe(&recipe);
        assert_eq!(form.ingredients, "Nasi putih | 2 piring");
        assert_eq!(form.steps, "Tumis bumbu\nMasukkan nasi");

        form.name = "  Nasi Goreng Kampung ".to_owned();
        form.servings = "3".to_owned();
        form.ingredients.push_str("\n\n Kecap manis | 2 sdm ");
        form.steps.push_str("\nSajikan");
        form.validate().unwrap().apply_to(&mut recipe);

        assert_eq!(recipe.id.as_ref(), "nasi-goreng");
        assert_eq!(recipe.name.as_ref(), "Nasi Goreng Kampung");
        assert_eq!(recipe.servings, 3);
        assert_eq!(recipe.review_count, 3);
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients[1].name.as_ref(), "Kecap manis");
        assert_eq!(recipe.ingredients[1].quantity.as_ref(), "2 sdm");
        assert_eq!(recipe.steps[2].step_number, 3);
        assert_eq!(recipe.steps[2].instruction.as_ref(), "Sajikan");
    }

    #[test]
    fn recipe_form_rejects_bad_input() {
        let recipe = nasi_goreng();
        let mut form = RecipeForm::from_recipe(&recipe);
        form.name = "  ".to_owned();
        assert_eq!(form.validate(), Err(RecipeFormError::EmptyName));

        let mut form = RecipeForm::from_recipe(&recipe);
        form.servings = "0".to_owned();
        assert_eq!(
            form.validate(),
            Err(RecipeFormError::InvalidServings("0".to_owned()))
        );

        let mut form = RecipeForm::from_recipe(&recipe);
        form.cook_time = "lama".to_owned();
        assert_eq!(
            form.validate(),
            Err(RecipeFormError::InvalidCookTime("lama".to_owned()))
        );

        let mut form = RecipeForm::from_recipe(&recipe);
        form.ingredients.push_str("\nGaram secukupnya");
        assert_eq!(form.validate(), Err(RecipeFormError::InvalidIngredient(2)));
    }

    #[test]
    fn category_parses_route_segments() {
        assert_eq!("minuman".parse::<Category>(), Ok(Category::Minuman));
        assert!("dessert".parse::<Category>().is_err());
        assert_eq!(Category::Makanan.to_string(), "makanan");
    }

    #[test]
    fn recipe_deserializes_with_defaults() {
        let recipe: Recipe = serde_json::from_str(
            r#"{
                "id": "es-cendol",
                "name": "Es Cendol",
                "image_url": "https://example.org/cendol.jpg",
                "category": "minuman",
                "prep_time": "20 menit",
                "cook_time": 15,
                "servings": 4,
                "difficulty": "mudah",
                "average_rating": 4.6
            }"#,
        )
        .unwrap();
        assert_eq!(recipe.category, Category::Minuman);
        assert_eq!(recipe.difficulty, Difficulty::Mudah);
        assert_eq!(recipe.rounded_rating(), 5);
        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.description, None);
    }
}
