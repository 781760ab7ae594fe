use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::utils::CCStr;

use super::models::{Category, NewReview, Recipe, RecipeDraft, Review};

static SAMPLE_CATALOG: &str = include_str!("../../assets/sample_catalog.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Resep {0} tidak ditemukan")]
    RecipeNotFound(CCStr),
    #[error("Katalog resep tidak valid: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Katalog resep tidak dapat dibaca: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    recipes: Vec<Recipe>,
    #[serde(default)]
    reviews: Vec<Review>,
}

/// In-memory recipes and their reviews, for the lifetime of the process
#[derive(Debug, Default)]
pub struct RecipeCatalog {
    recipes: BTreeMap<CCStr, Recipe>,
    reviews: HashMap<CCStr, Vec<Review>>,
    next_review_id: u64,
}

impl RecipeCatalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let CatalogFile { recipes, reviews } = serde_json::from_str(json)?;
        let next_review_id = reviews.iter().map(|r| r.id + 1).max().unwrap_or(1);
        let mut catalog = Self {
            recipes: recipes.into_iter().map(|r| (r.id.clone(), r)).collect(),
            reviews: HashMap::new(),
            next_review_id,
        };
        for review in reviews {
            if !catalog.recipes.contains_key(&review.recipe_id) {
                log::warn!(
                    "RecipeCatalog - dropping review {} of unknown recipe {}",
                    review.id,
                    review.recipe_id
                );
                continue;
            }
            if !(1..=NewReview::MAX_RATING).contains(&review.rating) {
                log::warn!(
                    "RecipeCatalog - dropping review {} with out of range rating {}",
                    review.id,
                    review.rating
                );
                continue;
            }
            catalog
                .reviews
                .entry(review.recipe_id.clone())
                .or_default()
                .push(review);
        }
        Ok(catalog)
    }

    /// The catalog shipped with the application
    pub fn sample() -> Self {
        match Self::from_json(SAMPLE_CATALOG) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("Built-in catalog is broken: {e}");
                Self::default()
            }
        }
    }

    pub fn list(&self, category: Option<Category>) -> Vec<Recipe> {
        self.recipes
            .values()
            .filter(|r| category.is_none_or(|c| r.category == c))
            .cloned()
            .collect()
    }

    pub fn get(&self, recipe_id: &str) -> Option<Recipe> {
        self.recipes.get(recipe_id).cloned()
    }

    pub fn delete(&mut self, recipe_id: &str) -> Result<Recipe, CatalogError> {
        let recipe = self
            .recipes
            .remove(recipe_id)
            .ok_or_else(|| CatalogError::RecipeNotFound(CCStr::from(recipe_id)))?;
        self.reviews.remove(recipe_id);
        Ok(recipe)
    }

    pub fn update(&mut self, recipe_id: &str, draft: RecipeDraft) -> Result<Recipe, CatalogError> {
        let recipe = self
            .recipes
            .get_mut(recipe_id)
            .ok_or_else(|| CatalogError::RecipeNotFound(CCStr::from(recipe_id)))?;
        draft.apply_to(recipe);
        Ok(recipe.clone())
    }

    /// Reviews of a recipe, newest first
    pub fn reviews(&self, recipe_id: &str) -> Result<Vec<Review>, CatalogError> {
        if !self.recipes.contains_key(recipe_id) {
            return Err(CatalogError::RecipeNotFound(CCStr::from(recipe_id)));
        }
        let mut reviews = self.reviews.get(recipe_id).cloned().unwrap_or_default();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(reviews)
    }

    /// Stores a review and refreshes the recipe's rating summary
    pub fn create_review(
        &mut self,
        recipe_id: &str,
        new_review: NewReview,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<Review, CatalogError> {
        let recipe = self
            .recipes
            .get_mut(recipe_id)
            .ok_or_else(|| CatalogError::RecipeNotFound(CCStr::from(recipe_id)))?;

        let review = Review {
            id: self.next_review_id,
            recipe_id: recipe.id.clone(),
            user_identifier: new_review.user_identifier().clone(),
            rating: new_review.rating(),
            comment: Some(new_review.comment().clone()),
            created_at: now,
        };
        self.next_review_id += 1;

        let total = recipe.average_rating * recipe.review_count as f64 + review.rating as f64;
        recipe.review_count += 1;
        recipe.average_rating = total / recipe.review_count as f64;

        self.reviews
            .entry(recipe.id.clone())
            .or_default()
            .push(review.clone());
        Ok(review)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::recipes::models::RecipeForm;

    const CATALOG: &str = r#"{
        "recipes": [
            {
                "id": "soto-ayam", "name": "Soto Ayam", "image_url": "img/soto.jpg",
                "category": "makanan", "prep_time": "30 menit", "cook_time": 60,
                "servings": 4, "difficulty": "sedang", "average_rating": 4.0, "review_count": 1
            },
            {
                "id": "wedang-jahe", "name": "Wedang Jahe", "image_url": "img/jahe.jpg",
                "category": "minuman", "prep_time": "5 menit", "cook_time": 10,
                "servings": 2, "difficulty": "mudah"
            }
        ],
        "reviews": [
            {
                "id": 7, "recipe_id": "soto-ayam", "user_identifier": "sari", "rating": 4,
                "comment": "Segar", "created_at": "2025-01-02T08:00:00Z"
            },
            {
                "id": 8, "recipe_id": "ghost", "user_identifier": "x", "rating": 1,
                "created_at": "2025-01-02T08:00:00Z"
            },
            {
                "id": 9, "recipe_id": "wedang-jahe", "user_identifier": "rina", "rating": 0,
                "created_at": "2025-01-03T08:00:00Z"
            },
            {
                "id": 10, "recipe_id": "wedang-jahe", "user_identifier": "andi", "rating": 9,
                "created_at": "2025-01-04T08:00:00Z"
            }
        ]
    }"#;

    #[test]
    fn lists_by_category() {
        let catalog = RecipeCatalog::from_json(CATALOG).unwrap();
        assert_eq!(catalog.list(None).len(), 2);
        let drinks = catalog.list(Some(Category::Minuman));
        assert_eq!(drinks.len(), 1);
        assert_eq!(drinks[0].id.as_ref(), "wedang-jahe");
    }

    #[test]
    fn orphan_reviews_are_dropped() {
        let catalog = RecipeCatalog::from_json(CATALOG).unwrap();
        assert_eq!(catalog.reviews("soto-ayam").unwrap().len(), 1);
        assert!(matches!(
            catalog.reviews("ghost"),
            Err(CatalogError::RecipeNotFound(_))
        ));
    }

    #[test]
    fn created_review_updates_summary() {
        let mut catalog = RecipeCatalog::from_json(CATALOG).unwrap();
        let now = chrono::Utc.with_ymd_and_hms(2025, 2, 1, 12, 0, 0).unwrap();
        let review = catalog
            .create_review("soto-ayam", NewReview::new("budi", 2, " kurang asin ").unwrap(), now)
            .unwrap();
        assert_eq!(review.id, 11);
        assert_eq!(review.comment.as_deref(), Some("kurang asin"));

        let recipe = catalog.get("soto-ayam").unwrap();
        assert_eq!(recipe.review_count, 2);
        assert!((recipe.average_rating - 3.0).abs() < f64::EPSILON);

        let reviews = catalog.reviews("soto-ayam").unwrap();
        assert_eq!(reviews[0].id, 11, "newest first");
    }

    #[test]
    fn out_of_range_ratings_are_dropped() {
        let catalog = RecipeCatalog::from_json(CATALOG).unwrap();
        assert!(catalog.reviews("wedang-jahe").unwrap().is_empty());
    }

    #[test]
    fn update_rewrites_editable_fields() {
        let mut catalog = RecipeCatalog::from_json(CATALOG).unwrap();
        let mut form = RecipeForm::from_recipe(&catalog.get("wedang-jahe").unwrap());
        form.name = "Wedang Jahe Sereh".to_owned();
        form.steps = "Rebus jahe\nSaring".to_owned();

        let updated = catalog
            .update("wedang-jahe", form.validate().unwrap())
            .unwrap();
        assert_eq!(updated.name.as_ref(), "Wedang Jahe Sereh");
        assert_eq!(updated.category, Category::Minuman);
        assert_eq!(catalog.get("wedang-jahe").unwrap().steps.len(), 2);

        assert!(matches!(
            catalog.update("ghost", form.validate().unwrap()),
            Err(CatalogError::RecipeNotFound(_))
        ));
    }

    #[test]
    fn delete_removes_recipe_and_reviews() {
        let mut catalog = RecipeCatalog::from_json(CATALOG).unwrap();
        catalog.delete("soto-ayam").unwrap();
        assert!(catalog.get("soto-ayam").is_none());
        assert!(matches!(
            catalog.delete("soto-ayam"),
            Err(CatalogError::RecipeNotFound(_))
        ));
    }

    #[test]
    fn sample_catalog_loads() {
        let catalog = RecipeCatalog::sample();
        assert!(!catalog.list(Some(Category::Makanan)).is_empty());
        assert!(!catalog.list(Some(Category::Minuman)).is_empty());
    }
}
