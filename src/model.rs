use std::fmt;

use log::{debug, error, warn};
use serde_json::{Map, Value};

use crate::client::ApiClient;
use crate::QuestError;

/// Opaque recipe identifier; the search endpoint may send it as a string or a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeId {
    Text(String),
    Number(serde_json::Number),
}

impl RecipeId {
    /// Read an identifier from a JSON string or number.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(id) => Some(RecipeId::Text(id.clone())),
            Value::Number(id) => Some(RecipeId::Number(id.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeId::Text(id) => f.write_str(id),
            RecipeId::Number(id) => write!(f, "{}", id),
        }
    }
}

impl From<&str> for RecipeId {
    fn from(id: &str) -> Self {
        RecipeId::Text(id.to_string())
    }
}

/// A search hit. Only the identifier matters to the quest; fields of the
/// wrong type are read as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeSummary {
    pub recipe_id: Option<RecipeId>,
    pub title: Option<String>,
}

impl RecipeSummary {
    pub fn from_json(value: &Value) -> Self {
        Self {
            recipe_id: value.get("recipe_id").and_then(RecipeId::from_json),
            title: value
                .get("title")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}

/// Decoded body of the search endpoint.
///
/// `recipes` is `None` when the response did not carry a recipe list at all,
/// which is also the state of the empty result returned on failure.
#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    pub count: Option<u64>,
    pub recipes: Option<Vec<RecipeSummary>>,
}

#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub f2f_url: String,
    pub ingredients: Vec<String>,
}

impl Recipe {
    pub fn new(id: RecipeId) -> Self {
        Self {
            id,
            title: String::new(),
            f2f_url: String::new(),
            ingredients: Vec::new(),
        }
    }

    /// Fetch the full recipe from the detail endpoint and fill in its title,
    /// URL and ingredients.
    ///
    /// `ingredients` is required; `title` and `f2f_url` are copied only when
    /// present. On error the recipe is left untouched.
    pub fn lookup(&mut self, client: &ApiClient, recipe_url: &str) -> Result<(), QuestError> {
        let body = client.request(recipe_url, &[("rId", self.id.to_string())])?;
        self.apply_detail(&body)
    }

    pub(crate) fn apply_detail(&mut self, body: &str) -> Result<(), QuestError> {
        let full_recipe: Value = serde_json::from_str(body).map_err(|e| {
            error!("JSON decoding failed!");
            QuestError::Decode(e)
        })?;
        let Value::Object(mut full_recipe) = full_recipe else {
            error!("Unexpected type (not object) of JSON for full recipe");
            return Err(QuestError::UnexpectedShape("full recipe"));
        };

        let Some(Value::Object(mut detail)) = full_recipe.remove("recipe") else {
            error!("Recipe response in unexpected format!");
            return Err(QuestError::MissingField("recipe"));
        };
        let Some(ingredients) = detail.remove("ingredients") else {
            error!("Recipe response in unexpected format!");
            return Err(QuestError::MissingField("ingredients"));
        };
        let ingredients: Vec<String> = serde_json::from_value(ingredients).map_err(|e| {
            error!("Recipe ingredients are not a list of strings");
            QuestError::Decode(e)
        })?;

        let title = optional_string(&mut detail, "title");
        let f2f_url = optional_string(&mut detail, "f2f_url");

        self.ingredients = ingredients;
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(f2f_url) = f2f_url {
            self.f2f_url = f2f_url;
        }
        debug!(
            "Recipe {} has {} ingredients",
            self.id,
            self.ingredients.len()
        );
        Ok(())
    }

    /// Ingredients of this recipe not covered by any stocked ingredient.
    ///
    /// A recipe ingredient counts as stocked when any stocked string is a
    /// case-sensitive substring of it, so "pepper" covers both "black pepper"
    /// and "green peppers". Recipe order is preserved.
    pub fn missing_ingredients<S: AsRef<str>>(&self, stocked: &[S]) -> Vec<String> {
        self.ingredients
            .iter()
            .filter(|needed| {
                !stocked
                    .iter()
                    .any(|have| needed.contains(have.as_ref()))
            })
            .cloned()
            .collect()
    }
}

fn optional_string(object: &mut Map<String, Value>, field: &str) -> Option<String> {
    match object.remove(field)? {
        Value::String(value) => Some(value),
        Value::Null => None,
        other => {
            warn!("Ignoring non-string `{}` in recipe: {}", field, other);
            None
        }
    }
}
