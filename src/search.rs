use log::{debug, error};
use serde::Deserialize;
use serde_json::Value;

use crate::client::ApiClient;
use crate::model::{RecipeSummary, SearchResults};
use crate::QuestError;

/// Order in which the search endpoint ranks its results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum SortMode {
    /// Highest rated first
    #[default]
    #[serde(rename = "r", alias = "rating")]
    Rating,
    /// Trending first. The service has been seen answering every trendiness
    /// search with `{"count": 0, "recipes": []}`.
    #[serde(rename = "t", alias = "trendiness")]
    Trendiness,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Rating => "r",
            SortMode::Trendiness => "t",
        }
    }
}

/// Search for recipes that use the given ingredients (first page only).
///
/// Failures are logged and produce an empty [`SearchResults`].
pub fn find_recipes<S: AsRef<str>>(
    client: &ApiClient,
    search_url: &str,
    ingredients: &[S],
    sort: SortMode,
) -> SearchResults {
    search_recipes(client, search_url, ingredients, sort).unwrap_or_else(|e| {
        error!("No response received from search! ({})", e);
        SearchResults::default()
    })
}

/// Like [`find_recipes`], but a request that never produced a body is
/// returned as an error. A body of the wrong shape still yields an empty
/// result.
pub fn search_recipes<S: AsRef<str>>(
    client: &ApiClient,
    search_url: &str,
    ingredients: &[S],
    sort: SortMode,
) -> Result<SearchResults, QuestError> {
    let query = ingredients
        .iter()
        .map(|i| i.as_ref())
        .collect::<Vec<_>>()
        .join(",");
    let params = [
        ("q", query),
        ("sort", sort.as_str().to_string()),
        ("page", 1.to_string()),
    ];

    let body = client.request(search_url, &params)?;
    Ok(parse_recipe_list(&body))
}

/// Decode a search response body, falling back to an empty result when it is
/// not a JSON object with a `recipes` array.
///
/// Only the array itself is required. Entries and `count` of an unexpected
/// type are read leniently instead of discarding the whole result.
pub fn parse_recipe_list(body: &str) -> SearchResults {
    let recipes: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            error!("JSON decoding failed! ({})", e);
            return SearchResults::default();
        }
    };
    let Value::Object(recipes) = recipes else {
        error!("Unexpected type (not object) of JSON for recipes list");
        return SearchResults::default();
    };

    let count = recipes.get("count").and_then(Value::as_u64);
    let summaries = match recipes.get("recipes") {
        Some(Value::Array(hits)) => Some(
            hits.iter()
                .map(RecipeSummary::from_json)
                .collect::<Vec<_>>(),
        ),
        Some(other) => {
            error!("Unexpected type of `recipes` in search results: {}", other);
            None
        }
        None => {
            error!("Search results have no `recipes` list");
            None
        }
    };
    debug!("Search reported {:?} recipes", count);

    SearchResults {
        count,
        recipes: summaries,
    }
}
