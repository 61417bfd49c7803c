//! Find the highest-rated recipe for a list of ingredients you already have
//! and work out which of its ingredients you still need.

pub mod client;
pub mod collector;
pub mod config;
pub mod error;
pub mod model;
pub mod quest;
pub mod search;

pub use crate::client::ApiClient;
pub use crate::collector::{ingredients_from_args, parse_ingredients, prompt_for_ingredients};
pub use crate::config::{load_config, Settings};
pub use crate::error::QuestError;
pub use crate::model::{Recipe, RecipeId, RecipeSummary, SearchResults};
pub use crate::quest::{run, run_interactive, Outcome, Report};
pub use crate::search::{find_recipes, parse_recipe_list, search_recipes, SortMode};
