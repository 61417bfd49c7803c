use std::fmt;
use std::io::{BufRead, Write};

use log::{error, info};

use crate::client::ApiClient;
use crate::collector::prompt_for_ingredients;
use crate::config::Settings;
use crate::model::Recipe;
use crate::search::search_recipes;
use crate::QuestError;

/// How a quest ended when nothing went wrong
#[derive(Debug)]
pub enum Outcome {
    /// The search matched no recipe
    NoRecipes,
    /// The top recipe and what is missing for it
    Found(Report),
}

/// Final report for the highest-rated recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub title: String,
    pub url: String,
    pub missing: Vec<String>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recipe:  {}", self.title)?;
        writeln!(f, "URL:     {}", self.url)?;
        if self.missing.is_empty() {
            writeln!(f, "You have all the ingredients you need to cook this recipe!")
        } else {
            writeln!(f, "Additional ingredients you need to cook this recipe:")?;
            for ingredient in &self.missing {
                writeln!(f, "  {}", ingredient)?;
            }
            Ok(())
        }
    }
}

/// Prompt for ingredients on `input`, then run the quest.
pub fn run_interactive<R: BufRead, W: Write>(
    settings: &Settings,
    input: &mut R,
    output: &mut W,
) -> Result<Outcome, QuestError> {
    let api_key = settings.api_key()?;
    let stocked = prompt_for_ingredients(input, output)?;
    quest(settings, api_key, &stocked, output)
}

/// Search for the stocked ingredients, look up the highest-rated recipe and
/// report what is missing for it.
pub fn run<W: Write>(
    settings: &Settings,
    stocked: &[String],
    output: &mut W,
) -> Result<Outcome, QuestError> {
    let api_key = settings.api_key()?;
    quest(settings, api_key, stocked, output)
}

fn quest<W: Write>(
    settings: &Settings,
    api_key: String,
    stocked: &[String],
    output: &mut W,
) -> Result<Outcome, QuestError> {
    if stocked.is_empty() {
        return Err(QuestError::EmptyInput);
    }
    let client = ApiClient::new(api_key)?;

    writeln!(output, "\nSearching for recipes including the following ingredients:")?;
    writeln!(output, "  {}\n", stocked.join(", "))?;

    let results = search_recipes(&client, &settings.search_url, stocked, settings.sort)
        .map_err(|e| {
            error!("No response received from search!");
            e
        })?;
    let Some(recipes) = results.recipes else {
        error!("Unexpected format of search results!");
        return Err(QuestError::UnexpectedShape("search results"));
    };
    let Some(first) = recipes.first() else {
        writeln!(output, "No recipes found!")?;
        return Ok(Outcome::NoRecipes);
    };
    writeln!(
        output,
        "Found {} recipes, getting the highest-rated one...",
        recipes.len()
    )?;

    let Some(recipe_id) = first.recipe_id.clone() else {
        error!("Unable to find recipe_id in recipe!");
        return Err(QuestError::MissingField("recipe_id"));
    };
    info!(
        "Looking up recipe {} ({})",
        recipe_id,
        first.title.as_deref().unwrap_or("untitled")
    );

    let mut recipe = Recipe::new(recipe_id);
    if let Err(e) = recipe.lookup(&client, &settings.recipe_url) {
        error!("Unable to find ingredients for recipe!");
        return Err(e);
    }

    let report = Report {
        missing: recipe.missing_ingredients(stocked),
        title: recipe.title,
        url: recipe.f2f_url,
    };
    write!(output, "\n{}", report)?;
    Ok(Outcome::Found(report))
}
