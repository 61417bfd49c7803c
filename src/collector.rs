use std::io::{BufRead, Write};

use log::error;

use crate::QuestError;

/// Split a comma-separated line into trimmed, non-empty ingredients.
///
/// Order and duplicates are kept. A line with no ingredient in it, blank or
/// made only of commas, is an error.
pub fn parse_ingredients(line: &str) -> Result<Vec<String>, QuestError> {
    let ingredients: Vec<String> = line
        .split(',')
        .map(str::trim)
        .filter(|ingredient| !ingredient.is_empty())
        .map(str::to_string)
        .collect();

    if ingredients.is_empty() {
        error!("No ingredients entered!");
        return Err(QuestError::EmptyInput);
    }
    Ok(ingredients)
}

/// Ingredients given as command-line arguments.
///
/// Each argument is a separate ingredient unless it contains commas itself,
/// so `egg milk` and `egg, milk` both give `["egg", "milk"]` while a quoted
/// `"black pepper"` stays one ingredient.
pub fn ingredients_from_args<S: AsRef<str>>(args: &[S]) -> Result<Vec<String>, QuestError> {
    let line = args
        .iter()
        .map(|arg| arg.as_ref())
        .collect::<Vec<_>>()
        .join(",");
    parse_ingredients(&line)
}

/// Ask for the ingredients the user already has and read a single line.
pub fn prompt_for_ingredients<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Vec<String>, QuestError> {
    writeln!(
        output,
        "Please enter the ingredients you have, with commas in between each ingredient."
    )?;
    write!(output, "Ingredients (comma-separated): ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    parse_ingredients(&line)
}
