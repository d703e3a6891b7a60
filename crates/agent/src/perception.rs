//! Free-form ingredient parsing.
//!
//! Input lines look like `"2 cup rice"` or `"0.5 cup urad dal"`: quantity,
//! unit, then the (possibly multi-word) name. Anything that does not fit is
//! rejected as `MalformedIngredient` rather than silently skipped, so a bad
//! pantry line fails the request instead of quietly shrinking the pool.

use platewise_core::errors::DomainError;
use platewise_core::Ingredient;

pub fn parse_ingredients(raw: &[String]) -> Result<Vec<Ingredient>, DomainError> {
    raw.iter().map(|line| parse_ingredient(line)).collect()
}

pub fn parse_ingredient(raw: &str) -> Result<Ingredient, DomainError> {
    let mut parts = raw.split_whitespace();

    let quantity_token = parts
        .next()
        .ok_or_else(|| DomainError::MalformedIngredient("empty ingredient string".to_string()))?;
    let quantity: f64 = quantity_token.parse().map_err(|_| {
        DomainError::MalformedIngredient(format!(
            "`{raw}` must start with a numeric quantity, got `{quantity_token}`"
        ))
    })?;

    let unit = parts.next().ok_or_else(|| {
        DomainError::MalformedIngredient(format!("`{raw}` is missing a unit"))
    })?;

    let name = parts.collect::<Vec<_>>().join(" ");
    if name.is_empty() {
        return Err(DomainError::MalformedIngredient(format!(
            "`{raw}` is missing an ingredient name"
        )));
    }

    Ingredient::new(name, quantity, unit)
}
