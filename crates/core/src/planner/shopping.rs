use crate::domain::ingredient::Ingredient;
use crate::domain::meal::Meal;

/// Consolidate every missing ingredient across the given meals into one list,
/// keyed by `(name, unit)`. The first occurrence of a key fixes its position;
/// later occurrences add their quantity in place. Same name under different
/// units stays separate — there is no unit conversion.
pub fn consolidate(meals: &[&Meal]) -> Vec<Ingredient> {
    let mut list: Vec<Ingredient> = Vec::new();

    for meal in meals {
        for needed in &meal.missing_ingredients {
            match list.iter_mut().find(|entry| entry.same_kind(needed)) {
                Some(entry) => entry.quantity += needed.quantity,
                None => list.push(needed.clone()),
            }
        }
    }

    list
}
