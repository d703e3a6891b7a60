use crate::domain::ingredient::Ingredient;

/// Partition of a recipe's required ingredients into on-hand and to-buy.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IngredientMatch {
    pub used: Vec<Ingredient>,
    pub missing: Vec<Ingredient>,
}

/// Partition `required` against the available pool. A required ingredient is
/// satisfied by the first available entry with equal `(name, unit)` and at
/// least the required quantity; satisfied entries land in `used`, the rest in
/// `missing`, preserving the required order.
///
/// Available quantities are never decremented: the same pool entry can
/// satisfy any number of required ingredients, within this call and across
/// recipes. Each recipe is matched independently against the full pool; there
/// is deliberately no cross-recipe reservation.
pub fn match_ingredients(required: &[Ingredient], available: &[Ingredient]) -> IngredientMatch {
    let mut result = IngredientMatch::default();

    for needed in required {
        let satisfied = available
            .iter()
            .any(|on_hand| needed.same_kind(on_hand) && on_hand.quantity >= needed.quantity);

        if satisfied {
            result.used.push(needed.clone());
        } else {
            result.missing.push(needed.clone());
        }
    }

    result
}
