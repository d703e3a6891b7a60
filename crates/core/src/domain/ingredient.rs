use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A quantified ingredient. Two ingredients are the same kind iff both
/// `name` and `unit` match exactly; quantities are only additive between
/// same-kind ingredients.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

impl Ingredient {
    /// Construct a validated ingredient. Quantity must be a positive finite
    /// number, and name/unit must be non-blank.
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let unit = unit.into();

        if name.trim().is_empty() {
            return Err(DomainError::MalformedIngredient("name must not be empty".to_string()));
        }
        if unit.trim().is_empty() {
            return Err(DomainError::MalformedIngredient(format!(
                "unit must not be empty for `{name}`"
            )));
        }
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(DomainError::MalformedIngredient(format!(
                "quantity for `{name}` must be a positive number, got {quantity}"
            )));
        }

        Ok(Self { name, quantity, unit })
    }

    /// Same-kind comparison used for availability matching and shopping-list
    /// consolidation: exact `(name, unit)` equality, no normalization.
    pub fn same_kind(&self, other: &Ingredient) -> bool {
        self.name == other.name && self.unit == other.unit
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", format_quantity(self.quantity), self.unit, self.name)
    }
}

/// Render whole quantities without a trailing fraction (`2` rather than `2.0`).
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{quantity:.0}")
    } else {
        format!("{quantity}")
    }
}

#[cfg(test)]
mod tests {
    use super::Ingredient;
    use crate::errors::DomainError;

    #[test]
    fn constructs_well_formed_ingredient() {
        let ingredient = Ingredient::new("rice", 2.0, "cup").expect("valid ingredient");
        assert_eq!(ingredient.name, "rice");
        assert_eq!(ingredient.quantity, 2.0);
        assert_eq!(ingredient.unit, "cup");
    }

    #[test]
    fn rejects_non_positive_quantity() {
        let error = Ingredient::new("rice", 0.0, "cup").expect_err("zero quantity");
        assert!(matches!(error, DomainError::MalformedIngredient(_)));

        let error = Ingredient::new("rice", -1.5, "cup").expect_err("negative quantity");
        assert!(matches!(error, DomainError::MalformedIngredient(_)));
    }

    #[test]
    fn rejects_non_finite_quantity() {
        let error = Ingredient::new("rice", f64::NAN, "cup").expect_err("nan quantity");
        assert!(matches!(error, DomainError::MalformedIngredient(_)));
    }

    #[test]
    fn rejects_blank_name_and_unit() {
        assert!(Ingredient::new("  ", 1.0, "cup").is_err());
        assert!(Ingredient::new("rice", 1.0, "").is_err());
    }

    #[test]
    fn same_kind_requires_exact_name_and_unit() {
        let rice_cup = Ingredient::new("rice", 1.0, "cup").unwrap();
        let rice_gram = Ingredient::new("rice", 500.0, "gram").unwrap();
        let basmati_cup = Ingredient::new("Rice", 1.0, "cup").unwrap();

        assert!(rice_cup.same_kind(&Ingredient::new("rice", 3.0, "cup").unwrap()));
        assert!(!rice_cup.same_kind(&rice_gram));
        assert!(!rice_cup.same_kind(&basmati_cup));
    }

    #[test]
    fn displays_whole_quantities_without_fraction() {
        let rice = Ingredient::new("rice", 2.0, "cup").unwrap();
        assert_eq!(rice.to_string(), "2 cup rice");

        let dal = Ingredient::new("urad dal", 0.5, "cup").unwrap();
        assert_eq!(dal.to_string(), "0.5 cup urad dal");
    }
}
