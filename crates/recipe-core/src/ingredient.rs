//! Ingredient Extraction
//!
//! Turns a recipe's freeform ingredient text into selectable choices, using
//! the backend's essential-ingredient map to decide what is pre-selected.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Normalized form used as the ingredient / shopping item key
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Lowercased ingredient name -> "is essential"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EssentialMap(HashMap<String, bool>);

impl EssentialMap {
    /// Unknown ingredients are essential
    pub fn is_essential(&self, line: &str) -> bool {
        self.0.get(&normalize_name(line)).copied().unwrap_or(true)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, bool)> for EssentialMap {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One selectable ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientChoice {
    /// The line exactly as the recipe author wrote it
    pub display_text: String,
    pub is_essential: bool,
}

/// One choice per non-blank line, in recipe order. Duplicates pass through.
pub fn extract_ingredients(text: &str, essentials: &EssentialMap) -> Vec<IngredientChoice> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| IngredientChoice {
            display_text: line.to_string(),
            is_essential: essentials.is_essential(line),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn essentials(pairs: &[(&str, bool)]) -> EssentialMap {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_missing_key_defaults_to_essential() {
        let map = essentials(&[("salt", false)]);
        let choices = extract_ingredients("Salt\nPepper", &map);
        assert_eq!(
            choices,
            vec![
                IngredientChoice { display_text: "Salt".to_string(), is_essential: false },
                IngredientChoice { display_text: "Pepper".to_string(), is_essential: true },
            ]
        );
    }

    #[test]
    fn test_lookup_trims_and_lowercases_but_keeps_display_text() {
        let map = essentials(&[("olive oil", false)]);
        let choices = extract_ingredients("  Olive Oil  \r\nFlour", &map);
        assert_eq!(choices[0].display_text, "  Olive Oil  ");
        assert!(!choices[0].is_essential);
        assert_eq!(choices[1].display_text, "Flour");
    }

    #[test]
    fn test_blank_lines_skipped_and_duplicates_kept() {
        let choices = extract_ingredients("Egg\n\n   \nEgg\n", &EssentialMap::default());
        assert_eq!(choices.len(), 2);
        assert!(choices.iter().all(|c| c.display_text == "Egg" && c.is_essential));
    }

    #[test]
    fn test_map_deserializes_from_backend_json() {
        let map: EssentialMap = serde_json::from_str(r#"{"salt": false, "flour": true}"#).unwrap();
        assert_eq!(map.len(), 2);
        assert!(!map.is_essential("SALT"));
        assert!(map.is_essential("flour"));
    }
}
