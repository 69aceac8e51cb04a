// src/layout/palette.rs

use serde::{Deserialize, Serialize};

/// Eine Kategorie mit Schlüssel, Anzeigename und Grundfarbe (`#rrggbb`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDef {
    pub key: String,
    pub label: String,
    pub color: String,
}

impl CategoryDef {
    pub fn new(key: &str, label: &str, color: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            color: color.to_string(),
        }
    }
}

/// Feste Menge von Kategorien. Unbekannte Schlüssel fallen auf `fallback_key` zurück.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPalette {
    categories: Vec<CategoryDef>,
    fallback_key: String,
}

impl Default for CategoryPalette {
    fn default() -> Self {
        Self {
            categories: vec![
                CategoryDef::new("oncologie", "Oncologie", "#c44536"),
                CategoryDef::new("degeneratief", "Ouderdom & degeneratief", "#7b5e7b"),
                CategoryDef::new("spijsvertering", "Spijsvertering & organen", "#2d6a4f"),
                CategoryDef::new("trauma", "Trauma & extern", "#e09f3e"),
                CategoryDef::new("infectie", "Infectie & immuun", "#457b9d"),
                CategoryDef::new("voortplanting", "Voortplanting & hormonaal", "#d4a373"),
                CategoryDef::new("overig", "Overig", "#6c757d"),
            ],
            fallback_key: "overig".to_string(),
        }
    }
}

impl CategoryPalette {
    /// `fallback_key` muss einer der Kategorien entsprechen, sonst wird die letzte genommen.
    pub fn new(categories: Vec<CategoryDef>, fallback_key: &str) -> Self {
        let fallback_key = categories
            .iter()
            .find(|c| c.key == fallback_key)
            .or(categories.last())
            .map(|c| c.key.clone())
            .unwrap_or_else(|| fallback_key.to_string());
        Self {
            categories,
            fallback_key,
        }
    }

    pub fn categories(&self) -> &[CategoryDef] {
        &self.categories
    }

    pub fn fallback_key(&self) -> &str {
        &self.fallback_key
    }

    pub fn get(&self, key: &str) -> Option<&CategoryDef> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Normalisiert einen beliebigen Eingabeschlüssel auf einen Palettenschlüssel (ohne Groß-/Kleinschreibung).
    pub fn resolve_key(&self, raw: &str) -> &str {
        let raw = raw.trim();
        self.categories
            .iter()
            .find(|c| c.key.eq_ignore_ascii_case(raw))
            .map(|c| c.key.as_str())
            .unwrap_or(self.fallback_key.as_str())
    }

    /// Grundfarbe einer Kategorie; Grau, wenn weder Schlüssel noch Fallback existieren.
    pub fn color_of(&self, key: &str) -> &str {
        self.get(key)
            .or_else(|| self.get(&self.fallback_key))
            .map(|c| c.color.as_str())
            .unwrap_or("#6c757d")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_case_insensitive() {
        let palette = CategoryPalette::default();
        assert_eq!(palette.resolve_key("Oncologie"), "oncologie");
        assert_eq!(palette.resolve_key(" TRAUMA "), "trauma");
    }

    #[test]
    fn test_unknown_key_maps_to_fallback() {
        let palette = CategoryPalette::default();
        assert_eq!(palette.resolve_key("cardio"), "overig");
        assert_eq!(palette.resolve_key(""), "overig");
        assert_eq!(palette.color_of("cardio"), "#6c757d");
    }

    #[test]
    fn test_custom_palette_fallback() {
        let palette = CategoryPalette::new(
            vec![
                CategoryDef::new("a", "A", "#ff0000"),
                CategoryDef::new("b", "B", "#00ff00"),
            ],
            "missing",
        );
        assert_eq!(palette.fallback_key(), "b");
        assert_eq!(palette.resolve_key("x"), "b");
        assert_eq!(palette.color_of("a"), "#ff0000");
    }
}
