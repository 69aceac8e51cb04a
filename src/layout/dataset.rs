// src/layout/dataset.rs

use super::{
    error::{LayoutError, LayoutResult},
    palette::CategoryPalette,
};
use serde::{Deserialize, Serialize};

/// Ein Eingabeeintrag, wie er von einem Import geliefert wird.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataItem {
    #[serde(alias = "name")]
    pub label: String,
    #[serde(alias = "n", alias = "count")]
    pub value: f64,
    #[serde(alias = "cat", default)]
    pub category: String,
}

impl DataItem {
    pub fn new(label: &str, value: f64, category: &str) -> Self {
        Self {
            label: label.to_string(),
            value,
            category: category.to_string(),
        }
    }
}

/// Validierter Eintrag mit aufgelöster Kategorie und Zielanteil.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub label: String,
    pub value: f64,
    /// Palettenschlüssel
    pub category: String,
    /// `value / total`, alle Anteile summieren sich zu 1
    pub target: f64,
}

/// Validierter, normalisierter Datensatz. Die Reihenfolge der Einträge bleibt erhalten.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    sites: Vec<Site>,
    /// Alle Palettenkategorien in Palettenreihenfolge, auch ohne Einträge
    categories: Vec<String>,
    total: f64,
}

impl Dataset {
    pub fn from_items(items: &[DataItem], palette: &CategoryPalette) -> LayoutResult<Self> {
        if items.is_empty() {
            return Err(LayoutError::EmptyDataset);
        }
        if let Some(bad) = items.iter().find(|i| !i.value.is_finite() || i.value < 0.0) {
            return Err(LayoutError::InvalidValue {
                label: bad.label.clone(),
                value: bad.value,
            });
        }

        let total: f64 = items.iter().map(|i| i.value).sum();
        if total <= 0.0 {
            return Err(LayoutError::ZeroTotal);
        }

        let sites: Vec<Site> = items
            .iter()
            .map(|item| Site {
                label: item.label.clone(),
                value: item.value,
                category: palette.resolve_key(&item.category).to_string(),
                target: item.value / total,
            })
            .collect();

        let mut categories: Vec<String> = palette
            .categories()
            .iter()
            .map(|c| c.key.clone())
            .collect();
        for site in &sites {
            if !categories.contains(&site.category) {
                categories.push(site.category.clone());
            }
        }

        Ok(Self {
            sites,
            categories,
            total,
        })
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn targets(&self) -> Vec<f64> {
        self.sites.iter().map(|s| s.target).collect()
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Alle Kategorien mit ihrer Zielmasse (0 ohne Einträge), absteigend sortiert;
    /// bei Gleichstand gilt die Palettenreihenfolge.
    pub fn ranked_categories(&self) -> Vec<(String, f64)> {
        let mut ranked: Vec<(String, f64)> = self
            .categories
            .iter()
            .map(|key| {
                let mass = self
                    .sites
                    .iter()
                    .filter(|s| s.category == *key)
                    .map(|s| s.target)
                    .sum();
                (key.clone(), mass)
            })
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

/// Beispieldatensatz (Todesursachen nach Kategorie).
pub fn default_items() -> Vec<DataItem> {
    [
        ("Kanker", 587.0, "oncologie"),
        ("Ouderdom", 310.0, "degeneratief"),
        ("Neurologisch", 163.0, "degeneratief"),
        ("Hart", 122.0, "degeneratief"),
        ("Maag-darm", 221.0, "spijsvertering"),
        ("Lever", 24.0, "spijsvertering"),
        ("Nier/Urine", 39.0, "spijsvertering"),
        ("Incident", 177.0, "trauma"),
        ("Gif", 20.0, "trauma"),
        ("Inwendige bloeding", 17.0, "trauma"),
        ("Besmetting", 13.0, "infectie"),
        ("Immuun", 8.0, "infectie"),
        ("Respiratoir", 28.0, "infectie"),
        ("Baarmoeder", 8.0, "voortplanting"),
        ("Endocrien", 27.0, "voortplanting"),
        ("Motorisch", 50.0, "overig"),
        ("Gedrag", 38.0, "overig"),
        ("Hematologisch", 8.0, "overig"),
        ("Oog", 5.0, "overig"),
        ("Huid", 4.0, "overig"),
        ("MO", 26.0, "overig"),
        ("Overig", 8.0, "overig"),
    ]
    .into_iter()
    .map(|(label, value, category)| DataItem::new(label, value, category))
    .collect()
}
