// src/layout/metadata.rs

use super::{dataset::Dataset, palette::CategoryPalette};
use crate::math::geometry::polygon::{Polygon, PolygonProperties};
use std::collections::HashMap;

/// Darstellungsstufe einer Zelle nach ihrem Flächenanteil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellTier {
    Large,
    Medium,
    Small,
    Hidden,
}

impl CellTier {
    pub fn from_relative_area(relative: f64) -> Self {
        if relative > 0.05 {
            Self::Large
        } else if relative > 0.02 {
            Self::Medium
        } else if relative > 0.005 {
            Self::Small
        } else {
            Self::Hidden
        }
    }
}

/// Anzeigedaten einer Zelle in Eingabereihenfolge.
#[derive(Debug, Clone, PartialEq)]
pub struct CellMetadata {
    pub label: String,
    pub category: String,
    pub percentage: String,
    pub color: String,
    /// `None` für zusammengefallene Zellen
    pub tier: Option<CellTier>,
    /// Fläche der eingerückten Zelle relativ zur Diagrammfläche
    pub relative_area: f64,
}

/// `value / total` in Prozent; unter 1% mit einer Nachkommastelle.
/// Exakte Hälften werden aufgerundet (12.5 -> "13").
pub fn format_percentage(value: f64, total: f64) -> String {
    let fraction = value / total;
    let decimals = if fraction >= 0.01 { 0 } else { 1 };
    let scale = 10f64.powi(decimals);
    let rounded = (fraction * 100.0 * scale).round() / scale;
    format!("{:.*}", decimals as usize, rounded)
}

/// Hellt eine `#rrggbb`-Farbe pro Kanal um `amount` auf (negativ: abdunkeln).
/// Nicht parsebare Farben kommen unverändert zurück.
pub fn adjust_color(hex: &str, amount: i32) -> String {
    let Some(num) = hex
        .strip_prefix('#')
        .filter(|digits| digits.len() == 6)
        .and_then(|digits| u32::from_str_radix(digits, 16).ok())
    else {
        return hex.to_string();
    };

    let channel = |shift: u32| (((num >> shift) & 0xff) as i32 + amount).clamp(0, 255) as u32;
    let (r, g, b) = (channel(16), channel(8), channel(0));
    format!("#{:06x}", (r << 16) | (g << 8) | b)
}

/// Baut die Anzeigedaten; innerhalb einer Kategorie wechselt die Farbe reihum
/// zwischen dunkler, Grundfarbe und heller.
pub fn build_metadata(
    dataset: &Dataset,
    cells: &[Option<Polygon>],
    total_area: f64,
    palette: &CategoryPalette,
) -> Vec<CellMetadata> {
    let mut seen: HashMap<&str, i32> = HashMap::new();

    dataset
        .sites()
        .iter()
        .zip(cells)
        .map(|(site, cell)| {
            let k = seen.entry(site.category.as_str()).or_insert(0);
            let variation = (*k % 3 - 1) * 20;
            *k += 1;

            let relative_area = cell.as_ref().map_or(0.0, |c| c.area() / total_area);
            CellMetadata {
                label: site.label.clone(),
                category: site.category.clone(),
                percentage: format_percentage(site.value, dataset.total()),
                color: adjust_color(palette.color_of(&site.category), variation),
                tier: cell
                    .as_ref()
                    .map(|_| CellTier::from_relative_area(relative_area)),
                relative_area,
            }
        })
        .collect()
}
