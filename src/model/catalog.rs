//! Gesture catalog - the ordered records behind the tutorial page

use crate::error::{CatalogError, NavError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Absolute http(s) URL, or a relative/rooted path without whitespace or scheme
static IMAGE_REF_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(https?://[^\s/]+\S*|[^\s:]+)$").unwrap());

/// One gesture as shown on a tutorial card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureDescription {
    pub name: String,
    pub description: String,
    #[serde(alias = "imageUrl")]
    pub image_url: String,
}

impl GestureDescription {
    pub fn new(name: &str, description: &str, image_url: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            image_url: image_url.to_string(),
        }
    }

    /// Check the record invariants: non-empty name, resolvable image reference
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }
        if !IMAGE_REF_REGEX.is_match(&self.image_url) {
            return Err(format!(
                "'{}' is not a resolvable image reference",
                self.image_url
            ));
        }
        Ok(())
    }
}

/// Built-in catalog contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogPreset {
    /// Smart board gestures: draw, erase, page turning
    #[default]
    Board,
    /// Hand gestures for zoom, scribble, erase and volume
    Hand,
}

/// Ordered, read-only sequence of gesture descriptions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureCatalog {
    gestures: Vec<GestureDescription>,
}

impl GestureCatalog {
    /// Build a catalog, validating every record
    pub fn new(gestures: Vec<GestureDescription>) -> Result<Self, CatalogError> {
        if gestures.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (index, gesture) in gestures.iter().enumerate() {
            gesture
                .validate()
                .map_err(|reason| CatalogError::InvalidGesture { index, reason })?;
        }
        Ok(Self { gestures })
    }

    pub fn preset(preset: CatalogPreset) -> Self {
        let gestures = match preset {
            CatalogPreset::Board => board_gestures(),
            CatalogPreset::Hand => hand_gestures(),
        };
        Self { gestures }
    }

    pub fn len(&self) -> usize {
        self.gestures.len()
    }

    /// Record at a position; an absent position is an invariant violation
    pub fn get(&self, index: usize) -> Result<&GestureDescription, NavError> {
        self.gestures
            .get(index)
            .ok_or(NavError::MissingCatalogEntry {
                index,
                len: self.gestures.len(),
            })
    }

    /// Records in declaration order, keyed by position
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (usize, &GestureDescription)> {
        self.gestures.iter().enumerate()
    }
}

impl Default for GestureCatalog {
    fn default() -> Self {
        Self::preset(CatalogPreset::Board)
    }
}

fn board_gestures() -> Vec<GestureDescription> {
    vec![
        GestureDescription::new(
            "Draw",
            "Hold your first finger upright to Draw.",
            "/images/draw.png",
        ),
        GestureDescription::new(
            "Erase",
            "Hold your first and second fingers upright to Erase.",
            "/images/erase.png",
        ),
        GestureDescription::new(
            "Next Page",
            "Hold your first, second and third fingers upright to go to Next Page.",
            "/images/next.png",
        ),
        GestureDescription::new(
            "Previous Page",
            "Keep your fist closed to go to Previous Page.",
            "/images/prev.png",
        ),
    ]
}

fn hand_gestures() -> Vec<GestureDescription> {
    vec![
        GestureDescription::new(
            "Zoom In",
            "Raise your index and middle fingers, keeping the others folded, to zoom in.",
            "/images/zoom_in.png",
        ),
        GestureDescription::new(
            "Zoom Out",
            "Extend your thumb and pinky with the other fingers folded to zoom out.",
            "/images/zoom_out.png",
        ),
        GestureDescription::new(
            "Scribble",
            "Raise only your index finger and move it to scribble on the board.",
            "/images/scribble.png",
        ),
        GestureDescription::new(
            "Erase",
            "Pinch your thumb and index finger together to erase under your fingertip.",
            "/images/pinch_erase.png",
        ),
        GestureDescription::new(
            "Volume",
            "Spread or close the gap between thumb and index finger to raise or lower the volume.",
            "/images/volume.png",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_preset_order() {
        let catalog = GestureCatalog::preset(CatalogPreset::Board);
        let names: Vec<&str> = catalog.iter().map(|(_, g)| g.name.as_str()).collect();
        assert_eq!(names, vec!["Draw", "Erase", "Next Page", "Previous Page"]);
    }

    #[test]
    fn test_presets_satisfy_invariants() {
        for preset in [CatalogPreset::Board, CatalogPreset::Hand] {
            let catalog = GestureCatalog::preset(preset);
            for (_, gesture) in catalog.iter() {
                assert!(gesture.validate().is_ok(), "{:?} failed", gesture);
            }
        }
    }

    #[test]
    fn test_get_out_of_range_is_missing_entry() {
        let catalog = GestureCatalog::default();
        assert_eq!(catalog.get(0).unwrap().name, "Draw");
        assert_eq!(
            catalog.get(4),
            Err(NavError::MissingCatalogEntry { index: 4, len: 4 })
        );
    }

    #[test]
    fn test_new_rejects_empty_name() {
        let result = GestureCatalog::new(vec![
            GestureDescription::new("Draw", "ok", "/images/draw.png"),
            GestureDescription::new("  ", "blank", "/images/blank.png"),
        ]);
        match result {
            Err(CatalogError::InvalidGesture { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected InvalidGesture, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_unresolvable_image() {
        let result = GestureCatalog::new(vec![GestureDescription::new(
            "Draw",
            "ok",
            "not a path",
        )]);
        assert!(matches!(result, Err(CatalogError::InvalidGesture { .. })));
    }

    #[test]
    fn test_new_rejects_empty_catalog() {
        assert!(matches!(GestureCatalog::new(vec![]), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_image_reference_forms() {
        for url in ["/images/draw.png", "images/draw.png", "https://cdn.example.com/a.png"] {
            assert!(GestureDescription::new("x", "", url).validate().is_ok(), "{}", url);
        }
        for url in ["", "has space.png", "http://"] {
            assert!(GestureDescription::new("x", "", url).validate().is_err(), "{}", url);
        }
    }
}
