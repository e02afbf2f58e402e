//! Gesture catalog loading
//!
//! Catalog files hold either a bare list of gestures or an object with a
//! `gestures` list. Field names accept both `image_url` and `imageUrl`.

use crate::config::CatalogSource;
use crate::error::CatalogError;
use crate::model::{GestureCatalog, GestureDescription};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<GestureDescription>),
    Object { gestures: Vec<GestureDescription> },
}

impl CatalogFile {
    fn into_gestures(self) -> Vec<GestureDescription> {
        match self {
            CatalogFile::List(gestures) => gestures,
            CatalogFile::Object { gestures } => gestures,
        }
    }
}

/// Resolve the configured catalog source
pub fn load_catalog(source: &CatalogSource) -> Result<GestureCatalog, CatalogError> {
    match source {
        CatalogSource::Preset(preset) => Ok(GestureCatalog::preset(*preset)),
        CatalogSource::Path(path) => load_catalog_file(path),
    }
}

/// Read and validate a JSON or YAML catalog file
pub fn load_catalog_file(path: &Path) -> Result<GestureCatalog, CatalogError> {
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_lowercase();

    parse_catalog(&contents, &extension)
}

/// Parse catalog text in the given format (`json`, `yaml` or `yml`)
pub fn parse_catalog(contents: &str, format: &str) -> Result<GestureCatalog, CatalogError> {
    let file: CatalogFile = match format {
        "json" => serde_json::from_str(contents)?,
        "yaml" | "yml" => serde_yaml::from_str(contents)?,
        other => return Err(CatalogError::UnsupportedFormat(other.to_string())),
    };

    let catalog = GestureCatalog::new(file.into_gestures())?;
    tracing::info!(gestures = catalog.len(), format, "loaded gesture catalog");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CatalogPreset;

    #[test]
    fn test_parse_json_list_with_camel_case_image() {
        let json = r#"[
            { "name": "Draw", "description": "Index finger up", "imageUrl": "/images/draw.png" },
            { "name": "Erase", "description": "Two fingers up", "image_url": "/images/erase.png" }
        ]"#;
        let catalog = parse_catalog(json, "json").unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().image_url, "/images/draw.png");
        assert_eq!(catalog.get(1).unwrap().name, "Erase");
    }

    #[test]
    fn test_parse_yaml_object() {
        let yaml = "gestures:\n  - name: Zoom In\n    description: Two fingers up\n    image_url: /images/zoom_in.png\n";
        let catalog = parse_catalog(yaml, "yaml").unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().name, "Zoom In");
    }

    #[test]
    fn test_parse_rejects_invalid_record() {
        let json = r#"[{ "name": "", "description": "x", "image_url": "/a.png" }]"#;
        assert!(matches!(
            parse_catalog(json, "json"),
            Err(CatalogError::InvalidGesture { index: 0, .. })
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        assert!(matches!(
            parse_catalog("[]", "toml"),
            Err(CatalogError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_load_preset_source() {
        let catalog = load_catalog(&CatalogSource::Preset(CatalogPreset::Hand)).unwrap();
        assert_eq!(catalog, GestureCatalog::preset(CatalogPreset::Hand));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let source = CatalogSource::Path("/nonexistent/gestures.json".into());
        assert!(matches!(load_catalog(&source), Err(CatalogError::Read { .. })));
    }
}
