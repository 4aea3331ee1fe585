use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use vendrec_catalog::WorkbookLayout;
use vendrec_extract::SheetLayout;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid profile: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Optional TOML profile carrying the knobs that differ per vendor and per
/// bookkeeper. Everything is optional; command-line flags win over file
/// values, file values win over the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Profile {
    pub threshold: Option<u8>,
    pub sheet: Option<String>,
    pub item_header: Option<String>,
    pub balance_header: Option<String>,
    pub unit_marker: Option<String>,
}

impl Profile {
    pub fn from_path(path: &Path) -> Result<Self, ProfileError> {
        Self::from_toml(&std::fs::read_to_string(path)?)
    }

    pub fn from_toml(text: &str) -> Result<Self, ProfileError> {
        Ok(toml::from_str(text)?)
    }

    pub fn workbook_layout(&self) -> WorkbookLayout {
        let mut layout = WorkbookLayout::default();
        if let Some(sheet) = &self.sheet {
            layout.sheet = sheet.clone();
        }
        if let Some(header) = &self.item_header {
            layout.item_header = header.clone();
        }
        if let Some(header) = &self.balance_header {
            layout.balance_header = header.clone();
        }
        layout
    }

    pub fn sheet_layout(&self) -> SheetLayout {
        let mut layout = SheetLayout::default();
        if let Some(marker) = &self.unit_marker {
            layout.unit_marker = marker.clone();
        }
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_profile_means_defaults() {
        let profile = Profile::from_toml("").unwrap();
        assert_eq!(profile.threshold, None);
        assert_eq!(profile.workbook_layout().sheet, "STOCK");
        assert_eq!(profile.sheet_layout().unit_marker, "CASE");
    }

    #[test]
    fn partial_profile_overrides_only_what_it_names() {
        let profile = Profile::from_toml(
            "threshold = 80\nsheet = \"INVENTORY\"\nunit_marker = \"CTN\"\n",
        )
        .unwrap();
        assert_eq!(profile.threshold, Some(80));
        let layout = profile.workbook_layout();
        assert_eq!(layout.sheet, "INVENTORY");
        assert_eq!(layout.item_header, "Item");
        assert_eq!(profile.sheet_layout().unit_marker, "CTN");
    }

    #[test]
    fn unknown_keys_are_rejected_gracefully() {
        // toml deserialization of unknown keys is permissive by default.
        let profile = Profile::from_toml("nonsense = 1\n").unwrap();
        assert_eq!(profile.threshold, None);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            Profile::from_toml("threshold = = 80"),
            Err(ProfileError::Parse(_))
        ));
    }
}
