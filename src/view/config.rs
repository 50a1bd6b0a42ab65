//! Presentation settings handed to the view selector at construction

use super::error::ViewError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

/// An sRGB colour written as `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for HexColor {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ViewError::InvalidColor(s.to_string());
        let digits = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |hex: &str| u8::from_str_radix(hex, 16).map_err(|_| invalid());

        match digits.len() {
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let r = channel(&digits[0..1])?;
                let g = channel(&digits[1..2])?;
                let b = channel(&digits[2..3])?;
                Ok(Self::new(r * 17, g * 17, b * 17))
            }
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for HexColor {
    type Error = ViewError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Colours for the per-row favorite toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FavoriteColors {
    pub selected: HexColor,
    pub unselected: HexColor,
}

impl FavoriteColors {
    #[must_use]
    pub const fn for_state(&self, is_favorite: bool) -> HexColor {
        if is_favorite {
            self.selected
        } else {
            self.unselected
        }
    }
}

impl Default for FavoriteColors {
    fn default() -> Self {
        Self {
            selected: HexColor::new(0x38, 0x84, 0x15),
            unselected: HexColor::new(0x8D, 0xBD, 0x77),
        }
    }
}

/// View selector configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Rows per home-view page at startup
    pub page_size: NonZeroUsize,

    /// Page sizes a user may switch between; empty allows any size
    pub page_size_options: Vec<NonZeroUsize>,

    pub colors: FavoriteColors,
}

impl ViewConfig {
    /// Check that `size` is an offered page size
    ///
    /// # Errors
    ///
    /// Returns `ViewError::ZeroPageSize` for 0 and
    /// `ViewError::UnsupportedPageSize` for a size outside
    /// `page_size_options`.
    pub fn validate_page_size(&self, size: usize) -> Result<NonZeroUsize, ViewError> {
        let size_nz = NonZeroUsize::new(size).ok_or(ViewError::ZeroPageSize)?;

        if self.page_size_options.is_empty() || self.page_size_options.contains(&size_nz) {
            Ok(size_nz)
        } else {
            Err(ViewError::UnsupportedPageSize {
                size,
                options: self.page_size_options.clone(),
            })
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        let sizes = [10, 25, 50].map(|n| NonZeroUsize::new(n).unwrap_or(NonZeroUsize::MIN));
        Self {
            page_size: sizes[0],
            page_size_options: sizes.to_vec(),
            colors: FavoriteColors::default(),
        }
    }
}
