//! # QR Symbol Encoding
//!
//! Thin layer over the `qrcode` crate: option letters to error-correction
//! levels, version fitting, and the bordered module grid the custom
//! renderers walk.
//!
//! ## Version Fitting
//!
//! The requested version is a lower bound. Starting there, each larger
//! version is tried until the payload fits:
//!
//! ```text
//! requested = 1, payload needs v3  →  v1 (too long) → v2 (too long) → v3 ✓
//! requested = 5, payload needs v3  →  v5 ✓
//! ```

use qrcode::types::QrError;
use qrcode::{Color, QrCode, Version};

pub use qrcode::EcLevel;

use crate::QrsmithError;

/// Largest normal QR version.
pub const MAX_VERSION: i16 = 40;

/// Parse an error-correction letter (L/M/Q/H, any case).
pub fn parse_ec_level(letter: &str) -> Option<EcLevel> {
    match letter.trim().to_ascii_uppercase().as_str() {
        "L" => Some(EcLevel::L),
        "M" => Some(EcLevel::M),
        "Q" => Some(EcLevel::Q),
        "H" => Some(EcLevel::H),
        _ => None,
    }
}

/// Resolve the `error_correction` option, falling back to `default` for
/// missing or unrecognized letters.
pub fn resolve_ec_level(option: Option<&str>, default: EcLevel) -> EcLevel {
    option.and_then(parse_ec_level).unwrap_or(default)
}

/// Encode `payload` at the smallest version ≥ `min_version` that fits.
pub fn encode_fit(payload: &str, min_version: i16, level: EcLevel) -> Result<QrCode, QrsmithError> {
    if !(1..=MAX_VERSION).contains(&min_version) {
        return Err(QrsmithError::InvalidOption {
            option: "version",
            message: format!("{} is outside 1..={}", min_version, MAX_VERSION),
        });
    }

    for version in min_version..=MAX_VERSION {
        match QrCode::with_version(payload, Version::Normal(version), level) {
            Ok(code) => return Ok(code),
            Err(QrError::DataTooLong) => continue,
            Err(e) => return Err(e.into()),
        }
    }

    Err(QrError::DataTooLong.into())
}

/// Boolean module matrix including a ring of light border modules.
#[derive(Debug, Clone)]
pub struct ModuleGrid {
    size: usize,
    modules: Vec<bool>,
}

impl ModuleGrid {
    /// Build the grid for `code` with `border` light modules on every side.
    pub fn new(code: &QrCode, border: u32) -> Self {
        let border = border as usize;
        let symbol = code.width();
        let size = symbol + 2 * border;
        let mut modules = vec![false; size * size];

        for (i, color) in code.to_colors().iter().enumerate() {
            if *color == Color::Dark {
                let x = i % symbol + border;
                let y = i / symbol + border;
                modules[y * size + x] = true;
            }
        }

        Self { size, modules }
    }

    /// Modules per side, border included.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.modules[y * self.size + x]
    }

    /// Iterate `(x, y)` of every dark module, row by row.
    pub fn dark_modules(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.modules
            .iter()
            .enumerate()
            .filter(|(_, dark)| **dark)
            .map(move |(i, _)| (i % size, i / size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ec_level() {
        assert_eq!(parse_ec_level("l"), Some(EcLevel::L));
        assert_eq!(parse_ec_level("M"), Some(EcLevel::M));
        assert_eq!(parse_ec_level("q"), Some(EcLevel::Q));
        assert_eq!(parse_ec_level("H"), Some(EcLevel::H));
        assert_eq!(parse_ec_level("X"), None);
    }

    #[test]
    fn test_resolve_falls_back() {
        assert_eq!(resolve_ec_level(None, EcLevel::H), EcLevel::H);
        assert_eq!(resolve_ec_level(Some("z"), EcLevel::M), EcLevel::M);
        assert_eq!(resolve_ec_level(Some("l"), EcLevel::H), EcLevel::L);
    }

    #[test]
    fn test_fit_grows_version() {
        let code = encode_fit("hi", 1, EcLevel::M).unwrap();
        assert_eq!(code.width(), 21);

        let long = "x".repeat(200);
        let code = encode_fit(&long, 1, EcLevel::M).unwrap();
        assert!(code.width() > 21);
    }

    #[test]
    fn test_fit_respects_minimum() {
        let code = encode_fit("hi", 5, EcLevel::L).unwrap();
        // version 5 = 17 + 4 * 5 modules
        assert_eq!(code.width(), 37);
    }

    #[test]
    fn test_fit_rejects_bad_version() {
        assert!(matches!(
            encode_fit("hi", 0, EcLevel::M),
            Err(QrsmithError::InvalidOption { option: "version", .. })
        ));
        assert!(encode_fit("hi", 41, EcLevel::M).is_err());
    }

    #[test]
    fn test_too_long() {
        let huge = "x".repeat(5000);
        assert!(matches!(
            encode_fit(&huge, 1, EcLevel::H),
            Err(QrsmithError::Encode(_))
        ));
    }

    #[test]
    fn test_grid_has_border() {
        let code = encode_fit("border", 1, EcLevel::M).unwrap();
        let grid = ModuleGrid::new(&code, 4);
        assert_eq!(grid.size(), 21 + 8);

        for i in 0..grid.size() {
            assert!(!grid.is_dark(i, 0));
            assert!(!grid.is_dark(0, i));
            assert!(!grid.is_dark(i, grid.size() - 1));
        }
        // top-left finder pattern corner
        assert!(grid.is_dark(4, 4));
        assert!(grid.dark_modules().all(|(x, y)| grid.is_dark(x, y)));
    }
}
