use log::{debug, info};
use palette::{FromColor, Hsl, Srgb};
use serde::{Deserialize, Serialize};

use crate::error::CheckError;
use crate::fuzzy_match::StyleTag;

/// Background colours used to highlight differences in a call sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightStyles {
    pub remove: Srgb<u8>,
    pub add: Srgb<u8>,
    pub matched: Srgb<u8>,
}

impl HighlightStyles {
    pub fn dark() -> Self {
        Self {
            remove: Srgb::new(0xdd, 0x33, 0x33),
            add: Srgb::new(0x33, 0x33, 0xdd),
            matched: Srgb::new(0x33, 0xbb, 0x33),
        }
    }

    pub fn light() -> Self {
        Self {
            remove: Srgb::new(0xff, 0xcc, 0xcc),
            add: Srgb::new(0xcc, 0xcc, 0xff),
            matched: Srgb::new(0xcc, 0xff, 0xcc),
        }
    }

    pub fn color_for(&self, tag: StyleTag) -> Srgb<u8> {
        match tag {
            StyleTag::Remove => self.remove,
            StyleTag::Add => self.add,
            StyleTag::Match => self.matched,
        }
    }
}

/// Returns the fixed highlight triple for the given display mode.
pub fn resolve_styles(is_dark_mode: bool) -> HighlightStyles {
    if is_dark_mode {
        HighlightStyles::dark()
    } else {
        HighlightStyles::light()
    }
}

pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Caches the resolved highlight styles until the host reports a display
/// mode change through [`StyleCache::invalidate`].
///
/// The first `resolve` after construction or invalidation decides the
/// triple; later calls return it unchanged whatever flag they pass.
#[derive(Debug, Default)]
pub struct StyleCache {
    cached: Option<HighlightStyles>,
}

impl StyleCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&mut self, is_dark_mode: bool) -> HighlightStyles {
        *self.cached.get_or_insert_with(|| {
            debug!("Resolving highlight styles (dark mode: {})", is_dark_mode);
            resolve_styles(is_dark_mode)
        })
    }

    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    pub fn is_cached(&self) -> bool {
        self.cached.is_some()
    }
}

/// Window colours reported by the host, as `#rrggbb` strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaletteColors {
    pub window: String,
    pub window_text: String,
}

impl PaletteColors {
    /// Dark mode means the window background is darker than its text.
    pub fn is_dark(&self) -> Result<bool, CheckError> {
        Ok(lightness(&self.window)? < lightness(&self.window_text)?)
    }
}

fn lightness(hex: &str) -> Result<f32, CheckError> {
    let rgb: Srgb<u8> = hex
        .trim()
        .parse()
        .map_err(|e| CheckError::Color(format!("{}: {}", hex, e)))?;
    let hsl: Hsl = Hsl::from_color(rgb.into_format::<f32>());
    Ok(hsl.lightness)
}

pub fn init() {
    info!("config/theme module loaded");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_and_light_triples_are_disjoint() {
        let dark = resolve_styles(true);
        let light = resolve_styles(false);
        let dark_colors = [dark.remove, dark.add, dark.matched];
        for c in [light.remove, light.add, light.matched] {
            assert!(!dark_colors.contains(&c));
        }
        assert_eq!(to_hex(dark.remove), "#dd3333");
        assert_eq!(to_hex(dark.add), "#3333dd");
        assert_eq!(to_hex(dark.matched), "#33bb33");
        assert_eq!(to_hex(light.remove), "#ffcccc");
        assert_eq!(to_hex(light.add), "#ccccff");
        assert_eq!(to_hex(light.matched), "#ccffcc");
    }

    #[test]
    fn test_resolve_is_fixed() {
        assert_eq!(resolve_styles(true), resolve_styles(true));
        assert_eq!(resolve_styles(false), resolve_styles(false));
    }

    #[test]
    fn test_cache_holds_until_invalidated() {
        let mut cache = StyleCache::new();
        assert!(!cache.is_cached());
        assert_eq!(cache.resolve(true), HighlightStyles::dark());
        assert_eq!(cache.resolve(true), HighlightStyles::dark());
        // Stale until the host reports the mode change.
        assert_eq!(cache.resolve(false), HighlightStyles::dark());

        cache.invalidate();
        assert!(!cache.is_cached());
        assert_eq!(cache.resolve(false), HighlightStyles::light());
    }

    #[test]
    fn test_color_for_tag() {
        let styles = HighlightStyles::light();
        assert_eq!(styles.color_for(StyleTag::Remove), styles.remove);
        assert_eq!(styles.color_for(StyleTag::Add), styles.add);
        assert_eq!(styles.color_for(StyleTag::Match), styles.matched);
    }

    #[test]
    fn test_palette_lightness() {
        let dark = PaletteColors {
            window: "#1e1e1e".to_string(),
            window_text: "#d4d4d4".to_string(),
        };
        let light = PaletteColors {
            window: "#ffffff".to_string(),
            window_text: "#000000".to_string(),
        };
        assert!(dark.is_dark().unwrap());
        assert!(!light.is_dark().unwrap());
    }

    #[test]
    fn test_palette_rejects_bad_hex() {
        let bad = PaletteColors {
            window: "not-a-color".to_string(),
            window_text: "#000000".to_string(),
        };
        assert!(matches!(bad.is_dark(), Err(CheckError::Color(_))));
    }
}
