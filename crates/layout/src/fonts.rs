//! Font attributes and font-file metrics for the layout engine.
//!
//! `FontManager` maps each script to a CSS-style family list and a size
//! scale. `FontFileMetricsProvider` (feature: `system-fonts`) resolves those
//! family lists through fontdb and measures glyphs out of the font binaries.

use crate::config::FontOverride;
use std::collections::HashMap;
use stone_types::Script;

#[cfg(feature = "system-fonts")]
use std::sync::{Arc, RwLock};
#[cfg(feature = "system-fonts")]
use stone_traits::{GlyphMetrics, MetricsError, MetricsProvider};

const LATIN_FAMILY: &str = "Times New Roman, Georgia, serif";
const JAPANESE_FAMILY: &str =
    r#""Noto Serif JP", "Hiragino Mincho ProN", "Yu Mincho", "MS Mincho", serif"#;
const EMOJI_FAMILY: &str = "Apple Color Emoji, Segoe UI Emoji, Noto Color Emoji, sans-serif";

/// Script to font attribute table.
///
/// Lookups for a script without an entry fall back to the Latin family and a
/// scale of 1.0.
#[derive(Debug, Clone)]
pub struct FontManager {
    families: HashMap<Script, String>,
    scales: HashMap<Script, f32>,
}

impl Default for FontManager {
    fn default() -> Self {
        Self {
            families: HashMap::from([
                (Script::Latin, LATIN_FAMILY.to_string()),
                (Script::Japanese, JAPANESE_FAMILY.to_string()),
                (Script::Emoji, EMOJI_FAMILY.to_string()),
            ]),
            scales: HashMap::from([
                (Script::Latin, 0.95),
                (Script::Japanese, 1.0),
                (Script::Emoji, 1.0),
            ]),
        }
    }
}

impl FontManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the default table and applies per-script overrides on top.
    pub fn with_overrides<'a>(
        overrides: impl IntoIterator<Item = (&'a Script, &'a FontOverride)>,
    ) -> Self {
        let mut manager = Self::default();
        for (script, font) in overrides {
            if let Some(family) = &font.family {
                manager.set_font_family(*script, family.clone());
            }
            if let Some(scale) = font.scale {
                manager.set_font_scale(*script, scale);
            }
        }
        manager
    }

    pub fn font_family(&self, script: Script) -> &str {
        self.families
            .get(&script)
            .or_else(|| self.families.get(&Script::Latin))
            .map(String::as_str)
            .unwrap_or(LATIN_FAMILY)
    }

    pub fn font_scale(&self, script: Script) -> f32 {
        self.scales.get(&script).copied().unwrap_or(1.0)
    }

    pub fn set_font_family(&mut self, script: Script, family: impl Into<String>) {
        self.families.insert(script, family.into());
    }

    pub fn set_font_scale(&mut self, script: Script, scale: f32) {
        self.scales.insert(script, scale);
    }

    /// Drops both attributes of `script` so lookups use the fallbacks.
    pub fn unset(&mut self, script: Script) {
        self.families.remove(&script);
        self.scales.remove(&script);
    }
}

/// Splits a CSS family list into bare names, stripping quotes.
pub fn parse_family_list(family: &str) -> Vec<String> {
    family
        .split(',')
        .map(|name| name.trim().trim_matches(|c: char| c == '"' || c == '\'').trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// A thread-safe handle to font data with rustybuzz Face creation.
#[cfg(feature = "system-fonts")]
pub struct FontInstance {
    pub data: Arc<Vec<u8>>,
    pub index: u32,
}

#[cfg(feature = "system-fonts")]
impl std::fmt::Debug for FontInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontInstance")
            .field("data_len", &self.data.len())
            .field("index", &self.index)
            .finish()
    }
}

#[cfg(feature = "system-fonts")]
impl FontInstance {
    pub fn new(data: Arc<Vec<u8>>, index: u32) -> Self {
        Self { data, index }
    }

    /// Creates a lightweight Face view over the font data.
    pub fn as_face(&self) -> Option<rustybuzz::Face<'_>> {
        rustybuzz::Face::from_slice(&self.data, self.index)
    }
}

#[cfg(feature = "system-fonts")]
pub type FontData = Arc<FontInstance>;

/// Measures glyphs from font files discovered through fontdb.
///
/// Family lists are resolved left to right; generic names (`serif`,
/// `sans-serif`, `monospace`, `cursive`, `fantasy`) map to fontdb's generic
/// families. A list with no installed member is a `FontNotFound` error.
/// Characters missing from the resolved face measure as `.notdef`.
#[cfg(feature = "system-fonts")]
#[derive(Clone)]
pub struct FontFileMetricsProvider {
    db: Arc<RwLock<fontdb::Database>>,
    /// Resolved faces keyed by the family list as written in the font table.
    faces: Arc<RwLock<HashMap<String, FontData>>>,
}

#[cfg(feature = "system-fonts")]
impl std::fmt::Debug for FontFileMetricsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let face_count = self.db.read().map(|db| db.len()).unwrap_or(0);
        f.debug_struct("FontFileMetricsProvider")
            .field("faces", &face_count)
            .finish()
    }
}

#[cfg(feature = "system-fonts")]
impl Default for FontFileMetricsProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "system-fonts")]
impl FontFileMetricsProvider {
    /// Creates a provider with an empty font database.
    pub fn new() -> Self {
        Self {
            db: Arc::new(RwLock::new(fontdb::Database::new())),
            faces: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Creates a provider over the fonts installed on this system.
    pub fn with_system_fonts() -> Self {
        let provider = Self::new();
        if let Ok(mut db) = provider.db.write() {
            db.load_system_fonts();
            log::debug!("Loaded {} system font faces", db.len());
        }
        provider
    }

    /// Adds font data directly to the fontdb database.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFontData` when ttf-parser cannot read the binary.
    pub fn add_font_data(&self, data: Vec<u8>) -> Result<(), MetricsError> {
        let family = match ttf_parser::Face::parse(&data, 0) {
            Ok(face) => face
                .names()
                .into_iter()
                .find(|n| n.name_id == ttf_parser::name_id::FAMILY)
                .and_then(|n| n.to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
            Err(e) => {
                return Err(MetricsError::InvalidFontData {
                    family: "<memory>".to_string(),
                    message: e.to_string(),
                });
            }
        };
        log::debug!("Registering font '{}' ({} bytes)", family, data.len());

        let mut db = self
            .db
            .write()
            .map_err(|_| MetricsError::Unavailable("fontdb lock poisoned".to_string()))?;
        db.load_font_data(data);
        drop(db);

        // New faces may change how earlier family lists resolve
        if let Ok(mut faces) = self.faces.write() {
            faces.clear();
        }
        Ok(())
    }

    /// Adds fonts from a directory.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn add_font_dir<P: AsRef<std::path::Path>>(&self, path: P) {
        if let Ok(mut db) = self.db.write() {
            db.load_fonts_dir(path);
        }
        if let Ok(mut faces) = self.faces.write() {
            faces.clear();
        }
    }

    fn resolve(&self, family: &str) -> Result<FontData, MetricsError> {
        if let Ok(faces) = self.faces.read()
            && let Some(data) = faces.get(family)
        {
            return Ok(data.clone());
        }

        let names = parse_family_list(family);
        let families: Vec<fontdb::Family<'_>> = names
            .iter()
            .map(|name| match name.to_ascii_lowercase().as_str() {
                "serif" => fontdb::Family::Serif,
                "sans-serif" => fontdb::Family::SansSerif,
                "monospace" => fontdb::Family::Monospace,
                "cursive" => fontdb::Family::Cursive,
                "fantasy" => fontdb::Family::Fantasy,
                _ => fontdb::Family::Name(name.as_str()),
            })
            .collect();

        let db = self
            .db
            .read()
            .map_err(|_| MetricsError::Unavailable("fontdb lock poisoned".to_string()))?;
        let query = fontdb::Query {
            families: &families,
            weight: fontdb::Weight::NORMAL,
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        };
        let id = db.query(&query).ok_or_else(|| {
            log::warn!("No installed font matches '{}'", family);
            MetricsError::FontNotFound {
                family: family.to_string(),
            }
        })?;

        let (bytes, index) = db
            .with_face_data(id, |data, index| (data.to_vec(), index))
            .ok_or_else(|| MetricsError::FontNotFound {
                family: family.to_string(),
            })?;
        drop(db);

        log::debug!("Resolved '{}' to face {:?} ({} bytes)", family, id, bytes.len());
        let instance = Arc::new(FontInstance::new(Arc::new(bytes), index));
        if let Ok(mut faces) = self.faces.write() {
            faces.insert(family.to_string(), instance.clone());
        }
        Ok(instance)
    }
}

#[cfg(feature = "system-fonts")]
impl MetricsProvider for FontFileMetricsProvider {
    fn measure(
        &self,
        ch: char,
        font_family: &str,
        font_size: f32,
    ) -> Result<GlyphMetrics, MetricsError> {
        let font = self.resolve(font_family)?;
        let face = font.as_face().ok_or_else(|| MetricsError::InvalidFontData {
            family: font_family.to_string(),
            message: "face could not be parsed".to_string(),
        })?;

        let scale = font_size / face.units_per_em() as f32;
        let glyph = face.glyph_index(ch).unwrap_or(rustybuzz::ttf_parser::GlyphId(0));
        let width = face.glyph_hor_advance(glyph).unwrap_or(0) as f32 * scale;

        let metrics = match face.glyph_bounding_box(glyph) {
            Some(bbox) => GlyphMetrics {
                width,
                bounding_box_left: -(bbox.x_min as f32) * scale,
                bounding_box_right: bbox.x_max as f32 * scale,
                bounding_box_ascent: bbox.y_max as f32 * scale,
                bounding_box_descent: -(bbox.y_min as f32) * scale,
            },
            // Blank glyphs such as spaces have no outline
            None => GlyphMetrics {
                width,
                ..Default::default()
            },
        };
        Ok(metrics)
    }

    fn name(&self) -> &'static str {
        "font-file"
    }
}
