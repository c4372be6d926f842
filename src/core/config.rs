//! Stage configuration shared by the server (which embeds it in the page)
//! and the browser client (which reads it back).

#[cfg(not(feature = "std"))]
use alloc::{format, string::String, string::ToString};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::StageError;
use crate::seek::SeekTable;

/// DOM id of the `<script type="application/json">` element carrying the
/// serialized [`StageConfig`] in the rendered page.
pub const STAGE_CONFIG_ELEMENT_ID: &str = "stage-config";

/// Where the numbered splash frames live, relative to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SpriteSheet {
    pub dir: String,
    pub stem: String,
    pub extension: String,
}

impl Default for SpriteSheet {
    fn default() -> Self {
        Self {
            dir: "img/splash".to_string(),
            stem: "splash".to_string(),
            extension: "png".to_string(),
        }
    }
}

impl SpriteSheet {
    /// `img/splash/splash3.png` for frame 3.
    pub fn frame_path(&self, frame: u32) -> String {
        format!("{}/{}{}.{}", self.dir, self.stem, frame, self.extension)
    }

    /// CSS `background` shorthand showing `frame` centered without tiling.
    pub fn frame_background(&self, frame: u32) -> String {
        format!("url({}) center center no-repeat", self.frame_path(frame))
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct StageConfig {
    /// DOM id of the looping `<audio>` element.
    pub audio_id: String,
    /// Audio source, relative to the public root.
    pub audio_src: String,
    /// Class of the element splashes are appended to. The server renders the
    /// element with this class, the client looks it up by it.
    pub container_class: String,
    /// Class given to each splash element.
    pub splash_class: String,
    pub sprite: SpriteSheet,
    pub frame_count: u32,
    pub frame_period_ms: u32,
    /// Edge length of the square splash, in CSS pixels.
    pub splash_size: f64,
    pub seek_table: SeekTable,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            audio_id: "gaoshanliushui".to_string(),
            audio_src: "audio/gaoshanliushui.mp3".to_string(),
            container_class: "container".to_string(),
            splash_class: "splash".to_string(),
            sprite: SpriteSheet::default(),
            frame_count: 11,
            frame_period_ms: 150,
            splash_size: 200.0,
            seek_table: SeekTable::default(),
        }
    }
}

impl StageConfig {
    /// The seek table validates itself on construction; this covers the rest.
    pub fn validate(&self) -> Result<(), StageError> {
        let required = [
            ("audio_id", &self.audio_id),
            ("audio_src", &self.audio_src),
            ("container_class", &self.container_class),
            ("splash_class", &self.splash_class),
            ("sprite.stem", &self.sprite.stem),
        ];
        if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(StageError::EmptyField(*field));
        }
        let classes = [
            ("container_class", &self.container_class),
            ("splash_class", &self.splash_class),
        ];
        if let Some((field, value)) = classes.iter().find(|(_, v)| !is_class_name(v)) {
            return Err(StageError::ClassName {
                field: *field,
                value: value.to_string(),
            });
        }
        if self.frame_count == 0 {
            return Err(StageError::NoFrames);
        }
        if self.frame_period_ms == 0 {
            return Err(StageError::ZeroFramePeriod);
        }
        if !self.splash_size.is_finite() || self.splash_size <= 0.0 {
            return Err(StageError::SplashSize(self.splash_size));
        }
        Ok(())
    }

    /// Selector matching the splash container.
    pub fn container_selector(&self) -> String {
        format!(".{}", self.container_class)
    }
}

/// A single class token usable both in `class="..."` and as `.name`.
fn is_class_name(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '-');
    starts_ok && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_frames_follow_asset_convention() {
        let sheet = SpriteSheet::default();
        assert_eq!(sheet.frame_path(0), "img/splash/splash0.png");
        assert_eq!(sheet.frame_path(10), "img/splash/splash10.png");
        assert_eq!(
            sheet.frame_background(4),
            "url(img/splash/splash4.png) center center no-repeat"
        );
    }

    #[test]
    fn default_config_is_valid() {
        let cfg = StageConfig::default();
        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!(cfg.frame_count, 11);
        assert_eq!(cfg.frame_period_ms, 150);
    }

    #[test]
    fn validate_flags_each_field() {
        let mut cfg = StageConfig::default();
        cfg.audio_id = "  ".to_string();
        assert_eq!(cfg.validate(), Err(StageError::EmptyField("audio_id")));

        let mut cfg = StageConfig::default();
        cfg.frame_count = 0;
        assert_eq!(cfg.validate(), Err(StageError::NoFrames));

        let mut cfg = StageConfig::default();
        cfg.frame_period_ms = 0;
        assert_eq!(cfg.validate(), Err(StageError::ZeroFramePeriod));

        let mut cfg = StageConfig::default();
        cfg.container_class = ".container".to_string();
        assert_eq!(
            cfg.validate(),
            Err(StageError::ClassName {
                field: "container_class",
                value: ".container".to_string()
            })
        );

        let mut cfg = StageConfig::default();
        cfg.splash_class = "splash big".to_string();
        assert!(matches!(
            cfg.validate(),
            Err(StageError::ClassName { field: "splash_class", .. })
        ));

        let mut cfg = StageConfig::default();
        cfg.splash_size = f64::NAN;
        assert!(matches!(cfg.validate(), Err(StageError::SplashSize(_))));
    }

    #[test]
    fn container_selector_matches_rendered_class() {
        let mut cfg = StageConfig::default();
        assert_eq!(cfg.container_selector(), ".container");

        cfg.container_class = "stage-2".to_string();
        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!(cfg.container_selector(), ".stage-2");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: StageConfig =
            serde_json::from_str(r#"{"frame_period_ms":90,"sprite":{"dir":"sprites"}}"#).unwrap();
        assert_eq!(cfg.frame_period_ms, 90);
        assert_eq!(cfg.sprite.frame_path(2), "sprites/splash2.png");
        assert_eq!(cfg.seek_table, SeekTable::default());
        assert_eq!(cfg.audio_id, "gaoshanliushui");
    }
}
