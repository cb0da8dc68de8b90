//! Stage configuration.
//!
//! Everything page-specific lives here: asset path, DOM selectors, intro
//! timing and the keyframe list. The defaults describe the shipped page;
//! a JSON document may override any subset of fields.
//!
//! ```rust,ignore
//! let config = StageConfig::from_json(r#"{ "asset_path": "./assets/alt.glb" }"#)?;
//! assert_eq!(config.keyframes.len(), 11);
//! ```

use scrollreel_animation::{IntroTiming, KeyframeEntry};
use scrollreel_core::{ReelError, Result};
use serde::{Deserialize, Serialize};

use crate::sequence::authored_sequence;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    /// Model to import, relative to the page.
    pub asset_path: String,
    /// Element id of the viewer canvas.
    pub canvas_id: String,
    /// Selector of the scroll container.
    pub scroller: String,
    /// Selector of the load progress bar.
    pub progress_bar: String,
    /// Selector of the loading overlay.
    pub loader: String,
    pub intro: IntroTiming,
    pub keyframes: Vec<KeyframeEntry>,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            asset_path: "./assets/scene.glb".to_string(),
            canvas_id: "webgi-canvas".to_string(),
            scroller: ".mainContainer".to_string(),
            progress_bar: ".progress".to_string(),
            loader: ".loader".to_string(),
            intro: IntroTiming::default(),
            keyframes: authored_sequence(),
        }
    }
}

impl StageConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        let intro = &self.intro;
        let durations = [intro.delay, intro.duration, intro.load_timeout];
        if !(durations.iter().all(|d| *d >= 0.0 && d.is_finite())
            && intro.travel_percent.is_finite())
        {
            return Err(ReelError::InvalidConfig(format!(
                "intro timing must be non-negative and finite: {intro:?}"
            )));
        }

        for (index, entry) in self.keyframes.iter().enumerate() {
            if entry.region.is_empty() {
                return Err(ReelError::InvalidConfig(format!(
                    "keyframe {index} has no trigger region"
                )));
            }
            if !(entry.scrub >= 0.0 && entry.scrub.is_finite()) {
                return Err(ReelError::InvalidConfig(format!(
                    "keyframe {index} ({}) has invalid scrub {}",
                    entry.region, entry.scrub
                )));
            }
            if !entry.target.is_finite() {
                return Err(ReelError::InvalidConfig(format!(
                    "keyframe {index} ({}) has a non-finite target",
                    entry.region
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = StageConfig::from_json(r#"{ "asset_path": "./assets/alt.glb" }"#).unwrap();
        assert_eq!(config.asset_path, "./assets/alt.glb");
        assert_eq!(config.scroller, ".mainContainer");
        assert_eq!(config.keyframes, authored_sequence());
    }

    #[test]
    fn keyframes_read_from_json() {
        let config = StageConfig::from_json(
            r#"{
                "intro": { "delay": 0.5 },
                "keyframes": [{
                    "region": "hero",
                    "start": "top bottom",
                    "end": "bottom top",
                    "scrub": 0.1,
                    "property": "rotation",
                    "target": [0.0, 3.14, 0.0]
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(config.intro.delay, 0.5);
        assert_eq!(config.intro.duration, 0.8);
        assert_eq!(config.keyframes.len(), 1);
        assert_eq!(config.keyframes[0].end.to_string(), "bottom top");
    }

    #[test]
    fn rejects_bad_values() {
        let negative_scrub = r#"{ "keyframes": [{
            "region": "hero", "start": "top top", "end": "top top",
            "scrub": -1.0, "property": "position", "target": [0, 0, 0]
        }] }"#;
        assert!(matches!(
            StageConfig::from_json(negative_scrub),
            Err(ReelError::InvalidConfig(_))
        ));

        assert!(matches!(
            StageConfig::from_json(r#"{ "intro": { "load_timeout": -5.0 } }"#),
            Err(ReelError::InvalidConfig(_))
        ));

        let bad_anchor = r#"{ "keyframes": [{
            "region": "hero", "start": "top", "end": "top top",
            "scrub": 0.2, "property": "position", "target": [0, 0, 0]
        }] }"#;
        assert!(matches!(
            StageConfig::from_json(bad_anchor),
            Err(ReelError::ConfigParse(_))
        ));
    }
}
