use serde::Deserialize;

use crate::core::layout::LayoutMetrics;
use crate::error::ReflexError;

/// Tunables for layout, round pacing and gesture thresholds.
/// Every field has a default, so a partial JSON object is enough.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Unscaled component diameter / bar width.
    pub component_size: f32,
    /// Unscaled gap between components and around the play area edge.
    pub component_margin: f32,
    /// Components that must fit along the long axis.
    pub slots_long: u32,
    /// Components that must fit along the short axis.
    pub slots_short: u32,
    /// Time every round gets regardless of difficulty (ms).
    pub round_floor_ms: u32,
    /// Extra time on top of the floor at the start of a run (ms).
    pub max_additional_ms: u32,
    /// How much extra time is removed per difficulty step (ms).
    pub time_step_ms: u32,
    /// Points between difficulty steps.
    pub points_per_step: u32,
    /// Fraction of component size both drag axes must exceed for a turn.
    pub turn_threshold: f32,
    /// Fraction of component size the horizontal drag must exceed for a slide.
    pub slide_threshold: f32,
    /// Locale hint passed to the announcer.
    pub voice_locale: Option<String>,
    /// Storage key for the persisted best score.
    pub best_score_key: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            component_size: 100.0,
            component_margin: 20.0,
            slots_long: 3,
            slots_short: 1,
            round_floor_ms: 1000,
            max_additional_ms: 2000,
            time_step_ms: 250,
            points_per_step: 3,
            turn_threshold: 0.30,
            slide_threshold: 0.45,
            voice_locale: Some("en-US".to_string()),
            best_score_key: "reflex.bestScore".to_string(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ReflexError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ReflexError> {
        if !(self.component_size > 0.0) {
            return Err(ReflexError::InvalidConfig(format!(
                "component_size must be positive, got {}",
                self.component_size
            )));
        }
        if !(self.component_margin >= 0.0) {
            return Err(ReflexError::InvalidConfig(format!(
                "component_margin must not be negative, got {}",
                self.component_margin
            )));
        }
        if self.slots_long == 0 || self.slots_short == 0 {
            return Err(ReflexError::InvalidConfig("slot counts must be at least 1".into()));
        }
        if self.slots_short > self.slots_long {
            return Err(ReflexError::InvalidConfig(
                "slots_short must not exceed slots_long".into(),
            ));
        }
        if self.points_per_step == 0 {
            return Err(ReflexError::InvalidConfig("points_per_step must be at least 1".into()));
        }
        for (name, value) in [
            ("turn_threshold", self.turn_threshold),
            ("slide_threshold", self.slide_threshold),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ReflexError::InvalidConfig(format!(
                    "{name} must be in (0, 1], got {value}"
                )));
            }
        }
        if self.best_score_key.is_empty() {
            return Err(ReflexError::InvalidConfig("best_score_key must not be empty".into()));
        }
        Ok(())
    }

    /// Layout metrics derived from the component dimensions.
    pub fn layout(&self) -> LayoutMetrics {
        LayoutMetrics::new(
            self.component_size,
            self.component_margin,
            self.slots_long,
            self.slots_short,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let json = r#"{ "round_floor_ms": 800, "voice_locale": null }"#;
        let config = GameConfig::from_json(json).unwrap();
        assert_eq!(config.round_floor_ms, 800);
        assert_eq!(config.voice_locale, None);
        assert_eq!(config.time_step_ms, 250);
        assert_eq!(config.component_size, 100.0);
    }

    #[test]
    fn rejects_bad_threshold() {
        let err = GameConfig::from_json(r#"{ "turn_threshold": 1.5 }"#).unwrap_err();
        assert!(matches!(err, ReflexError::InvalidConfig(_)));
        assert!(err.to_string().contains("turn_threshold"));
    }

    #[test]
    fn rejects_zero_size() {
        let err = GameConfig::from_json(r#"{ "component_size": 0 }"#).unwrap_err();
        assert!(matches!(err, ReflexError::InvalidConfig(_)));
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ReflexError::Serialization(_)));
    }
}
