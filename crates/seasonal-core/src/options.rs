//! Animation options and their resolved configuration.

use serde::Deserialize;

use crate::color::ElementColor;

/// Default minimum element size in document units.
pub const DEFAULT_MIN_SIZE: f32 = 20.0;

/// Default additive size range in document units.
pub const DEFAULT_MAX_SIZE: f32 = 30.0;

/// Default base interval between spawns, before responsive scaling.
pub const DEFAULT_SPAWN_INTERVAL_MS: u64 = 500;

/// User-facing animation options. Every field is optional; unset fields use
/// the documented defaults when the options are resolved.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimatorOptions {
    /// Minimum element size.
    pub min_size: Option<f32>,
    /// Additive size range: sampled sizes lie in `[min_size, min_size + max_size)`.
    pub max_size: Option<f32>,
    /// Element color as a `#RGB` or `#RRGGBB` hex string.
    pub element_color: Option<String>,
    /// Base interval between spawns in milliseconds.
    pub spawn_interval_ms: Option<u64>,
}

/// Resolved configuration, immutable for the duration of one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatorConfig {
    pub min_size: f32,
    pub max_size: f32,
    pub element_color: ElementColor,
    pub spawn_interval_ms: u64,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
            element_color: ElementColor::default(),
            spawn_interval_ms: DEFAULT_SPAWN_INTERVAL_MS,
        }
    }
}

impl AnimatorConfig {
    /// Resolve options against the documented defaults.
    ///
    /// Invalid values (non-finite or negative sizes, a zero interval, an
    /// unparsable color) fall back to their defaults rather than failing.
    pub fn resolve(options: &AnimatorOptions) -> Self {
        let defaults = Self::default();
        Self {
            min_size: options
                .min_size
                .filter(|s| s.is_finite() && *s >= 0.0)
                .unwrap_or(defaults.min_size),
            max_size: options
                .max_size
                .filter(|s| s.is_finite() && *s >= 0.0)
                .unwrap_or(defaults.max_size),
            element_color: ElementColor::parse_or_default(options.element_color.as_deref()),
            spawn_interval_ms: options
                .spawn_interval_ms
                .filter(|ms| *ms > 0)
                .unwrap_or(defaults.spawn_interval_ms),
        }
    }

    /// Spawn interval after responsive scaling for the given viewport width.
    ///
    /// Narrow viewports spawn less often: x3 below 768 units, x2 below 1024,
    /// x1 otherwise.
    pub fn effective_spawn_interval_ms(&self, viewport_width: f32) -> u64 {
        let multiplier = if viewport_width < 768.0 {
            3
        } else if viewport_width < 1024.0 {
            2
        } else {
            1
        };
        self.spawn_interval_ms * multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_empty_options_uses_defaults() {
        let config = AnimatorConfig::resolve(&AnimatorOptions::default());
        assert_eq!(config, AnimatorConfig::default());
    }

    #[test]
    fn test_resolve_partial_options() {
        let options = AnimatorOptions {
            min_size: Some(10.0),
            element_color: Some("#FF0000".into()),
            ..Default::default()
        };
        let config = AnimatorConfig::resolve(&options);
        assert_eq!(config.min_size, 10.0);
        assert_eq!(config.max_size, DEFAULT_MAX_SIZE);
        assert_eq!(config.spawn_interval_ms, DEFAULT_SPAWN_INTERVAL_MS);
        assert_eq!(config.element_color, ElementColor::parse("#FF0000").unwrap());
    }

    #[test]
    fn test_resolve_rejects_invalid_values() {
        let options = AnimatorOptions {
            min_size: Some(f32::NAN),
            max_size: Some(-5.0),
            spawn_interval_ms: Some(0),
            element_color: Some("chartreuse".into()),
        };
        let config = AnimatorConfig::resolve(&options);
        assert_eq!(config, AnimatorConfig::default());
    }

    #[test]
    fn test_responsive_interval_scaling() {
        let config = AnimatorConfig {
            spawn_interval_ms: 500,
            ..Default::default()
        };
        assert_eq!(config.effective_spawn_interval_ms(500.0), 1500);
        assert_eq!(config.effective_spawn_interval_ms(900.0), 1000);
        assert_eq!(config.effective_spawn_interval_ms(1400.0), 500);
    }
}
