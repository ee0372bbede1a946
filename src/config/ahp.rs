//! AHP engine configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Upper bound accepted for `max_order`.
pub const MAX_ORDER_LIMIT: usize = 50;

/// Settings for evaluating decision models
#[derive(Debug, Clone, Deserialize)]
pub struct AhpConfig {
    /// Decision model file (YAML or JSON); the bundled crew sample when unset
    pub model_path: Option<String>,

    /// Largest matrix order accepted
    #[serde(default = "default_max_order")]
    pub max_order: usize,

    /// Reject non-reciprocal judgment matrices instead of warning
    #[serde(default)]
    pub strict_reciprocal: bool,

    /// Allowed deviation of `M[i][j] * M[j][i]` from 1
    #[serde(default = "default_reciprocal_tolerance")]
    pub reciprocal_tolerance: f64,

    /// Evaluate and log the configured model once at startup
    #[serde(default = "default_render_on_startup")]
    pub render_on_startup: bool,
}

impl AhpConfig {
    /// Validate AHP configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_order == 0 || self.max_order > MAX_ORDER_LIMIT {
            return Err(ValidationError::InvalidMaxOrder {
                actual: self.max_order,
                max: MAX_ORDER_LIMIT,
            });
        }
        if !(self.reciprocal_tolerance > 0.0 && self.reciprocal_tolerance < 1.0) {
            return Err(ValidationError::InvalidReciprocalTolerance(
                self.reciprocal_tolerance,
            ));
        }
        if matches!(&self.model_path, Some(path) if path.trim().is_empty()) {
            return Err(ValidationError::BlankModelPath);
        }
        Ok(())
    }
}

impl Default for AhpConfig {
    fn default() -> Self {
        Self {
            model_path: None,
            max_order: default_max_order(),
            strict_reciprocal: false,
            reciprocal_tolerance: default_reciprocal_tolerance(),
            render_on_startup: default_render_on_startup(),
        }
    }
}

fn default_max_order() -> usize {
    MAX_ORDER_LIMIT
}

fn default_reciprocal_tolerance() -> f64 {
    0.05
}

fn default_render_on_startup() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ahp_config_defaults() {
        let config = AhpConfig::default();
        assert_eq!(config.model_path, None);
        assert_eq!(config.max_order, 50);
        assert!(!config.strict_reciprocal);
        assert_eq!(config.reciprocal_tolerance, 0.05);
        assert!(config.render_on_startup);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_invalid_max_order() {
        let config = AhpConfig {
            max_order: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AhpConfig {
            max_order: 51,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidMaxOrder {
                actual: 51,
                max: 50
            })
        );
    }

    #[test]
    fn test_validation_invalid_tolerance() {
        for tolerance in [0.0, 1.0, -0.1, f64::NAN] {
            let config = AhpConfig {
                reciprocal_tolerance: tolerance,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "tolerance {tolerance} accepted");
        }
    }

    #[test]
    fn test_validation_blank_model_path() {
        let config = AhpConfig {
            model_path: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::BlankModelPath));
    }
}
