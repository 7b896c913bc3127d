/// Startup configuration for a scene

use crate::camera::DEFAULT_DOLLY;
use crate::error::ConfigError;
use crate::projection::{DEFAULT_FAR, DEFAULT_FOV, DEFAULT_NEAR};

/// Scene startup settings.
///
/// Defaults reproduce the stock four-cube scene on an 800x800 surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    /// Vertical field of view in radians
    pub fov: f64,
    pub near: f64,
    pub far: f64,
    /// Initial camera dolly, clamped on use
    pub dolly: f64,
    pub width: u32,
    pub height: u32,
    /// When false, no object spins on its own
    pub auto_rotate: bool,
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fov > 0.0 && self.fov < std::f64::consts::PI) {
            return Err(ConfigError::InvalidFov(self.fov));
        }
        if !(self.near > 0.0 && self.far > self.near && self.far.is_finite()) {
            return Err(ConfigError::InvalidClipPlanes {
                near: self.near,
                far: self.far,
            });
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            fov: DEFAULT_FOV,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            dolly: DEFAULT_DOLLY,
            width: 800,
            height: 800,
            auto_rotate: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(SceneConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_bad_fov() {
        for fov in [0.0, -1.0, std::f64::consts::PI, f64::NAN] {
            let config = SceneConfig {
                fov,
                ..SceneConfig::default()
            };
            assert!(matches!(config.validate(), Err(ConfigError::InvalidFov(_))));
        }
    }

    #[test]
    fn test_rejects_bad_clip_planes() {
        let config = SceneConfig {
            near: 5.0,
            far: 1.0,
            ..SceneConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidClipPlanes { near: 5.0, far: 1.0 })
        );
    }

    #[test]
    fn test_rejects_empty_viewport() {
        let config = SceneConfig {
            height: 0,
            ..SceneConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidViewport { .. })
        ));
    }
}
