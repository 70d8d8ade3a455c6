use glam::Vec3;
use serde::Serialize;

use crate::animation::Wave;
use crate::math::Rgb;
use crate::types::{LightRaw, MAX_LIGHTS};

/// Background colour shown when no scene overrides it
pub const DEFAULT_BACKGROUND: Rgb = Rgb::hex(0x101014);

/// Linear fog between `near` and `far`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Fog {
    pub color: Rgb,
    pub near: f32,
    pub far: f32,
}

/// Shared render-surface state a mounted scene takes over
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Environment {
    pub background: Rgb,
    pub fog: Option<Fog>,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND,
            fog: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    /// Light travelling along `direction`
    Directional { direction: Vec3 },
    Point { position: Vec3, range: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub color: Rgb,
    pub intensity: f32,
    /// Optional intensity flicker added on top of `intensity`
    pub flicker: Option<Wave>,
}

impl Light {
    pub fn directional(direction: Vec3, color: Rgb, intensity: f32) -> Self {
        Self {
            kind: LightKind::Directional { direction },
            color,
            intensity,
            flicker: None,
        }
    }

    pub fn point(position: Vec3, range: f32, color: Rgb, intensity: f32) -> Self {
        Self {
            kind: LightKind::Point { position, range },
            color,
            intensity,
            flicker: None,
        }
    }

    pub fn with_flicker(mut self, wave: Wave) -> Self {
        self.flicker = Some(wave);
        self
    }

    pub fn intensity_at(&self, t: f32) -> f32 {
        let flicker = self.flicker.map_or(0.0, |w| w.sample(t));
        (self.intensity + flicker).max(0.0)
    }

    pub fn to_raw(&self, t: f32) -> LightRaw {
        let (position, params) = match self.kind {
            LightKind::Directional { direction } => {
                let d = direction.normalize_or_zero();
                ([d.x, d.y, d.z, 0.0], [0.0; 4])
            }
            LightKind::Point { position, range } => {
                ([position.x, position.y, position.z, 1.0], [range, 0.0, 0.0, 0.0])
            }
        };
        LightRaw {
            position,
            color: [self.color.r, self.color.g, self.color.b, self.intensity_at(t)],
            params,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lighting {
    pub ambient: Rgb,
    pub ambient_intensity: f32,
    pub lights: Vec<Light>,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: Rgb::WHITE,
            ambient_intensity: 0.35,
            lights: Vec::new(),
        }
    }
}

impl Lighting {
    /// Lights packed for the globals uniform; anything past the shader limit is dropped
    pub fn pack(&self, t: f32) -> ([LightRaw; MAX_LIGHTS], u32) {
        let mut packed = [LightRaw::default(); MAX_LIGHTS];
        let count = self.lights.len().min(MAX_LIGHTS);
        for (slot, light) in packed.iter_mut().zip(&self.lights) {
            *slot = light.to_raw(t);
        }
        (packed, count as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_environment_has_no_fog() {
        let env = Environment::default();
        assert_eq!(env.background, DEFAULT_BACKGROUND);
        assert!(env.fog.is_none());
    }

    #[test]
    fn flicker_never_negative() {
        let light = Light::point(Vec3::ZERO, 5.0, Rgb::WHITE, 0.2).with_flicker(Wave::new(1.0, 7.0, 0.0));
        for i in 0..40 {
            assert!(light.intensity_at(i as f32 * 0.05) >= 0.0);
        }
    }

    #[test]
    fn pack_truncates_extra_lights() {
        let lighting = Lighting {
            lights: vec![Light::directional(Vec3::NEG_Y, Rgb::WHITE, 1.0); MAX_LIGHTS + 3],
            ..Lighting::default()
        };
        let (_, count) = lighting.pack(0.0);
        assert_eq!(count as usize, MAX_LIGHTS);
    }
}
