//! Scene description handed to the JS renderer as JSON.
//!
//! Nothing here is interpreted by the engine itself; the page builds its
//! camera, lights and materials from it.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CameraSettings {
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
}

impl Default for CameraSettings {
    fn default() -> Self {
        let angle = std::f32::consts::FRAC_PI_4;
        Self {
            fov: 30.0,
            near: 0.5,
            far: 10000.0,
            position: [angle.cos() * 3.0, 0.0, angle.sin() * 3.0],
        }
    }
}

/// Trackball camera controls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ControlSettings {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self { rotate_speed: 1.0, zoom_speed: 1.2, pan_speed: 0.8 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LightSettings {
    pub ambient_color: u32,
    pub directional_color: u32,
    pub directional_intensity: f32,
    pub directional_position: [f32; 3],
}

impl Default for LightSettings {
    fn default() -> Self {
        Self {
            ambient_color: 0x666666,
            directional_color: 0xffffff,
            directional_intensity: 1.75,
            directional_position: [5.0, 5.0, 5.0],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FogSettings {
    pub color: u32,
    pub near: f32,
    pub far: f32,
}

impl Default for FogSettings {
    fn default() -> Self {
        Self { color: 0x000000, near: 500.0, far: 10000.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SphereMaterial {
    pub color: u32,
    pub opacity: f32,
    pub transparent: bool,
    pub roughness: f32,
    pub metalness: f32,
    pub width_segments: u32,
    pub height_segments: u32,
    pub cast_shadow: bool,
}

impl Default for SphereMaterial {
    fn default() -> Self {
        Self {
            color: 0xff69b4,
            opacity: 0.9,
            transparent: true,
            roughness: 0.1,
            metalness: 0.2,
            width_segments: 20,
            height_segments: 20,
            cast_shadow: true,
        }
    }
}

/// Toon-shaded cloth with a repeating texture.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClothMaterial {
    pub color: u32,
    pub texture_repeat: bool,
    pub gradient_width: u32,
    pub cast_shadow: bool,
}

impl Default for ClothMaterial {
    fn default() -> Self {
        Self { color: 0xffffff, texture_repeat: true, gradient_width: 256, cast_shadow: true }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssetPaths {
    pub sky_model: String,
    pub cloth_texture: String,
    pub ambient_track: String,
    pub voiceover_track: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            sky_model: "assets/models/LightBlueSky.glb".to_string(),
            cloth_texture: "assets/pix01.png".to_string(),
            ambient_track: "./assets/audio/lonly_long.mp3".to_string(),
            voiceover_track: "./assets/audio/male_voiceover.mp3".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RendererSettings {
    pub antialias: bool,
    pub shadows: bool,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self { antialias: true, shadows: true }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SceneSettings {
    pub camera: CameraSettings,
    pub controls: ControlSettings,
    pub lights: LightSettings,
    pub fog: FogSettings,
    pub sphere: SphereMaterial,
    pub cloth: ClothMaterial,
    pub assets: AssetPaths,
    pub renderer: RendererSettings,
}

impl SceneSettings {
    /// The renderer clears to the fog colour.
    pub fn clear_color(&self) -> u32 {
        self.fog.color
    }

    pub fn to_json(&self) -> String {
        // Plain data with string keys; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_sits_on_diagonal() {
        let camera = CameraSettings::default();
        assert!((camera.position[0] - camera.position[2]).abs() < 1e-6);
        let r = (camera.position[0].powi(2) + camera.position[2].powi(2)).sqrt();
        assert!((r - 3.0).abs() < 1e-5);
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let json = SceneSettings::default().to_json();
        assert!(json.contains("\"rotateSpeed\":1.0"));
        assert!(json.contains("\"skyModel\":\"assets/models/LightBlueSky.glb\""));
        let back: SceneSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SceneSettings::default());
    }

    #[test]
    fn clear_color_follows_fog() {
        let mut settings = SceneSettings::default();
        settings.fog.color = 0x101010;
        assert_eq!(settings.clear_color(), 0x101010);
    }
}
