//! Toon gradient map: a tiny 1D lookup that quantizes diffuse lighting
//! into flat bands.

/// Grey levels sampled with nearest filtering by the toon shader.
///
/// The shader maps `dot(normal, light) ∈ [-1, 1]` to a coordinate in
/// `[0, 1]` and picks the level whose band contains it. An empty gradient
/// means no lookup is available and the shader falls back to smooth
/// Lambert shading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToonGradient {
    levels: Vec<u8>,
}

impl ToonGradient {
    /// Gradient from grey levels, darkest first.
    #[must_use]
    pub fn new(levels: &[u8]) -> Self {
        if levels.is_empty() {
            log::warn!(
                "toon gradient has no levels; falling back to smooth shading"
            );
        }
        Self {
            levels: levels.to_vec(),
        }
    }

    /// Whether the gradient quantizes lighting.
    #[must_use]
    pub fn is_quantized(&self) -> bool {
        !self.levels.is_empty()
    }

    /// The grey levels.
    #[must_use]
    pub fn levels(&self) -> &[u8] {
        &self.levels
    }

    /// Texels to upload as a `width × 1` R8 texture. Smooth gradients still
    /// upload one white texel so the binding is always valid.
    #[must_use]
    pub fn texels(&self) -> Vec<u8> {
        if self.levels.is_empty() {
            vec![u8::MAX]
        } else {
            self.levels.clone()
        }
    }

    /// CPU evaluation of the shading term the toon shader produces for a
    /// given `n·l`.
    #[must_use]
    pub fn shade(&self, n_dot_l: f32) -> f32 {
        if self.levels.is_empty() {
            return n_dot_l.max(0.0);
        }
        let coord = (n_dot_l * 0.5 + 0.5).clamp(0.0, 1.0);
        let count = self.levels.len();
        let idx = ((coord * count as f32) as usize).min(count - 1);
        f32::from(self.levels[idx]) / 255.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_levels_make_three_bands() {
        let gradient = ToonGradient::new(&[0, 128, 255]);
        assert!(gradient.is_quantized());
        assert_eq!(gradient.shade(-1.0), 0.0);
        assert_eq!(gradient.shade(-0.5), 0.0);
        assert!((gradient.shade(0.0) - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(gradient.shade(0.9), 1.0);
        assert_eq!(gradient.shade(1.0), 1.0);
    }

    #[test]
    fn empty_gradient_falls_back_to_lambert() {
        let gradient = ToonGradient::new(&[]);
        assert!(!gradient.is_quantized());
        assert_eq!(gradient.texels(), vec![255]);
        assert_eq!(gradient.shade(-0.3), 0.0);
        assert_eq!(gradient.shade(0.6), 0.6);
    }
}
