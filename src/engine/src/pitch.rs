/// Pitch and viewport dimensions plus the meter-to-pixel mapping.
///
/// Injected where rendering needs it so the engine stays reusable for
/// non-regulation pitches and other viewport sizes in tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchSpace {
    /// Pitch length in meters (goal to goal).
    pub pitch_width: f32,
    /// Pitch width in meters (touchline to touchline).
    pub pitch_height: f32,
    pub view_width: f32,
    pub view_height: f32,
    pub padding: f32,
}

impl Default for PitchSpace {
    fn default() -> Self {
        PitchSpace {
            pitch_width: 105.0,
            pitch_height: 68.0,
            view_width: 740.0,
            view_height: 500.0,
            padding: 6.0,
        }
    }
}

impl PitchSpace {
    /// Horizontal meter coordinate to viewport pixels. Out-of-range
    /// meters map to out-of-viewport pixels; clamping is the position
    /// generator's job.
    #[inline]
    pub fn px(&self, meters: f32) -> f32 {
        self.padding + (meters / self.pitch_width) * (self.view_width - 2.0 * self.padding)
    }

    #[inline]
    pub fn py(&self, meters: f32) -> f32 {
        self.padding + (meters / self.pitch_height) * (self.view_height - 2.0 * self.padding)
    }

    /// Meter length to pixel length along the x axis, for radii.
    #[inline]
    pub fn scale(&self, meters: f32) -> f32 {
        self.px(meters) - self.px(0.0)
    }

    /// Playable field width in pixels (viewport minus padding).
    #[inline]
    pub fn field_width(&self) -> f32 {
        self.view_width - 2.0 * self.padding
    }

    #[inline]
    pub fn field_height(&self) -> f32 {
        self.view_height - 2.0 * self.padding
    }
}
