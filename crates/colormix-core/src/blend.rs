// ABOUTME: Aggregation strategies combining many colors into one.
// ABOUTME: Implements the mix, lowest, highest, and mix-saturate modes.

use crate::color::{Color, ColorHsl};

/// Strategy for combining a collection of colors into a single result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Per-channel arithmetic mean
    #[default]
    Mix,
    /// Per-channel minimum
    Lowest,
    /// Per-channel maximum
    Highest,
    /// Mean color re-saturated with the mean input saturation
    MixSaturate,
}

impl Mode {
    pub fn all() -> &'static [Mode] {
        &[Mode::Mix, Mode::Lowest, Mode::Highest, Mode::MixSaturate]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Mix => "mix",
            Mode::Lowest => "lowest",
            Mode::Highest => "highest",
            Mode::MixSaturate => "mix-saturate",
        }
    }

    pub fn from_label(label: &str) -> Option<Mode> {
        Mode::all().iter().copied().find(|mode| mode.label() == label)
    }

    /// Combine `colors` under this strategy.
    ///
    /// `colors` must be non-empty; the result for an empty slice is
    /// unspecified.
    pub fn apply(&self, colors: &[Color]) -> Blend {
        match self {
            Mode::Mix => mix(colors),
            Mode::Lowest => lowest(colors),
            Mode::Highest => highest(colors),
            Mode::MixSaturate => mix_saturate(colors),
        }
    }
}

/// An aggregation result: the combined color and its HSL view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blend {
    pub color: Color,
    pub hsl: ColorHsl,
}

impl Blend {
    fn new(color: Color) -> Self {
        Self {
            color,
            hsl: color.into(),
        }
    }
}

/// Per-channel arithmetic mean of `colors`, rounded to nearest.
pub fn mix(colors: &[Color]) -> Blend {
    let (mut red, mut green, mut blue, mut alpha) = (0u32, 0u32, 0u32, 0u32);
    for color in colors {
        red += color.red as u32;
        green += color.green as u32;
        blue += color.blue as u32;
        alpha += color.alpha as u32;
    }

    let count = colors.len() as f64;
    let mean = |sum: u32| (sum as f64 / count).round() as u8;

    Blend::new(Color::rgba(mean(red), mean(green), mean(blue), mean(alpha)))
}

/// The mean color with its saturation replaced by the mean of every
/// input's saturation, then materialized back through HSL.
pub fn mix_saturate(colors: &[Color]) -> Blend {
    let average = mix(colors).color;

    let total: f32 = colors.iter().map(|&color| ColorHsl::from(color).sat).sum();

    let mut hsl = ColorHsl::from(average);
    hsl.sat = total / colors.len() as f32;

    Blend {
        color: hsl.into(),
        hsl,
    }
}

/// Per-channel minimum across `colors`. The minima are taken channel by
/// channel, so the result may combine channels from different inputs.
pub fn lowest(colors: &[Color]) -> Blend {
    let mut low = Color::rgba(255, 255, 255, 255);
    for color in colors {
        low.red = low.red.min(color.red);
        low.green = low.green.min(color.green);
        low.blue = low.blue.min(color.blue);
        low.alpha = low.alpha.min(color.alpha);
    }

    Blend::new(low)
}

/// Per-channel maximum across `colors`, symmetric to [`lowest`].
pub fn highest(colors: &[Color]) -> Blend {
    let mut high = Color::rgba(0, 0, 0, 0);
    for color in colors {
        high.red = high.red.max(color.red);
        high.green = high.green.max(color.green);
        high.blue = high.blue.max(color.blue);
        high.alpha = high.alpha.max(color.alpha);
    }

    Blend::new(high)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix_rounds_half_away_from_zero() {
        let colors = [Color::rgba(0, 0, 0, 255), Color::rgba(255, 255, 255, 255)];
        let blend = mix(&colors);
        assert_eq!(blend.color, Color::rgba(128, 128, 128, 255));
    }

    #[test]
    fn mix_of_one_color_is_that_color() {
        let colors = [Color::rgba(10, 20, 30, 40)];
        assert_eq!(mix(&colors).color, colors[0]);
    }

    #[test]
    fn mix_hsl_view_matches_the_result_color() {
        let colors = [Color::rgba(0, 0, 0, 255), Color::rgba(255, 255, 255, 255)];
        let blend = mix(&colors);
        assert_eq!(blend.hsl, ColorHsl::from(blend.color));
        assert_eq!(blend.hsl.hue, 0.0);
        assert_eq!(blend.hsl.sat, 0.0);
        assert!((blend.hsl.light - 128.0 / 255.0).abs() < 0.001);
    }

    #[test]
    fn lowest_takes_each_channel_independently() {
        let colors = [Color::rgba(10, 200, 5, 255), Color::rgba(50, 20, 100, 200)];
        assert_eq!(lowest(&colors).color, Color::rgba(10, 20, 5, 200));
    }

    #[test]
    fn highest_takes_each_channel_independently() {
        let colors = [Color::rgba(10, 200, 5, 255), Color::rgba(50, 20, 100, 200)];
        assert_eq!(highest(&colors).color, Color::rgba(50, 200, 100, 255));
    }

    #[test]
    fn mix_saturate_rebuilds_from_the_adjusted_hsl() {
        // A lone saturated red averages to itself, but rebuilding through
        // HSL at lightness 0.5 lands on mid-gray while the HSL view keeps
        // the full saturation.
        let colors = [Color::rgb(255, 0, 0)];
        let blend = mix_saturate(&colors);

        assert_eq!(blend.color, Color::rgba(128, 128, 128, 255));
        assert!((blend.hsl.hue - 0.0).abs() < 0.001);
        assert!((blend.hsl.sat - 1.0).abs() < 0.001);
        assert!((blend.hsl.light - 0.5).abs() < 0.001);
    }

    #[test]
    fn mix_saturate_averages_input_saturations() {
        // Saturated red plus a gray: saturations 1.0 and 0.0 average to
        // 0.5, overriding the mean color's own saturation.
        let colors = [Color::rgb(255, 0, 0), Color::rgb(128, 128, 128)];
        let blend = mix_saturate(&colors);
        assert!((blend.hsl.sat - 0.5).abs() < 0.001);
    }

    #[test]
    fn mode_labels_round_trip() {
        for &mode in Mode::all() {
            assert_eq!(Mode::from_label(mode.label()), Some(mode));
        }
        assert_eq!(Mode::from_label("bogus"), None);
    }

    #[test]
    fn default_mode_is_mix() {
        assert_eq!(Mode::default(), Mode::Mix);
    }

    #[test]
    fn apply_dispatches_by_mode() {
        let colors = [Color::rgba(0, 0, 0, 255), Color::rgba(255, 255, 255, 255)];
        assert_eq!(Mode::Mix.apply(&colors), mix(&colors));
        assert_eq!(Mode::Lowest.apply(&colors), lowest(&colors));
        assert_eq!(Mode::Highest.apply(&colors), highest(&colors));
        assert_eq!(Mode::MixSaturate.apply(&colors), mix_saturate(&colors));
    }
}
