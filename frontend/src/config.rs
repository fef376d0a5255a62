use std::time::Duration;

/// Hero headline word cycle.
pub const WORD_ROTATION_PERIOD: Duration = Duration::from_millis(2_000);

pub const TESTIMONIAL_ROTATION_PERIOD: Duration = Duration::from_millis(5_000);

/// How long manual navigation keeps a rotation from advancing on its own.
pub const ROTATION_RESUME_DELAY: Duration = Duration::from_millis(10_000);

/// Scroll distance over which the hero overlay reaches full dimming.
pub const HERO_DIM_DISTANCE: f64 = 500.0;
pub const HERO_DIM_MAX: f64 = 0.6;
