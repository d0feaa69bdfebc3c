use std::time::Duration;

/// Default canvas width in pixels.
pub const DEFAULT_WIDTH: u32 = 600;
/// Default canvas height in pixels.
pub const DEFAULT_HEIGHT: u32 = 600;
/// Default speed: no delay between turtle actions.
pub const DEFAULT_SPEED: u8 = 100;
/// Default delay per speed step below the maximum.
pub const DEFAULT_STEP: Duration = Duration::from_millis(10);

/// Canvas size and pacing for a run.
///
/// # Example
/// ```
/// use turtle_logo::settings::Settings;
///
/// let settings = Settings { speed: 40,
///                           ..Settings::default() };
/// assert_eq!(settings.width, 600);
/// assert_eq!(settings.speed, 40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Canvas width in pixels.
    pub width:  u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Speed from `0` (halted) to `100` (no delay).
    pub speed:  u8,
    /// Delay added per speed step below `100`.
    pub step:   Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self { width:  DEFAULT_WIDTH,
               height: DEFAULT_HEIGHT,
               speed:  DEFAULT_SPEED,
               step:   DEFAULT_STEP, }
    }
}
