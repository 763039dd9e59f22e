/// Timing and appearance constants for highlight fades.
///
/// These express intended behavior and keep magic numbers out of the code.
// Fixed interpolation tick (milliseconds)
pub const FADE_TICK_MS: u32 = 15;

// Opacity applied to a freshly highlighted shaded element
pub const HIGHLIGHT_OPACITY: f32 = 1.0;
