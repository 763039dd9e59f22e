//! Fixed-tick color interpolation for highlight fades.

use crate::constants::FADE_TICK_MS;
use crate::core::color::Rgb;
use crate::core::element::{ElementHandle, VisMode};
use crate::core::highlight::painter_for;

/// Fade descriptor: how long the transition runs and how long to wait
/// before starting it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Fade {
    pub duration_ms: u32,
    pub offset_ms: u32,
}

impl Fade {
    pub const fn new(duration_ms: u32, offset_ms: u32) -> Self {
        Self {
            duration_ms,
            offset_ms,
        }
    }

    /// Zero duration means no interpolation path: the change applies at
    /// once and no timers run.
    pub const fn is_immediate(self) -> bool {
        self.duration_ms == 0
    }
}

/// Interpolation state of one running fade. Each call to [`FadeTrack::tick`]
/// yields the color to write for that tick; the final tick is exactly the
/// end color, after which the track yields `None`.
#[derive(Clone, Debug)]
pub struct FadeTrack {
    start: Rgb,
    end: Rgb,
    step_u: f32,
    u: f32,
    done: bool,
}

impl FadeTrack {
    /// `duration_ms / FADE_TICK_MS` interpolation steps, minimum one, so a
    /// duration shorter than a tick still passes through start and end.
    pub fn new(start: Rgb, end: Rgb, duration_ms: u32) -> Self {
        let steps = (duration_ms / FADE_TICK_MS).max(1);
        Self {
            start,
            end,
            step_u: 1.0 / steps as f32,
            u: 0.0,
            done: false,
        }
    }

    pub fn tick(&mut self) -> Option<Rgb> {
        if self.done {
            return None;
        }
        if self.u >= 1.0 {
            self.done = true;
            return Some(self.end);
        }
        let color = self.start.lerp(self.end, self.u);
        self.u += self.step_u;
        Some(color)
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

/// Start and end colors of a fade over `elements`.
///
/// The start is the first readable current color in the batch; the end is
/// the highlight color, or on removal (`None`) the color the elements
/// restore to. Returns `None` when the batch is empty or nothing is
/// readable, in which case no fade should run.
pub fn fade_endpoints(
    elements: &[ElementHandle],
    highlight: Option<Rgb>,
    mode: VisMode,
) -> Option<(Rgb, Rgb)> {
    let painter = painter_for(mode);
    let start = elements
        .iter()
        .find_map(|h| painter.read_color(&h.element.borrow()))?;
    let end = match highlight {
        Some(color) => color,
        None => elements
            .iter()
            .find_map(|h| painter.restore_target(&h.element.borrow()))?,
    };
    Some((start, end))
}
