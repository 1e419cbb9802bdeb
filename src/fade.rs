use std::time::{Duration, Instant};

use iced::Color;

use crate::frame::DigitPosition;
use crate::pattern::MAX_CELLS;

/// Length of every cell crossfade.
pub const CROSSFADE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq)]
struct CellFade {
    from: Color,
    started: Instant,
}

impl CellFade {
    fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / CROSSFADE.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// In-flight crossfades, one slot per cell of each matrix.
#[derive(Debug, Clone, Default)]
pub struct FadeBoard {
    cells: [[Option<CellFade>; MAX_CELLS]; 4],
}

impl FadeBoard {
    /// Start fading a cell from `from` towards whatever it renders next.
    /// Equal colors clear the slot instead.
    pub fn begin(&mut self, pos: DigitPosition, index: usize, from: Color, to: Color, now: Instant) {
        let Some(slot) = self.slot_mut(pos, index) else {
            return;
        };
        *slot = if from == to {
            None
        } else {
            Some(CellFade { from, started: now })
        };
    }

    /// Drop any fade on the cell so it renders its target immediately.
    pub fn cancel(&mut self, pos: DigitPosition, index: usize) {
        if let Some(slot) = self.slot_mut(pos, index) {
            *slot = None;
        }
    }

    /// Color to draw for a cell whose resting color is `target`.
    pub fn displayed(&self, pos: DigitPosition, index: usize, target: Color, now: Instant) -> Color {
        match self.cells[pos.index()].get(index).copied().flatten() {
            Some(fade) => blend(fade.from, target, fade.progress(now)),
            None => target,
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.cells
            .iter()
            .flatten()
            .flatten()
            .any(|fade| fade.progress(now) < 1.0)
    }

    /// Forget fades that have run their full length.
    pub fn prune(&mut self, now: Instant) {
        for slot in self.cells.iter_mut().flatten() {
            if slot.is_some_and(|fade| fade.progress(now) >= 1.0) {
                *slot = None;
            }
        }
    }

    fn slot_mut(&mut self, pos: DigitPosition, index: usize) -> Option<&mut Option<CellFade>> {
        self.cells[pos.index()].get_mut(index)
    }
}

/// Ease-in-out interpolation between two colors, `t` in `0.0..=1.0`.
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    if t <= 0.0 {
        return from;
    }
    if t >= 1.0 {
        return to;
    }
    let eased = t * t * (3.0 - 2.0 * t);
    let mix = |a: f32, b: f32| a + (b - a) * eased;
    Color {
        r: mix(from.r, to.r),
        g: mix(from.g, to.g),
        b: mix(from.b, to.b),
        a: mix(from.a, to.a),
    }
}
