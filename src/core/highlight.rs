//! Immediate highlight application and the 2D/3D painter seam.

use crate::constants::HIGHLIGHT_OPACITY;
use crate::core::color::Rgb;
use crate::core::element::{ElementHandle, GraphElement, VisMode};

/// Mode-specific reads and writes of an element's rendered color. The fade
/// loop and the immediate applicator share this contract so interpolation
/// behaves identically in both modes.
pub trait ElementPainter {
    /// Current rendered color, `None` when the element has nothing to read
    /// (missing render object, unparseable color string).
    fn read_color(&self, el: &GraphElement) -> Option<Rgb>;

    /// Write a color without touching the previous-state bookkeeping. Used
    /// by the fade loop on every tick.
    fn write_color(&self, el: &mut GraphElement, color: Rgb);

    /// Apply or remove a highlight immediately, saving or restoring the
    /// previous color/opacity. `None` removes.
    fn apply(&self, el: &mut GraphElement, highlight: Option<Rgb>);

    /// Color an element returns to when its highlight is removed; the end
    /// color of a removal fade.
    fn restore_target(&self, el: &GraphElement) -> Option<Rgb>;
}

/// 2D mode: colors are `#rrggbb` strings on the element itself.
pub struct FlatPainter;

impl ElementPainter for FlatPainter {
    fn read_color(&self, el: &GraphElement) -> Option<Rgb> {
        Rgb::from_hex(&el.color)
    }

    fn write_color(&self, el: &mut GraphElement, color: Rgb) {
        el.color = color.to_hex();
    }

    fn apply(&self, el: &mut GraphElement, highlight: Option<Rgb>) {
        match highlight {
            Some(color) => {
                el.prev_color = Some(el.color.clone());
                el.color = color.to_hex();
            }
            None => {
                if let Some(prev) = el.prev_color.take() {
                    // normalize through a parse, keep the raw string if that fails
                    el.color = Rgb::from_hex(&prev).map(Rgb::to_hex).unwrap_or(prev);
                }
                // nothing saved: the element already shows its base color
            }
        }
    }

    fn restore_target(&self, el: &GraphElement) -> Option<Rgb> {
        match &el.prev_color {
            Some(prev) => Rgb::from_hex(prev),
            None => Rgb::from_hex(&el.color),
        }
    }
}

/// 3D mode: colors live on a shared material; the element's own `color`
/// string keeps the base color. Elements without a render object are
/// skipped.
pub struct ShadedPainter;

impl ElementPainter for ShadedPainter {
    fn read_color(&self, el: &GraphElement) -> Option<Rgb> {
        el.render_obj.as_ref().map(|m| m.borrow().color)
    }

    fn write_color(&self, el: &mut GraphElement, color: Rgb) {
        if let Some(obj) = &el.render_obj {
            obj.borrow_mut().color = color;
        }
    }

    fn apply(&self, el: &mut GraphElement, highlight: Option<Rgb>) {
        let Some(obj) = el.render_obj.clone() else {
            return;
        };
        let mut mat = obj.borrow_mut();
        match highlight {
            Some(color) => {
                el.prev_opacity = Some(mat.opacity);
                mat.color = color;
                mat.opacity = HIGHLIGHT_OPACITY;
            }
            None => {
                if let Some(base) = Rgb::from_hex(&el.color) {
                    mat.color = base;
                }
                if let Some(prev) = el.prev_opacity.take() {
                    mat.opacity = prev;
                }
            }
        }
    }

    fn restore_target(&self, el: &GraphElement) -> Option<Rgb> {
        Rgb::from_hex(&el.color)
    }
}

/// Painter for the active rendering mode.
pub fn painter_for(mode: VisMode) -> &'static dyn ElementPainter {
    match mode {
        VisMode::TwoD => &FlatPainter,
        VisMode::ThreeD => &ShadedPainter,
    }
}

/// Immediate (no fade) highlight toggle across a batch of elements.
/// `None` removes the highlight and restores saved state.
pub fn apply_highlight(elements: &[ElementHandle], highlight: Option<Rgb>, mode: VisMode) {
    let painter = painter_for(mode);
    for handle in elements {
        painter.apply(&mut handle.element.borrow_mut(), highlight);
    }
}
