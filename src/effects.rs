//! The entry point the host viewer calls to highlight graph elements.

use crate::constants::FADE_TICK_MS;
use crate::core::{
    apply_highlight, fade_endpoints, painter_for, CancelFlag, ElementHandle, Fade, FadeRegistry,
    FadeTrack, Rgb, VisMode,
};
use crate::timers;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Highlight/fade effect driver. The host keeps one of these alive, flips
/// its mode on 2D/3D toggle, and calls [`HighlightFx::highlight_elements`]
/// from selection and search handlers.
pub struct HighlightFx {
    mode: VisMode,
    registry: Rc<RefCell<FadeRegistry<CancelFlag>>>,
}

impl HighlightFx {
    pub fn new(mode: VisMode) -> Self {
        Self {
            mode,
            registry: Rc::new(RefCell::new(FadeRegistry::new())),
        }
    }

    pub fn mode(&self) -> VisMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: VisMode) {
        self.mode = mode;
    }

    /// Cancel the in-flight fade for a highlight type, if any.
    pub fn cancel(&mut self, highlight_type: &str) {
        self.registry.borrow_mut().cancel(highlight_type);
    }

    /// Highlight (`Some(color)`) or un-highlight (`None`) a batch of
    /// elements, immediately or as a timed fade.
    ///
    /// With `fade.duration_ms == 0` the change applies at once and no handle
    /// is returned. Otherwise a fade starts after `fade.offset_ms`, ticking
    /// every 15 ms, and the returned promise resolves once interpolation
    /// begins, not once it completes. Starting a fade cancels any in-flight
    /// fade for the same `highlight_type`.
    ///
    /// `outline` emphasis is drawn by the host renderer; the flag is unused
    /// here.
    pub fn highlight_elements(
        &mut self,
        elements: &[ElementHandle],
        highlight_type: &str,
        highlight: Option<Rgb>,
        _outline: bool,
        fade: Fade,
    ) -> Option<js_sys::Promise> {
        if fade.is_immediate() {
            apply_highlight(elements, highlight, self.mode);
            return None;
        }

        let Some((start, end)) = fade_endpoints(elements, highlight, self.mode) else {
            log::debug!("fade '{}': no readable color, skipping", highlight_type);
            return None;
        };
        log::debug!(
            "fade '{}': {} -> {} over {}ms (+{}ms)",
            highlight_type,
            start.to_hex(),
            end.to_hex(),
            fade.duration_ms,
            fade.offset_ms
        );

        let key = highlight_type.to_owned();
        let delay = CancelFlag::new();
        let tick = CancelFlag::new();
        self.registry.borrow_mut().begin(&key, delay.clone());

        // Promise::new runs the executor synchronously; capture resolve.
        let mut resolve_fn: Option<js_sys::Function> = None;
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            resolve_fn = Some(resolve);
        });

        let elements: SmallVec<[ElementHandle; 8]> = elements.iter().cloned().collect();
        let registry = self.registry.clone();
        let mode = self.mode;
        let mut track = FadeTrack::new(start, end, fade.duration_ms);
        spawn_local(async move {
            timers::sleep(fade.offset_ms).await;
            if delay.is_cancelled() {
                return;
            }
            registry.borrow_mut().promote(&key, tick.clone());
            // resolves when interpolation begins, not when it completes
            if let Some(resolve) = &resolve_fn {
                _ = resolve.call0(&JsValue::NULL);
            }
            let painter = painter_for(mode);
            loop {
                timers::sleep(FADE_TICK_MS).await;
                if tick.is_cancelled() {
                    return;
                }
                match track.tick() {
                    Some(color) => {
                        for handle in &elements {
                            painter.write_color(&mut handle.element.borrow_mut(), color);
                        }
                    }
                    None => break,
                }
            }
            registry.borrow_mut().finish(&key);
        });

        Some(promise)
    }
}
