//! Per-highlight-type tracking of in-flight fades.
//!
//! The registry is explicit state owned by the caller, keyed by highlight
//! type. Each entry holds the cancellable handles of one fade: the initial
//! delay and, once interpolation has begun, the repeating tick. Invariant:
//! at most one active fade per type; starting a new fade for a type cancels
//! and replaces the prior one.

use fnv::FnvHashMap;
use std::cell::Cell;
use std::rc::Rc;

/// A cancellable suspension point of a running fade.
pub trait FadeTimer {
    /// Stop the timer; must be idempotent.
    fn cancel(&mut self);
}

/// Shared cancellation flag checked by a fade task after each suspension
/// point. The UI thread owns both ends, so a plain `Cell` suffices.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Rc<Cell<bool>>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

impl FadeTimer for CancelFlag {
    fn cancel(&mut self) {
        self.0.set(true);
    }
}

/// Handles of one in-flight fade.
#[derive(Debug)]
pub struct FadeHandles<T> {
    pub delay: T,
    pub tick: Option<T>,
}

impl<T: FadeTimer> FadeHandles<T> {
    fn cancel_all(&mut self) {
        self.delay.cancel();
        if let Some(tick) = &mut self.tick {
            tick.cancel();
        }
    }
}

/// Fade bookkeeping, one entry per highlight-type key.
#[derive(Debug, Default)]
pub struct FadeRegistry<T: FadeTimer> {
    active: FnvHashMap<String, FadeHandles<T>>,
}

impl<T: FadeTimer> FadeRegistry<T> {
    pub fn new() -> Self {
        Self {
            active: FnvHashMap::default(),
        }
    }

    /// Register the delay handle of a new fade, cancelling and replacing any
    /// fade already in flight for `key`.
    pub fn begin(&mut self, key: &str, delay: T) {
        let entry = FadeHandles { delay, tick: None };
        if let Some(mut old) = self.active.insert(key.to_owned(), entry) {
            log::debug!("fade '{}': replacing in-flight fade", key);
            old.cancel_all();
        }
    }

    /// The delay fired and interpolation begins: install the tick handle,
    /// cancelling a stale one if the entry somehow still carries it.
    pub fn promote(&mut self, key: &str, tick: T) {
        if let Some(entry) = self.active.get_mut(key) {
            if let Some(mut stale) = entry.tick.replace(tick) {
                stale.cancel();
            }
        }
    }

    /// Interpolation ran to completion; drop the entry.
    pub fn finish(&mut self, key: &str) {
        self.active.remove(key);
    }

    /// Cancel an in-flight fade, if any.
    pub fn cancel(&mut self, key: &str) {
        if let Some(mut entry) = self.active.remove(key) {
            entry.cancel_all();
        }
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
