//! ==============================================================================
//! hooks.rs - reactive helpers tied to a component's lifetime
//! ==============================================================================

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::ev;
use leptos::prelude::*;
use shared::config::DESKTOP_MIN_WIDTH;

// ==============================================================================
// mount guard
// ==============================================================================

/// goes dead when the owning view is torn down
///
/// async work spawned by a view checks this before writing results back, so
/// fetches that outlive the view are dropped instead of applied.
#[derive(Debug, Clone)]
pub struct MountGuard {
    alive: Arc<AtomicBool>,
}

impl MountGuard {
    /// create a guard scoped to the current reactive owner
    pub fn new() -> Self {
        let guard = Self::detached();
        let alive = Arc::clone(&guard.alive);
        on_cleanup(move || alive.store(false, Ordering::Release));
        guard
    }

    fn detached() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }
}

// ==============================================================================
// viewport
// ==============================================================================

pub fn is_desktop_width(width: f64) -> bool {
    width >= DESKTOP_MIN_WIDTH
}

fn viewport_is_desktop() -> bool {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .is_some_and(is_desktop_width)
}

/// true while the window is at least desktop width
pub fn use_is_desktop() -> ReadSignal<bool> {
    let (is_desktop, set_is_desktop) = signal(viewport_is_desktop());

    let handle = window_event_listener(ev::resize, move |_| {
        set_is_desktop.set(viewport_is_desktop());
    });
    on_cleanup(move || handle.remove());

    is_desktop
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint() {
        assert!(!is_desktop_width(375.0));
        assert!(!is_desktop_width(767.9));
        assert!(is_desktop_width(768.0));
        assert!(is_desktop_width(1440.0));
    }

    #[test]
    fn test_guard_clones_share_state() {
        let guard = MountGuard::detached();
        let clone = guard.clone();
        assert!(clone.is_alive());

        guard.alive.store(false, Ordering::Release);
        assert!(!clone.is_alive());
    }
}
