use crate::domain::models::{OverlayState, OverlayTrigger};
use crate::shared::logging::log_overlay_transition;
use dioxus::prelude::*;

/// Mobile drawer state owned by the layout
///
/// The layout is the only writer; children get `EventHandler`s that call
/// [`OverlayHandle::dispatch`].
#[derive(Clone, Copy, PartialEq)]
pub struct OverlayHandle {
    state: Signal<OverlayState>,
}

impl OverlayHandle {
    pub fn state(&self) -> OverlayState {
        (self.state)()
    }

    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }

    pub fn dispatch(&mut self, trigger: OverlayTrigger) {
        let from = *self.state.peek();
        let to = from.apply(trigger);
        log_overlay_transition(from, to, trigger);

        // Skip the write so idempotent triggers don't re-render subscribers
        if from != to {
            self.state.set(to);
        }
    }

    pub fn open(&mut self) {
        self.dispatch(OverlayTrigger::MenuButton);
    }
}

/// Hook to create the drawer state, closed on every page load
pub fn use_overlay() -> OverlayHandle {
    let state = use_signal(OverlayState::default);
    OverlayHandle { state }
}
