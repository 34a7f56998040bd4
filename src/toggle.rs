//! Show/hide state for a populated participants block.
//!
//! Two states, expanded and collapsed, starting expanded. The DOM layer
//! keeps one [`ToggleState`] per block and applies the accessors below after
//! every transition.

use serde::Serialize;

#[cfg(test)]
#[path = "toggle_test.rs"]
mod toggle_test;

/// Class added to the block container while collapsed.
pub const COLLAPSED_CLASS: &str = "collapsed";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ToggleState {
    pub collapsed: bool,
}

impl ToggleState {
    /// Initial state of every freshly built block.
    pub const EXPANDED: Self = Self { collapsed: false };
    pub const COLLAPSED: Self = Self { collapsed: true };

    /// Button text: the action the next click performs.
    pub fn label(self) -> &'static str {
        if self.collapsed { "Show" } else { "Hide" }
    }

    /// Value for the button's `aria-expanded` attribute.
    pub fn aria_expanded(self) -> &'static str {
        if self.collapsed { "false" } else { "true" }
    }
}

/// Flip between expanded and collapsed.
#[must_use]
pub fn toggle(state: ToggleState) -> ToggleState {
    ToggleState {
        collapsed: !state.collapsed,
    }
}
