//! Interactive state for hover/press/focus styling
//!
//! Each interactive element owns one [`Interactive`]. It tracks three flags
//! driven by pointer and focus events, and layers the matching overlays on
//! top of the base style. `disabled` is an input, not state: while it is set,
//! events that would turn a flag on are ignored, but events that turn a flag
//! off still apply so nothing gets stuck.

use crate::normalize::StyleOptions;
use crate::unified::normalize_map;
use crate::value::{InteractiveDeclaration, StyleMap};
use app_platform::Platform;
use serde::{Deserialize, Serialize};

/// Normalized base style and state overlays
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractiveStyles {
    /// Always applied
    pub base: StyleMap,
    /// Applied while hovered
    pub hover: Option<StyleMap>,
    /// Applied while pressed
    pub active: Option<StyleMap>,
    /// Applied while focused
    pub focus: Option<StyleMap>,
    /// Applied while disabled
    pub disabled: Option<StyleMap>,
}

impl InteractiveStyles {
    /// Styles with only a base bag
    pub fn new(base: StyleMap) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    /// Normalize every bag of an interactive declaration
    pub fn from_declaration(decl: &InteractiveDeclaration, options: &StyleOptions) -> Self {
        let normalize = |bag: &Option<StyleMap>| bag.as_ref().map(|m| normalize_map(m, options));
        Self {
            base: normalize_map(&decl.base, options),
            hover: normalize(&decl.hover),
            active: normalize(&decl.active),
            focus: normalize(&decl.focus),
            disabled: normalize(&decl.disabled),
        }
    }

    /// Set the hover overlay
    pub fn hover(mut self, style: StyleMap) -> Self {
        self.hover = Some(style);
        self
    }

    /// Set the pressed overlay
    pub fn active(mut self, style: StyleMap) -> Self {
        self.active = Some(style);
        self
    }

    /// Set the focus overlay
    pub fn focus(mut self, style: StyleMap) -> Self {
        self.focus = Some(style);
        self
    }

    /// Set the disabled overlay
    pub fn disabled(mut self, style: StyleMap) -> Self {
        self.disabled = Some(style);
        self
    }
}

/// Interaction flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractiveState {
    /// Pointer is over the element
    pub is_hovered: bool,
    /// Pointer or touch is held down on the element
    pub is_pressed: bool,
    /// Element has focus
    pub is_focused: bool,
}

/// Events an interactive element reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InteractionEvent {
    /// Pointer entered (web)
    MouseEnter,
    /// Pointer left (web)
    MouseLeave,
    /// Mouse button pressed (web)
    MouseDown,
    /// Mouse button released (web)
    MouseUp,
    /// Touch started (native)
    PressIn,
    /// Touch ended (native)
    PressOut,
    /// Gained focus
    Focus,
    /// Lost focus
    Blur,
}

const WEB_EVENTS: &[InteractionEvent] = &[
    InteractionEvent::MouseEnter,
    InteractionEvent::MouseLeave,
    InteractionEvent::MouseDown,
    InteractionEvent::MouseUp,
    InteractionEvent::Focus,
    InteractionEvent::Blur,
];

const NATIVE_EVENTS: &[InteractionEvent] = &[
    InteractionEvent::PressIn,
    InteractionEvent::PressOut,
    InteractionEvent::Focus,
    InteractionEvent::Blur,
];

/// Computed style plus the flags that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractiveOutput {
    /// Layered style
    pub style: StyleMap,
    /// Current flags
    pub state: InteractiveState,
}

/// Interaction state machine for one element
#[derive(Debug, Clone, Default)]
pub struct Interactive {
    styles: InteractiveStyles,
    state: InteractiveState,
    disabled: bool,
}

impl Interactive {
    /// Create an enabled element with no active flags
    pub fn new(styles: InteractiveStyles) -> Self {
        Self {
            styles,
            state: InteractiveState::default(),
            disabled: false,
        }
    }

    /// Set the disabled prop (builder style)
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Update the disabled prop; flags are left as they are
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Whether the element is disabled
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Replace the styles (e.g. after a theme change)
    pub fn set_styles(&mut self, styles: InteractiveStyles) {
        self.styles = styles;
    }

    /// Events to wire up on a platform
    pub fn handlers(platform: Platform) -> &'static [InteractionEvent] {
        match platform {
            Platform::Native => NATIVE_EVENTS,
            Platform::Web | Platform::Server => WEB_EVENTS,
        }
    }

    /// Apply one event
    pub fn handle(&mut self, event: InteractionEvent) {
        match event {
            InteractionEvent::MouseEnter => self.mouse_enter(),
            InteractionEvent::MouseLeave => self.mouse_leave(),
            InteractionEvent::MouseDown | InteractionEvent::PressIn => self.press_in(),
            InteractionEvent::MouseUp | InteractionEvent::PressOut => self.press_out(),
            InteractionEvent::Focus => self.focus(),
            InteractionEvent::Blur => self.blur(),
        }
    }

    /// Pointer entered
    pub fn mouse_enter(&mut self) {
        if !self.disabled {
            self.state.is_hovered = true;
        }
    }

    /// Pointer left; also releases a press so the element cannot stay active
    pub fn mouse_leave(&mut self) {
        self.state.is_hovered = false;
        self.state.is_pressed = false;
    }

    /// Mouse down
    pub fn mouse_down(&mut self) {
        self.press_in();
    }

    /// Mouse up
    pub fn mouse_up(&mut self) {
        self.press_out();
    }

    /// Press started
    pub fn press_in(&mut self) {
        if !self.disabled {
            self.state.is_pressed = true;
        }
    }

    /// Press ended
    pub fn press_out(&mut self) {
        self.state.is_pressed = false;
    }

    /// Focus gained
    pub fn focus(&mut self) {
        if !self.disabled {
            self.state.is_focused = true;
        }
    }

    /// Focus lost
    pub fn blur(&mut self) {
        self.state.is_focused = false;
    }

    /// Current flags
    pub fn state(&self) -> InteractiveState {
        self.state
    }

    /// Base style with the applicable overlays layered in order:
    /// hover, active, focus, then disabled
    pub fn computed_style(&self) -> StyleMap {
        let mut style = self.styles.base.clone();
        let enabled = !self.disabled;

        let layers = [
            (enabled && self.state.is_hovered, &self.styles.hover),
            (enabled && self.state.is_pressed, &self.styles.active),
            (enabled && self.state.is_focused, &self.styles.focus),
            (self.disabled, &self.styles.disabled),
        ];

        for (applies, layer) in layers {
            if let (true, Some(layer)) = (applies, layer) {
                style.extend(layer.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
        }

        style
    }

    /// Computed style and flags together
    pub fn output(&self) -> InteractiveOutput {
        InteractiveOutput {
            style: self.computed_style(),
            state: self.state,
        }
    }
}
