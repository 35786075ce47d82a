/// Navigation command understood by the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nav {
    /// Move one item forward.
    Next,
    /// Move one item back.
    Previous,
}

/// The two navigation buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    /// The "previous" button.
    Previous,
    /// The "next" button.
    Next,
}

impl Control {
    fn nav(self) -> Nav {
        match self {
            Self::Previous => Nav::Previous,
            Self::Next => Nav::Next,
        }
    }
}

/// Keys the carousel reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    /// Activates a focused control.
    Enter,
    /// Activates a focused control.
    Space,
    /// Previous item while the region is focused.
    ArrowLeft,
    /// Next item while the region is focused.
    ArrowRight,
    /// Any key the carousel ignores.
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "Enter" => Self::Enter,
            " " | "Spacebar" => Self::Space,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            _ => Self::Other,
        }
    }
}

/// Which element holds keyboard focus when a key is pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Focus {
    /// One of the navigation buttons.
    Control(Control),
    /// The carousel region itself.
    Region,
    /// Anything else on the page.
    Elsewhere,
}

/// A raw user input event aimed at the carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Input {
    /// Pointer activation of a button.
    Click(Control),
    /// Key press with the current focus.
    KeyDown {
        /// Focused element.
        focus: Focus,
        /// Key pressed.
        key: Key,
    },
}

impl Input {
    /// Navigation command this input stands for, if any.
    ///
    /// Every modality funnels into the same two commands: clicks and Enter/Space on a
    /// focused button activate it; arrows move only while the region is focused.
    pub fn nav(self) -> Option<Nav> {
        match self {
            Self::Click(control) => Some(control.nav()),
            Self::KeyDown {
                focus: Focus::Control(control),
                key: Key::Enter | Key::Space,
            } => Some(control.nav()),
            Self::KeyDown {
                focus: Focus::Region,
                key: Key::ArrowLeft,
            } => Some(Nav::Previous),
            Self::KeyDown {
                focus: Focus::Region,
                key: Key::ArrowRight,
            } => Some(Nav::Next),
            Self::KeyDown { .. } => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/input.rs"]
mod tests;
