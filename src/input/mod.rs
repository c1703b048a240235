//! Navigation triggers: presentation keys and labelled command buttons.

use crate::provider::ProviderCommand;

/// Keys the presentation uses to change steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Tab,
    Space,
    PageUp,
    PageDown,
    Left,
    Up,
    Right,
    Down,
}

impl NavKey {
    /// Map a DOM-style key code, `None` for keys that do not navigate
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            9 => Some(NavKey::Tab),
            32 => Some(NavKey::Space),
            33 => Some(NavKey::PageUp),
            34 => Some(NavKey::PageDown),
            37 => Some(NavKey::Left),
            38 => Some(NavKey::Up),
            39 => Some(NavKey::Right),
            40 => Some(NavKey::Down),
            _ => None,
        }
    }

    pub fn is_forward(self) -> bool {
        matches!(
            self,
            NavKey::Tab | NavKey::Space | NavKey::PageDown | NavKey::Right | NavKey::Down
        )
    }
}

/// What a labelled button does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Label names a provider command (`Play`, `Pause`)
    Command(ProviderCommand),
    /// Advance the presentation into the addenda steps
    Addenda,
}

impl ButtonAction {
    pub fn from_label(label: &str) -> Option<Self> {
        if label.trim().eq_ignore_ascii_case("addenda") {
            return Some(ButtonAction::Addenda);
        }
        ProviderCommand::from_method_name(label).map(ButtonAction::Command)
    }
}
