use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::manipulator::Key;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Keyboard bindings mapping free-flight movement keys to key codes.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format (`"KeyW"`,
/// `"Space"`, ...). Serialized as `snake_case` key names:
/// ```toml
/// [keybindings.bindings]
/// forward = "ArrowUp"
/// ```
pub struct KeybindingOptions {
    /// Maps movement key → key string.
    pub bindings: HashMap<Key, String>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (Key::Forward, "KeyW".into()),
            (Key::Left, "KeyA".into()),
            (Key::Backward, "KeyS".into()),
            (Key::Right, "KeyD".into()),
            (Key::Up, "KeyE".into()),
            (Key::Down, "KeyQ".into()),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the movement key bound to a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<Key> {
        self.bindings
            .iter()
            .find(|(_, bound)| bound.as_str() == key)
            .map(|(action, _)| *action)
    }
}
