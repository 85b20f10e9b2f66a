//! The seams between the machine and its host collaborators.
use crate::definitions::keypad;

#[cfg_attr(test, mockall::automock)]
/// The trait responsible for the display based code
pub trait DisplayCommands {
    /// Will present the given row-major pixel state.
    fn display(&mut self, pixels: &[bool]);
}

#[cfg_attr(test, mockall::automock)]
/// The trait responsible for reading the keyboard state of the host
pub trait KeyboardCommands {
    fn get_keyboard(&self) -> &[bool];
}

/// The hex keypad state of the machine.
///
/// Input is done with a hex keyboard that has 16 keys ranging `0-F`. The
/// `8`, `4`, `6`, and `2` keys are typically used for directional input.
/// Three opcodes are used to detect input. One skips an instruction if a
/// specific key is pressed, while another does the same if a specific key
/// is not pressed. The third waits for a key press, and then stores it in
/// one of the data registers.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Keypad {
    keys: [bool; keypad::SIZE],
}

impl Keypad {
    pub fn new() -> Self {
        Keypad::default()
    }

    /// Will release every key.
    pub fn reset(&mut self) {
        self.keys = [false; keypad::SIZE];
    }

    /// Will set the state of the given key.
    pub fn set_key(&mut self, key: usize, to: bool) {
        debug_assert!(key < keypad::SIZE);
        self.keys[key] = to;
    }

    /// Will toggle the given key.
    pub fn toggle_key(&mut self, key: usize) {
        self.set_key(key, !self.keys[key]);
    }

    /// Will write a full keyboard state into the keypad.
    pub fn set_keys(&mut self, keys: &[bool]) {
        // copy_from_slice checks the keys length during the copy
        self.keys.copy_from_slice(keys);
    }

    /// Will get the current state of all keys.
    pub fn get_keys(&self) -> &[bool] {
        &self.keys
    }

    /// Checks a single key.
    pub fn is_pressed(&self, key: usize) -> bool {
        self.keys[key]
    }

    /// The currently pressed key, if any.
    ///
    /// When several keys are held at once the highest-indexed one wins,
    /// matching the reference interpreter where the last write of an
    /// index-ascending scan survives.
    pub fn pressed_key(&self) -> Option<usize> {
        self.keys.iter().rposition(|&pressed| pressed)
    }
}
