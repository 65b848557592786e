// Numeric keyboard shortcuts for the vehicle and route pickers.
// Returns Some(0..=9) if the string is a number key; None otherwise
#[must_use]
pub fn numeric_key_to_index(key: &str) -> Option<u8> {
    let mut chars = key.chars();
    let first = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    first
        .to_digit(10)
        .and_then(|d| u8::try_from(d).ok())
}

// Parses KeyboardEvent.code such as "Digit3" or "Numpad5"
#[must_use]
pub fn numeric_code_to_index(code: &str) -> Option<u8> {
    let digit = code
        .strip_prefix("Digit")
        .or_else(|| code.strip_prefix("Numpad"))?;
    numeric_key_to_index(digit)
}

/// Shortcut decoded from a number key on a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKey {
    /// Zero confirms the current choice.
    Confirm,
    /// One-based keys pick the matching item (stored zero-based).
    Pick(usize),
}

/// Decode a key press into a picker shortcut, trying `key` before `code`.
#[must_use]
pub fn picker_key(key: &str, code: &str) -> Option<PickerKey> {
    let n = numeric_key_to_index(key).or_else(|| numeric_code_to_index(code))?;
    Some(if n == 0 {
        PickerKey::Confirm
    } else {
        PickerKey::Pick(usize::from(n - 1))
    })
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn key_maps() {
        assert_eq!(numeric_key_to_index("0"), Some(0));
        assert_eq!(numeric_key_to_index("9"), Some(9));
        assert_eq!(numeric_key_to_index("x"), None);
        assert_eq!(numeric_key_to_index("12"), None);
    }

    #[test]
    fn code_maps() {
        assert_eq!(numeric_code_to_index("Digit0"), Some(0));
        assert_eq!(numeric_code_to_index("Numpad5"), Some(5));
        assert_eq!(numeric_code_to_index("KeyA"), None);
        assert_eq!(numeric_code_to_index("F1"), None);
    }

    #[test]
    fn picker_keys() {
        assert_eq!(picker_key("0", "Digit0"), Some(PickerKey::Confirm));
        assert_eq!(picker_key("3", "Digit3"), Some(PickerKey::Pick(2)));
        assert_eq!(picker_key("!", "Digit1"), Some(PickerKey::Pick(0)));
        assert_eq!(picker_key("a", "KeyA"), None);
    }
}
