//! Deterministic appointment colors.
//!
//! An appointment's color is derived from its identity so it stays the same
//! across re-renders and restarts. Only identity-less previews get a random
//! palette entry.

use rand::Rng;

/// Fixed, ordered palette. Reordering it changes every derived color.
pub const APPOINTMENT_PALETTE: [&str; 10] = [
    "#007AFF", // blue
    "#34C759", // green
    "#FF9500", // orange
    "#FF3B30", // red
    "#AF52DE", // purple
    "#FF2D55", // pink
    "#5AC8FA", // light blue
    "#FFCC00", // yellow
    "#5856D6", // indigo
    "#00C7BE", // teal
];

/// Fold `identity` into a hash with `h = unit + (h << 5) - h` per UTF-16
/// code unit. The shift works on the 32-bit truncation of `h` while the
/// subtraction keeps the full value, so the accumulator is an i64.
pub fn hash_identity(identity: &str) -> i64 {
    identity.encode_utf16().fold(0i64, |hash, unit| {
        let shifted = ((hash as i32) << 5) as i64;
        unit as i64 + shifted - hash
    })
}

/// Palette index for a non-empty identity
pub fn palette_index(identity: &str) -> usize {
    (hash_identity(identity).unsigned_abs() % APPOINTMENT_PALETTE.len() as u64) as usize
}

/// Color for an appointment identity; a missing or empty identity yields a
/// random palette entry.
pub fn color_for_identity(identity: Option<&str>) -> String {
    match identity {
        Some(id) if !id.is_empty() => APPOINTMENT_PALETTE[palette_index(id)].to_string(),
        _ => random_color(),
    }
}

pub fn random_color() -> String {
    let index = rand::thread_rng().gen_range(0..APPOINTMENT_PALETTE.len());
    APPOINTMENT_PALETTE[index].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_character_identities() {
        // '1' = 49, '2' = 50, '3' = 51
        assert_eq!(hash_identity("1"), 49);
        assert_eq!(color_for_identity(Some("1")), "#00C7BE");
        assert_eq!(color_for_identity(Some("2")), "#007AFF");
        assert_eq!(color_for_identity(Some("3")), "#34C759");
    }

    #[test]
    fn test_multi_character_hash() {
        assert_eq!(hash_identity("ab"), 3105);
        assert_eq!(hash_identity("today-1"), -1_150_560_091);
        assert_eq!(color_for_identity(Some("today-1")), "#34C759");
    }

    #[test]
    fn test_hash_exceeding_32_bits_keeps_full_value() {
        let id = "appointment-with-a-long-identity-string";
        assert_eq!(hash_identity(id), 7_243_737_172);
        assert_eq!(color_for_identity(Some(id)), "#FF9500");
    }

    #[test]
    fn test_same_identity_same_color() {
        for id in ["1", "today-1", "consulta-42", "Reunião"] {
            assert_eq!(color_for_identity(Some(id)), color_for_identity(Some(id)));
        }
    }

    #[test]
    fn test_missing_identity_returns_palette_entry() {
        for _ in 0..50 {
            let color = color_for_identity(None);
            assert!(APPOINTMENT_PALETTE.contains(&color.as_str()));
            let color = color_for_identity(Some(""));
            assert!(APPOINTMENT_PALETTE.contains(&color.as_str()));
        }
    }
}
