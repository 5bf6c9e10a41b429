//! Display name and username validation mirroring gallery constraints.
//!
//! Keeping these rules in sync with the gallery's `Username` type ensures
//! generated photographers are always valid when consumed by the gallery.
//!
//! # Validation Rules
//!
//! Display names:
//! - Length between 3 and 32 characters
//! - Letters, digits, spaces, and underscores only
//! - Must not be whitespace-only
//!
//! Usernames:
//! - Length between 3 and 30 characters
//! - Lowercase ASCII letters, digits, and underscores only

/// Minimum allowed length for a display name.
pub const DISPLAY_NAME_MIN: usize = 3;

/// Maximum allowed length for a display name.
pub const DISPLAY_NAME_MAX: usize = 32;

/// Minimum allowed length for a username.
pub const USERNAME_MIN: usize = 3;

/// Maximum allowed length for a username.
pub const USERNAME_MAX: usize = 30;

/// Validates a display name.
///
/// # Examples
///
/// ```
/// use example_data::is_valid_display_name;
///
/// assert!(is_valid_display_name("Ada Lovelace"));
/// assert!(!is_valid_display_name("ab"));
/// assert!(!is_valid_display_name("O'Brien"));
/// assert!(!is_valid_display_name("   "));
/// ```
#[must_use]
pub fn is_valid_display_name(name: &str) -> bool {
    let length = name.chars().count();
    if !(DISPLAY_NAME_MIN..=DISPLAY_NAME_MAX).contains(&length) {
        return false;
    }
    if name.trim().is_empty() {
        return false;
    }
    name.chars().all(is_valid_display_name_char)
}

/// Validates a username.
///
/// # Examples
///
/// ```
/// use example_data::is_valid_username;
///
/// assert!(is_valid_username("ada_lovelace"));
/// assert!(!is_valid_username("Ada"));
/// assert!(!is_valid_username("ad"));
/// ```
#[must_use]
pub fn is_valid_username(username: &str) -> bool {
    let length = username.chars().count();
    (USERNAME_MIN..=USERNAME_MAX).contains(&length)
        && username.chars().all(is_valid_username_char)
}

const fn is_valid_display_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' ' || c == '_'
}

const fn is_valid_username_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'
}

/// Replaces characters a display name may not contain with underscores.
///
/// Length constraints are not enforced here.
#[must_use]
pub(crate) fn sanitize_display_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if is_valid_display_name_char(c) {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Derives a username stem from a display name.
///
/// Keeps lowercase ASCII letters and digits, dropping everything else, and
/// truncates the result so a numeric suffix still fits.
#[must_use]
pub(crate) fn username_stem(display_name: &str) -> String {
    display_name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .take(USERNAME_MAX - 6)
        .collect()
}

#[cfg(test)]
mod tests {
    //! Covers display name and username validation behaviour.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Ada", true)]
    #[case("Ada Lovelace", true)]
    #[case("user_123", true)]
    #[case("ab", false)]
    #[case("", false)]
    #[case("O'Brien", false)]
    #[case("Marie-Claire", false)]
    #[case("   ", false)]
    fn display_names(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_valid_display_name(name), expected);
    }

    #[rstest]
    #[case("ada", true)]
    #[case("ada_lovelace", true)]
    #[case("lens42", true)]
    #[case("Ada", false)]
    #[case("ad", false)]
    #[case("ada.lovelace", false)]
    #[case("ada lovelace", false)]
    fn usernames(#[case] username: &str, #[case] expected: bool) {
        assert_eq!(is_valid_username(username), expected);
    }

    #[test]
    fn rejects_usernames_exceeding_max_length() {
        assert!(!is_valid_username(&"a".repeat(USERNAME_MAX + 1)));
    }

    #[test]
    fn sanitize_replaces_invalid_characters() {
        assert_eq!(sanitize_display_name("a-b'c@d!e"), "a_b_c_d_e");
    }

    #[test]
    fn username_stem_strips_punctuation_and_case() {
        assert_eq!(username_stem("Marie-Claire O'Brien"), "marieclaireobrien");
    }

    #[test]
    fn username_stem_leaves_room_for_suffix() {
        let stem = username_stem(&"A".repeat(64));
        assert_eq!(stem.len(), USERNAME_MAX - 6);
    }
}
