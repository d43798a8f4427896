//! Phone number normalization.

/// Reduces a phone-like string to the digit-only key used by the contact
/// directory.
///
/// 1. Every character that isn't an ASCII digit is removed.
/// 2. A leading `1` is dropped when more than 10 digits remain, folding
///    North-American `+1` numbers to their 10-digit local form.
///
/// Anything else passes through, including short numbers and strings with
/// no digits at all (which clean to `""`).
///
/// ```
/// use chattab::parsing::clean_phone;
///
/// assert_eq!(clean_phone("+1 (555) 123-4567"), "5551234567");
/// assert_eq!(clean_phone("555-123-4567"), "5551234567");
/// assert_eq!(clean_phone("123"), "123");
/// ```
pub fn clean_phone(raw: &str) -> String {
    let mut digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() > 10 && digits.starts_with('1') {
        digits.remove(0);
    }
    digits
}
