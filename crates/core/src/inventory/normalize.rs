//! Casing transforms applied to every write.

/// Title-cases a string word by word.
///
/// A cased letter that directly follows another cased letter is lowercased,
/// every other cased letter is uppercased. Anything that is not a cased
/// letter (spaces, digits, punctuation) starts a new word.
///
/// ```
/// use pantry_core::inventory::title_case;
///
/// assert_eq!(title_case("almond milk"), "Almond Milk");
/// assert_eq!(title_case("o'neil"), "O'Neil");
/// ```
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut previous_is_cased = false;

    for c in s.chars() {
        let is_cased = c.is_lowercase() || c.is_uppercase();
        if is_cased {
            if previous_is_cased {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
        } else {
            out.push(c);
        }
        previous_is_cased = is_cased;
    }

    out
}

/// Lowercases a string (full Unicode mapping).
pub fn lowercase(s: &str) -> String {
    s.to_lowercase()
}
