//! Name canonicalization shared by categories and warehouses.

/// Upper-case the first character and leave the remainder untouched.
///
/// `"electronics"` becomes `"Electronics"`, `"eLECTRONICS"` becomes
/// `"ELECTRONICS"`. Only the leading character is transformed; a character whose
/// upper-case form is several characters long (e.g. `ß`) expands accordingly.
/// The empty string canonicalizes to itself.
pub fn canonicalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
