/// Canonical form of raw RUT text: thousands separators and whitespace
/// removed, check letter lower-cased.
/// Example: "12.345.678-K" -> "12345678-k"
pub fn normalize_rut(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '.' && !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}
