use unidecode::unidecode;

/// Comparison key for artist names typed by users or returned by the catalog.
pub fn clean_str(input: &str) -> String {
    unidecode(input) // Convert Unicode to ASCII
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

pub fn same_name(a: &str, b: &str) -> bool {
    a == b || clean_str(a) == clean_str(b)
}
