/// Positional argument `index` (1-based, after the program name), or `default`
pub fn get_arg(index: usize, default: &str) -> String {
    std::env::args().nth(index).unwrap_or_else(|| default.to_string())
}

/// Positional argument `index`, if given
pub fn get_optional_arg(index: usize) -> Option<String> {
    std::env::args().nth(index)
}

/// Default constant names are upper case, `mqmd_default` finds `MQMD_DEFAULT`
pub fn normalise_default_name(name: &str) -> String {
    let upper = name.trim().to_uppercase();
    if upper.ends_with("_DEFAULT") { upper } else { format!("{upper}_DEFAULT") }
}
