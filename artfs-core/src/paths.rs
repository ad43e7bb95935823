/// Convert OS-native separators to forward slashes.
pub fn to_slash(path: &str) -> String {
    path.replace('\\', "/")
}

/// Normalize caller-supplied path hints: trim surrounding whitespace,
/// convert separators to forward slashes, and drop entries that end up
/// empty. Order of survivors is preserved. Pure and total; applying it
/// twice yields the same result as applying it once.
pub fn normalize_prefetch_paths<S: AsRef<str>>(paths: &[S]) -> Vec<String> {
    let mut normalized = Vec::with_capacity(paths.len());
    for p in paths {
        let p = p.as_ref().trim();
        if p.is_empty() {
            continue;
        }
        normalized.push(to_slash(p));
    }
    normalized
}
