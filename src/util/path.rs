//! Path helpers

/// Expand `~`, `$VAR` and `${VAR}` in a path-like string.
///
/// Returns the input unchanged when a variable cannot be resolved.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
