use secrecy::SecretString;

/// Read an environment variable, treating empty or whitespace-only
/// values as unset
pub(crate) fn var(name: &str) -> Option<String> {
    std::env::var(name).ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        }
    })
}

/// Read a secret-valued environment variable
pub(crate) fn secret(name: &str) -> Option<SecretString> {
    var(name).map(SecretString::from)
}

/// Read a boolean flag, falling back to `default` when unset or
/// unrecognized
pub(crate) fn flag(name: &str, default: bool) -> bool {
    var(name).map_or(default, |value| match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        other => {
            tracing::warn!("unrecognized value for {name}: {other}, using default");
            default
        }
    })
}
