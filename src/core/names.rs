//! Validation of user-entered directory names.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::FORBIDDEN_NAME_CHARS;
use crate::core::error::NameError;

fn forbidden() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let class = format!("[{}]", regex::escape(FORBIDDEN_NAME_CHARS));
        Regex::new(&class).expect("escaped character class")
    })
}

/// Check a new directory name before it is sent to the server.
///
/// Returns the trimmed name on success.
pub fn check_dir_name(name: &str) -> Result<&str, NameError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name == "." || name == ".." {
        return Err(NameError::Reserved(name.to_string()));
    }
    if let Some(m) = forbidden().find(name) {
        let c = m.as_str().chars().next().unwrap_or('/');
        return Err(NameError::IllegalChar(c));
    }
    Ok(name)
}
