//! Display utilities for the ykneo-bitcoin CLI

use colored::Colorize;

/// Format a success message
pub(crate) fn success(message: &str) -> String {
    format!("✅ {}", message.green().bold())
}

/// Format a warning message
pub(crate) fn warning(message: &str) -> String {
    format!("⚠️  {}", message.yellow().bold())
}

/// Format a key-value section for important outputs
pub(crate) fn key_value_box(title: &str, items: Vec<(&str, String)>) -> String {
    let mut result = format!("{}", title.bold().underline());

    for (key, value) in items {
        result.push_str(&format!("\n  {}: {}", key.bold(), value));
    }

    result
}

/// Format a sensitive data warning
pub(crate) fn sensitive_data_warning() -> String {
    warning("THIS OUTPUT CONTAINS PRIVATE KEY MATERIAL - STORE IT SECURELY!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_value_box_lists_items() {
        colored::control::set_override(false);
        let rendered = key_value_box(
            "Applet",
            vec![("Version", "1.0.3".to_string()), ("Key loaded", "no".to_string())],
        );
        assert_eq!(rendered, "Applet\n  Version: 1.0.3\n  Key loaded: no");
    }
}
