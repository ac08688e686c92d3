use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating document collection names
    /// Collections map onto table names, so only plain lowercase identifiers are accepted
    /// - Valid: "customorder", "custom_order", "orders2"
    /// - Invalid: "CustomOrder", "2orders", "orders-archive", "orders; drop"
    pub static ref COLLECTION_NAME_REGEX: Regex = Regex::new(r"^[a-z_][a-z0-9_]{0,62}$").unwrap();
}

/// Check that an uploaded filename can be used verbatim as a single path
/// component inside the upload directory.
///
/// Rejects empty names, `.` and `..`, and anything carrying a path separator
/// or NUL byte.
pub fn validate_upload_file_name(file_name: &str) -> Result<(), String> {
    if file_name.trim().is_empty() {
        return Err("File name must not be empty".to_string());
    }

    if file_name == "." || file_name == ".." {
        return Err(format!("File name '{}' is not allowed", file_name));
    }

    if file_name.contains(['/', '\\', '\0']) {
        return Err(format!(
            "File name '{}' must not contain path separators",
            file_name.escape_default()
        ));
    }

    Ok(())
}
