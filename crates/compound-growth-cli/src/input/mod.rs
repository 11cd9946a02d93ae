pub mod file;
pub mod stdin;

use serde::de::DeserializeOwned;

/// Resolve command input: an explicit file first, then piped stdin.
/// `None` means neither was supplied and the caller falls back to flags.
pub fn read_input<T: DeserializeOwned>(
    path: Option<&str>,
) -> Result<Option<T>, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        tracing::debug!(path, "reading input file");
        return Ok(Some(file::read_json(path)?));
    }
    match stdin::read_stdin()? {
        Some(data) => {
            tracing::debug!("reading input from stdin");
            Ok(Some(serde_json::from_value(data)?))
        }
        None => Ok(None),
    }
}
