use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::core::KnownCodes;

/// A warning from loading the properties file.
///
/// Loading is fail-open: the check continues with an empty code set, so the
/// warning is the only trace of the problem.
#[derive(Debug, Clone)]
pub struct PropertiesWarning {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct LoadPropertiesResult {
    pub codes: KnownCodes,
    pub warning: Option<PropertiesWarning>,
}

/// Load every declared message code from a `key=value` properties file.
///
/// Never fails: an unreadable file produces an empty set plus a warning,
/// which makes every referenced code show up as missing. Bytes that are not
/// valid UTF-8 (ISO-8859-1 values, for instance) are decoded lossily so
/// every line is still read.
pub fn load_properties(path: &Path) -> LoadPropertiesResult {
    let file_path = path.to_string_lossy().to_string();

    match read_properties(path) {
        Ok(content) => LoadPropertiesResult {
            codes: parse_properties_content(&content, &file_path),
            warning: None,
        },
        Err(e) => LoadPropertiesResult {
            codes: KnownCodes::new(file_path.clone()),
            warning: Some(PropertiesWarning {
                file_path,
                error: format!("{:#}", e),
            }),
        },
    }
}

fn read_properties(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read properties file: {:?}", path))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Extract the message code declared on one properties line.
///
/// The code is the text before the first `=`, trimmed. A line without `=`
/// counts as a code in full. Blank lines, `#`/`!` comments and lines with an
/// empty key declare nothing.
pub fn parse_key(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
        return None;
    }

    let key = match trimmed.split_once('=') {
        Some((key, _)) => key.trim(),
        None => trimmed,
    };

    if key.is_empty() { None } else { Some(key) }
}

/// Collect all codes from properties content held in memory.
pub fn parse_properties_content(content: &str, file_path: &str) -> KnownCodes {
    let mut codes = KnownCodes::new(file_path);
    codes.extend(content.lines().filter_map(parse_key));
    codes
}
