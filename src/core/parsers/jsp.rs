//! JSP template parser.
//!
//! Extracts the two constructs the checker cares about:
//!
//! ```jsp
//! <c:set var="MACRO" value="Account" />
//! <spring:message code="${MACRO}.title" />
//! ```
//!
//! Tags are located with a regex and their attributes split by a small
//! tokenizer, so attribute order, whitespace around `=` and the quote style
//! do not matter. Tags may span several lines.

use std::{collections::HashSet, fs, path::Path, sync::LazyLock};

use anyhow::{Context, Result};
use regex::Regex;

use crate::core::{SourceContext, SourceLocation};

/// Placeholder replaced by the file's macro value.
pub const MACRO_PLACEHOLDER: &str = "${MACRO}";

const MACRO_TAG: &str = "c:set";
const MACRO_VAR_NAME: &str = "MACRO";
const MESSAGE_TAG: &str = "spring:message";
const CODE_ATTRIBUTE: &str = "code";

static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<(c:set|spring:message)(\s(?:"[^"]*"|'[^']*'|[^>"'])*)?/?>"#).unwrap()
});

static ATTRIBUTE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap()
});

/// A message code referenced by a `<spring:message>` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedCode {
    /// Attribute value as written, e.g. `${MACRO}.title`.
    pub raw: String,
    /// Value after macro substitution, e.g. `Account.title`.
    pub code: String,
    /// Points at the first character of the attribute value.
    pub context: SourceContext,
}

impl ExtractedCode {
    /// False when a `${...}` expression survived substitution, i.e. the
    /// file uses `${MACRO}` without declaring it, or uses another expression.
    pub fn is_resolved(&self) -> bool {
        !self.code.contains("${")
    }
}

/// Everything extracted from one template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTemplate {
    pub file_path: String,
    /// Value of the first valid `MACRO` declaration.
    pub macro_value: Option<String>,
    /// Distinct codes in document order. Repeats keep the first position.
    pub codes: Vec<ExtractedCode>,
}

struct Attribute<'a> {
    name: &'a str,
    value: &'a str,
    /// Byte offset of the value in the template.
    offset: usize,
}

struct Tag<'a> {
    name: &'a str,
    attributes: Vec<Attribute<'a>>,
}

impl<'a> Tag<'a> {
    fn attribute(&self, name: &str) -> Option<&Attribute<'a>> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

pub fn parse_template_file(path: &Path, display_path: &str) -> Result<ParsedTemplate> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read template file: {:?}", path))?;
    Ok(parse_template_source(&content, display_path))
}

pub fn parse_template_source(content: &str, file_path: &str) -> ParsedTemplate {
    let tags = scan_tags(content);
    let macro_value = find_macro_value(&tags);
    let line_index = build_line_index(content);

    let mut seen: HashSet<String> = HashSet::new();
    let mut codes = Vec::new();

    for attr in tags
        .iter()
        .filter(|tag| tag.name == MESSAGE_TAG)
        .filter_map(|tag| tag.attribute(CODE_ATTRIBUTE))
    {
        let raw = strip_line_breaks(attr.value);
        if !is_code_literal(&raw) {
            continue;
        }

        let code = match &macro_value {
            Some(value) if raw.contains(MACRO_PLACEHOLDER) => raw.replace(MACRO_PLACEHOLDER, value),
            _ => raw.clone(),
        };

        if !seen.insert(code.clone()) {
            continue;
        }

        let context = source_context(content, &line_index, attr.offset, file_path);
        codes.push(ExtractedCode { raw, code, context });
    }

    ParsedTemplate {
        file_path: file_path.to_string(),
        macro_value,
        codes,
    }
}

fn scan_tags(content: &str) -> Vec<Tag<'_>> {
    TAG_REGEX
        .captures_iter(content)
        .filter_map(|caps| {
            let name = caps.get(1)?.as_str();
            let attributes = caps
                .get(2)
                .map(|body| parse_attributes(body.as_str(), body.start()))
                .unwrap_or_default();
            Some(Tag { name, attributes })
        })
        .collect()
}

fn parse_attributes(body: &str, body_offset: usize) -> Vec<Attribute<'_>> {
    ATTRIBUTE_REGEX
        .captures_iter(body)
        .filter_map(|caps| {
            let name = caps.get(1)?.as_str();
            let value = caps.get(2).or_else(|| caps.get(3))?;
            Some(Attribute {
                name,
                value: value.as_str(),
                offset: body_offset + value.start(),
            })
        })
        .collect()
}

/// First `<c:set var="MACRO" value="...">` whose value is purely alphabetic.
fn find_macro_value(tags: &[Tag<'_>]) -> Option<String> {
    tags.iter()
        .filter(|tag| tag.name == MACRO_TAG)
        .filter(|tag| {
            tag.attribute("var")
                .is_some_and(|var| var.value == MACRO_VAR_NAME)
        })
        .filter_map(|tag| tag.attribute("value"))
        .map(|value| strip_line_breaks(value.value))
        .find(|value| !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic()))
}

/// Codes are limited to letters, dots and the `${...}` placeholder syntax.
fn is_code_literal(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphabetic() || matches!(c, '.' | '$' | '{' | '}'))
}

fn strip_line_breaks(value: &str) -> String {
    value.replace(['\r', '\n'], "")
}

/// Byte offsets where each line starts. Line 1 starts at offset 0.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

fn source_context(
    content: &str,
    line_index: &[usize],
    offset: usize,
    file_path: &str,
) -> SourceContext {
    // 0-based index of the line containing `offset`
    let line = match line_index.binary_search(&offset) {
        Ok(line) => line,
        Err(line) => line - 1,
    };
    let line_start = line_index[line];
    let line_end = line_index
        .get(line + 1)
        .map(|next| next - 1)
        .unwrap_or(content.len());

    let col = content[line_start..offset].chars().count() + 1;
    let source_line = content[line_start..line_end].trim_end_matches('\r');

    SourceContext::new(SourceLocation::new(file_path, line + 1, col), source_line)
}
