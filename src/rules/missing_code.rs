//! Missing message code detection rule.
//!
//! Detects codes referenced by `<spring:message>` tags that are not declared
//! in the message properties file.

use rayon::prelude::*;

use crate::{
    core::{CheckContext, KnownCodes, ParsedTemplate},
    issues::MissingCodeIssue,
};

pub fn check_missing_code_issues(ctx: &CheckContext) -> Vec<MissingCodeIssue> {
    check_missing_codes(&ctx.parsed_templates().templates, &ctx.known_codes)
}

/// Check every resolved code against the known-code set.
///
/// Codes are already deduplicated per file, so a code missing from two
/// files yields two issues and one missing twice in a file yields one.
/// Unresolved codes are left to the unresolved-code rule.
///
/// # Returns
/// Issues in template order, then document order within each template.
pub fn check_missing_codes(
    templates: &[ParsedTemplate],
    known_codes: &KnownCodes,
) -> Vec<MissingCodeIssue> {
    templates
        .par_iter()
        .flat_map_iter(|template| {
            template
                .codes
                .iter()
                .filter(|extracted| extracted.is_resolved())
                .filter(|extracted| !known_codes.contains(&extracted.code))
                .map(|extracted| MissingCodeIssue {
                    context: extracted.context.clone(),
                    code: extracted.code.clone(),
                    raw: (extracted.raw != extracted.code).then(|| extracted.raw.clone()),
                })
        })
        .collect()
}
