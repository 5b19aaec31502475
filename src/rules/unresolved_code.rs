//! Unresolved message code detection rule.
//!
//! Detects codes that still contain a `${...}` expression after macro
//! substitution and therefore cannot be checked statically:
//! - `${MACRO}` used in a file that never declares `MACRO`
//! - any other EL expression, e.g. `${item.label}`

use crate::{
    core::{CheckContext, ParsedTemplate, parsers::jsp::MACRO_PLACEHOLDER},
    issues::UnresolvedCodeIssue,
};

pub fn check_unresolved_code_issues(ctx: &CheckContext) -> Vec<UnresolvedCodeIssue> {
    check_unresolved_codes(&ctx.parsed_templates().templates)
}

pub fn check_unresolved_codes(templates: &[ParsedTemplate]) -> Vec<UnresolvedCodeIssue> {
    let mut issues = Vec::new();

    for template in templates {
        for extracted in template.codes.iter().filter(|c| !c.is_resolved()) {
            let hint = if extracted.code.contains(MACRO_PLACEHOLDER) {
                "declare the macro with <c:set var=\"MACRO\" value=\"...\" />"
            } else {
                "only ${MACRO} can be resolved; use a literal code"
            };

            issues.push(UnresolvedCodeIssue {
                context: extracted.context.clone(),
                code: extracted.code.clone(),
                hint: Some(hint.to_string()),
            });
        }
    }

    issues
}
