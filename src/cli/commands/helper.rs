use super::{CommandResult, CommandSummary};
use crate::{
    cli::report::compare_issues,
    issues::{Issue, Severity},
};

pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    templates_checked: usize,
    known_code_count: usize,
    exit_on_errors: bool,
) -> CommandResult {
    issues.sort_by(compare_issues);

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    CommandResult {
        summary,
        error_count,
        warning_count,
        exit_on_errors,
        issues,
        templates_checked,
        known_code_count,
        skipped_count: 0,
    }
}
