use anyhow::Result;

use super::super::args::CheckCommand;
use super::{CommandResult, CommandSummary, helper::finish};

use crate::{
    core::CheckContext,
    issues::Issue,
    rules::{
        missing_code::check_missing_code_issues, unresolved_code::check_unresolved_code_issues,
    },
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.args.common)?;

    let mut all_issues: Vec<Issue> = Vec::new();

    let issues = check_missing_code_issues(&ctx);
    all_issues.extend(issues.into_iter().map(Issue::MissingCode));

    let issues = check_unresolved_code_issues(&ctx);
    all_issues.extend(issues.into_iter().map(Issue::UnresolvedCode));

    let read_errors = &ctx.parsed_templates().read_errors;
    all_issues.extend(read_errors.iter().map(|i| Issue::ReadError(i.clone())));

    let mut result = finish(
        CommandSummary::Check,
        all_issues,
        ctx.files.len(),
        ctx.known_codes.len(),
        true,
    );
    result.skipped_count = ctx.skipped_count;
    Ok(result)
}
