use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Init(InitSummary),
}

#[derive(Debug)]
pub struct InitSummary {
    /// False when a config file already existed and nothing was written.
    pub created: bool,
}

/// Result of running jspcheck commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
    /// All issues found during the check, sorted by location.
    /// Empty for non-check commands.
    pub issues: Vec<Issue>,
    /// Number of template files that were scanned.
    pub templates_checked: usize,
    /// Number of distinct codes declared in the properties file.
    pub known_code_count: usize,
    /// Paths the template scan could not access.
    pub skipped_count: usize,
}
