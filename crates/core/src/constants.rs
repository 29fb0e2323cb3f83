/// Constants used throughout the zigtask codebase
// Task provider identity
pub const TASK_TYPE: &str = "zig";
pub const PROBLEM_MATCHER: &str = "$zig";

// Build tool invocation words
pub const DEFAULT_TOOL: &str = "zig";
pub const BUILD_SUBCOMMAND: &str = "build";
pub const LIST_STEPS_FLAG: &str = "--list-steps";
pub const ARGS_SEPARATOR: &str = "--";

// Environment variable names
pub const ZIG_PATH_VAR: &str = "ZIGTASK_ZIG";
pub const LOG_VAR: &str = "ZIGTASK_LOG";
