//! Pure transformations from discovered steps to runnable tasks.
//!
//! Both operations here are stateless: synthesis pairs a parsed step
//! with a project root, resolution rebuilds the command line from a
//! persisted definition alone. Neither touches the file system or the
//! build tool.

use crate::definition::{CommandLine, Task, TaskDefinition, TaskGroup};
use crate::steps::BuildStep;
use std::path::Path;
use zigtask_core::constants::{ARGS_SEPARATOR, BUILD_SUBCOMMAND, PROBLEM_MATCHER};
use zigtask_core::{CommandArguments, ProjectRoot};

/// Build a runnable task from a discovered step.
///
/// The designated default step is the only one flagged with a
/// [`TaskGroup::Build`] group so a host's "run the default build"
/// affordance can target it.
#[must_use]
pub fn synthesize(program: &Path, step: &BuildStep, root: &ProjectRoot) -> Task {
    let definition = TaskDefinition::new(&step.name, root.as_path());
    let command = resolve(program, &definition);
    Task {
        label: step.name.clone(),
        detail: (!step.description.is_empty()).then(|| step.description.clone()),
        group: step.is_default.then_some(TaskGroup::Build),
        problem_matcher: PROBLEM_MATCHER,
        definition,
        command,
    }
}

/// Reconstruct the executable command line from a persisted definition.
///
/// The step name is always passed explicitly, default step included, and
/// pass-through arguments follow a literal `--`. Nothing beyond the
/// definition itself is consulted: a definition whose step has since
/// disappeared still resolves, and the build tool reports the unknown
/// step when the task actually runs.
#[must_use]
pub fn resolve(program: &Path, definition: &TaskDefinition) -> CommandLine {
    let mut args = CommandArguments::from_vec(vec![
        BUILD_SUBCOMMAND.to_string(),
        definition.step.clone(),
    ]);
    if !definition.args.is_empty() {
        args.push(ARGS_SEPARATOR);
        args.extend(definition.args.iter().cloned());
    }
    CommandLine {
        program: program.to_path_buf(),
        args,
        working_directory: definition.working_directory.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn step(name: &str, is_default: bool, description: &str) -> BuildStep {
        BuildStep {
            name: name.to_string(),
            is_default,
            description: description.to_string(),
        }
    }

    #[test]
    fn synthesized_command_names_the_step_explicitly() {
        let root = ProjectRoot::new("/work/app");
        let task = synthesize(Path::new("zig"), &step("test", false, "Run unit tests"), &root);
        assert_eq!(task.command.args.as_slice(), &["build", "test"]);
        assert_eq!(task.command.working_directory, PathBuf::from("/work/app"));
        assert_eq!(task.label, "test");
        assert_eq!(task.detail.as_deref(), Some("Run unit tests"));
        assert_eq!(task.problem_matcher, "$zig");
    }

    #[test]
    fn default_step_carries_the_build_group() {
        let root = ProjectRoot::new("/work/app");
        let task = synthesize(Path::new("zig"), &step("install", true, "Install"), &root);
        assert_eq!(task.group, Some(TaskGroup::Build));

        let other = synthesize(Path::new("zig"), &step("run", false, "Run"), &root);
        assert_eq!(other.group, None);
    }

    #[test]
    fn empty_description_yields_no_detail() {
        let root = ProjectRoot::new("/work/app");
        let task = synthesize(Path::new("zig"), &step("docs", false, ""), &root);
        assert_eq!(task.detail, None);
    }

    #[test]
    fn resolution_round_trips_the_synthesized_definition() {
        let root = ProjectRoot::new("/work/app");
        let task = synthesize(
            Path::new("/usr/bin/zig"),
            &step("build-exe", true, "Build the executable"),
            &root,
        );
        let resolved = resolve(Path::new("/usr/bin/zig"), &task.definition);
        assert_eq!(resolved, task.command);
        assert_eq!(resolved.args.as_slice()[1], "build-exe");
        assert_eq!(resolved.working_directory, PathBuf::from("/work/app"));
    }

    #[test]
    fn pass_through_args_follow_a_separator() {
        let definition = TaskDefinition::new("run", "/work/app")
            .with_args(vec!["--port".to_string(), "8080".to_string()]);
        let command = resolve(Path::new("zig"), &definition);
        assert_eq!(
            command.args.as_slice(),
            &["build", "run", "--", "--port", "8080"]
        );
    }

    #[test]
    fn no_separator_without_pass_through_args() {
        let definition = TaskDefinition::new("run", "/work/app");
        let command = resolve(Path::new("zig"), &definition);
        assert_eq!(command.args.as_slice(), &["build", "run"]);
    }
}
