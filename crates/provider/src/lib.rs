//! Task discovery and synthesis for the Zig build system.
//!
//! This crate turns the step listing of `zig build --list-steps` into
//! host-runnable tasks. Discovery walks a set of project roots, invokes
//! the build tool once per root, parses the plain-text listing, and
//! synthesizes one task per step. A host persists only the minimal
//! [`TaskDefinition`] and hands it back later for resolution into the
//! identical command line, without re-running discovery.
//!
//! The host-facing surface is the two-operation [`TaskProvider`]
//! capability trait; everything else is plumbing behind it.

pub mod config;
pub mod definition;
pub mod invoke;
pub mod provider;
pub mod steps;
pub mod synthesize;

pub use self::{
    config::ToolConfig,
    definition::{CommandLine, Task, TaskDefinition, TaskGroup},
    invoke::BuildTool,
    provider::{TaskProvider, ZigTaskProvider},
    steps::{parse_step_list, BuildStep},
    synthesize::{resolve, synthesize},
};
