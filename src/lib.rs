// ============================================================================
// Strict linting - Dangerous or non-idiomatic practices are forbidden
// ============================================================================

#![deny(warnings)]                    // All warnings are treated as errors
#![deny(unsafe_code)]                 // Unsafe code is forbidden
#![deny(missing_docs)]                // All public items must be documented
#![deny(dead_code)]                   // Unused code is forbidden
#![deny(non_camel_case_types)]        // Types must follow CamelCase convention

// Additional strictness - Leave nothing unchecked
#![deny(unused_imports)]              // Unused imports are forbidden
#![deny(unused_variables)]            // Unused variables are forbidden
#![deny(unused_must_use)]             // Must handle Result and Option explicitly
#![deny(non_snake_case)]              // Variables and functions must be snake_case
#![deny(non_upper_case_globals)]      // Constants must be UPPER_CASE
#![deny(nonstandard_style)]           // Non-standard code style is forbidden
#![forbid(unsafe_op_in_unsafe_fn)]    // Unsafe ops in unsafe fns are forbidden

// Clippy lints (warnings only)
#![warn(clippy::all)]                 // All standard Clippy lints
#![warn(clippy::pedantic)]            // Very strict Clippy lints
#![warn(clippy::nursery)]             // Experimental lints
#![warn(clippy::unwrap_used)]         // unwrap() warning
#![warn(clippy::expect_used)]         // expect() warning
#![warn(clippy::panic)]               // panic!() warning
#![warn(clippy::print_stdout)]        // println!() warning
#![warn(clippy::todo)]                // TODO warning
#![warn(clippy::unimplemented)]       // unimplemented!() warning
#![warn(clippy::missing_const_for_fn)] // Force const when possible
#![warn(clippy::unwrap_in_result)]    // unwrap() in Result warning
#![warn(clippy::module_inception)]    // Module with same name as crate warning
#![warn(clippy::redundant_clone)]     // Useless clones warning
#![warn(clippy::shadow_unrelated)]    // Shadowing unrelated variables warning
#![warn(clippy::too_many_arguments)]  // Limit function arguments
#![warn(clippy::cognitive_complexity)] // Limit cognitive complexity

// Safety and robustness lints
#![deny(overflowing_literals)]        // Overflowing literals are forbidden
#![deny(arithmetic_overflow)]         // Arithmetic overflow is forbidden

// ============================================================================
// Crate Documentation
// ============================================================================

//! # stackdiff
//!
//! Compares a locally packaged AWS CloudFormation template against the
//! template currently deployed in a stack and reports the structural
//! differences.
//!
//! ## Overview
//!
//! An invocation runs two steps in strict order:
//!
//! 1. **Fetch**: download the processed template of the deployed stack and
//!    store it, pretty-printed, as
//!    `.serverless/cloudformation-template-update-stack.org.json`
//! 2. **Diff**: compare it with the locally packaged
//!    `.serverless/cloudformation-template-update-stack.json`
//!
//! The stack name is `<service>-<stage>` unless `provider.stackName` is set,
//! with a `-r` suffix for legacy stacks.
//!
//! ## Modules
//!
//! - [`config`]: Service definition parsing and setting resolution
//! - [`stack`]: Stack identity and template download
//! - [`diff`]: Structural template diff
//! - [`runner`]: Invocation handler composing fetch and diff
//! - [`cli`]: Command-line interface
//!
//! ## Example
//!
//! ```yaml
//! service: billing
//!
//! provider:
//!   name: aws
//!   stage: prod
//!   region: eu-west-1
//! ```
//!
//! ```text
//! $ sls package && stackdiff diff
//! ~ Resources.BillingTable.Properties.BillingMode: "PROVISIONED" => "PAY_PER_REQUEST"
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod runner;
pub mod stack;

// ============================================================================
// Re-exports
// ============================================================================

pub use cli::{Cli, Commands, OutputFormatter};
pub use config::{ConfigParser, ConfigValidator, ResolvedSettings, ServiceConfig, TemplatePaths};
pub use diff::{compute_diff, DiffEngine, DifferenceReport};
pub use error::{DiffError, FetchError, Result, StackDiffError};
pub use runner::DiffRunner;
pub use stack::{ClientConfig, CloudFormationSource, StackIdentity, TemplateFetcher, TemplateSource};
