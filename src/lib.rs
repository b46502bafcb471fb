//! Core library for the dojo language-fundamentals tour: an ordered
//! catalogue of demonstration sections, a deterministic line-by-line runner,
//! and the sequence/numeric/template primitives the demonstrations exercise.

pub mod catalog;
pub mod diagnostics;
pub mod numeric;
pub mod repl;
pub mod runner;
pub mod sequence;
pub mod template;
pub mod value;

pub use diagnostics::{DojoError, Result, TemplateError};
pub use repl::Repl;
pub use runner::{Demo, Run, Runner, Section};
pub use value::Value;
