use thiserror::Error;

/// Errors raised while rendering a verb template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unknown verb `%{0}`")]
    UnknownVerb(char),
    #[error("template ends inside a verb")]
    Truncated,
    #[error("missing argument for verb `%{0}`")]
    MissingArgument(char),
    #[error("{0} argument(s) left unused by template")]
    UnusedArguments(usize),
    #[error("verb `%{verb}` cannot render {type_name}")]
    Mismatch { verb: char, type_name: String },
}

/// Unified error type for the dojo toolchain. Every variant is fatal: the
/// first one raised terminates the run.
#[derive(Debug, Error)]
pub enum DojoError {
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("cannot assign {literal} to {target}: negative literal")]
    InvalidLiteral { literal: i64, target: &'static str },
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
    #[error("unknown section `{0}`")]
    UnknownSection(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DojoError>;
