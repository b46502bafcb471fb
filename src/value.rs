use std::fmt;

use crate::diagnostics::TemplateError;

/// A display-ready value produced by a demonstration. Type names follow the
/// ecosystem the demonstrations describe (`int`, `float64`, `string`, ...),
/// not the host language.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Int8(i8),
    Uint(u64),
    Float32(f32),
    Float64(f64),
    Str(String),
    List(Vec<Value>),
}

impl Value {
    pub fn bool(value: bool) -> Self {
        Self::Bool(value)
    }

    pub fn int(value: i64) -> Self {
        Self::Int(value)
    }

    pub fn int8(value: i8) -> Self {
        Self::Int8(value)
    }

    pub fn uint(value: u64) -> Self {
        Self::Uint(value)
    }

    pub fn float32(value: f32) -> Self {
        Self::Float32(value)
    }

    pub fn float64(value: f64) -> Self {
        Self::Float64(value)
    }

    pub fn str(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    pub fn list(values: Vec<Value>) -> Self {
        Self::List(values)
    }

    pub fn ints(values: impl IntoIterator<Item = i64>) -> Self {
        Self::List(values.into_iter().map(Value::int).collect())
    }

    pub fn strs<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::List(values.into_iter().map(Value::str).collect())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Int8(_) => "int8",
            Value::Uint(_) => "uint",
            Value::Float32(_) => "float32",
            Value::Float64(_) => "float64",
            Value::Str(_) => "string",
            Value::List(values) => match values.first() {
                Some(Value::Int(_)) => "[]int",
                Some(Value::Int8(_)) => "[]int8",
                Some(Value::Uint(_)) => "[]uint",
                Some(Value::Float32(_)) => "[]float32",
                Some(Value::Float64(_)) => "[]float64",
                Some(Value::Str(_)) => "[]string",
                Some(Value::Bool(_)) => "[]bool",
                _ => "[]",
            },
        }
    }

    /// Quoted rendering. Quoting applies per type: strings gain double
    /// quotes, everything else keeps its default form.
    pub fn quoted(&self) -> String {
        match self {
            Value::Str(s) => format!("{s:?}"),
            Value::List(values) => {
                let mut out = String::from("[");
                for (idx, value) in values.iter().enumerate() {
                    if idx > 0 {
                        out.push(' ');
                    }
                    out.push_str(&value.quoted());
                }
                out.push(']');
                out
            }
            other => other.to_string(),
        }
    }

    /// Fixed-point rendering for float values at the given precision.
    pub fn fixed(&self, precision: usize) -> Result<String, TemplateError> {
        match self {
            Value::Float32(n) => Ok(format!("{n:.precision$}")),
            Value::Float64(n) => Ok(format!("{n:.precision$}")),
            other => Err(TemplateError::Mismatch {
                verb: 'f',
                type_name: other.type_name().to_string(),
            }),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Int8(n) => write!(f, "{n}"),
            Value::Uint(n) => write!(f, "{n}"),
            Value::Float32(n) => write!(f, "{n}"),
            Value::Float64(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::List(values) => {
                write!(f, "[")?;
                for (idx, value) in values.iter().enumerate() {
                    if idx > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            }
        }
    }
}
