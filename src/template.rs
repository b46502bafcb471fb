use std::{iter::Peekable, str::Chars};

use crate::{diagnostics::TemplateError, value::Value};

/// A parsed `%`-specifier: optional flags, width, precision, and the verb
/// character itself.
struct Spec {
    zero: bool,
    left: bool,
    width: Option<usize>,
    precision: Option<usize>,
    verb: char,
}

/// Renders `template` against `args`, verb by verb.
///
/// Supported verbs: `%v` (default form), `%q` (quoted form), `%T` (type
/// name), `%s` (string form), `%d` (integer form), `%f` (fixed-point float,
/// default precision 6), and `%%` for a literal percent. Precision is given
/// `%0.1f`-style. Argument-count and verb/type mismatches are fatal.
pub fn sprintf(template: &str, args: &[Value]) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    let mut next_arg = 0usize;

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        if chars.peek() == Some(&'%') {
            chars.next();
            out.push('%');
            continue;
        }
        let spec = parse_spec(&mut chars)?;
        let arg = args
            .get(next_arg)
            .ok_or(TemplateError::MissingArgument(spec.verb))?;
        next_arg += 1;
        out.push_str(&render(&spec, arg)?);
    }

    if next_arg < args.len() {
        return Err(TemplateError::UnusedArguments(args.len() - next_arg));
    }
    Ok(out)
}

fn parse_spec(chars: &mut Peekable<Chars<'_>>) -> Result<Spec, TemplateError> {
    let mut spec = Spec {
        zero: false,
        left: false,
        width: None,
        precision: None,
        verb: '\0',
    };

    loop {
        match chars.peek() {
            Some('0') if !spec.zero => spec.zero = true,
            Some('-') if !spec.left => spec.left = true,
            _ => break,
        }
        chars.next();
    }
    spec.width = scan_number(chars);
    if chars.peek() == Some(&'.') {
        chars.next();
        spec.precision = Some(scan_number(chars).unwrap_or(0));
    }

    match chars.next() {
        Some(verb @ ('v' | 'q' | 'T' | 's' | 'd' | 'f')) => {
            spec.verb = verb;
            Ok(spec)
        }
        Some(other) => Err(TemplateError::UnknownVerb(other)),
        None => Err(TemplateError::Truncated),
    }
}

fn scan_number(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut digits = String::new();
    while let Some(ch) = chars.peek() {
        if !ch.is_ascii_digit() {
            break;
        }
        digits.push(*ch);
        chars.next();
    }
    digits.parse().ok()
}

fn render(spec: &Spec, arg: &Value) -> Result<String, TemplateError> {
    let rendered = match spec.verb {
        'v' => arg.to_string(),
        'q' => arg.quoted(),
        'T' => arg.type_name().to_string(),
        's' => match arg {
            Value::Str(s) => s.clone(),
            other => {
                return Err(TemplateError::Mismatch {
                    verb: 's',
                    type_name: other.type_name().to_string(),
                });
            }
        },
        'd' => match arg {
            Value::Int(_) | Value::Int8(_) | Value::Uint(_) => arg.to_string(),
            other => {
                return Err(TemplateError::Mismatch {
                    verb: 'd',
                    type_name: other.type_name().to_string(),
                });
            }
        },
        'f' => arg.fixed(spec.precision.unwrap_or(6))?,
        other => return Err(TemplateError::UnknownVerb(other)),
    };
    Ok(pad(spec, rendered))
}

fn pad(spec: &Spec, rendered: String) -> String {
    let Some(width) = spec.width else {
        return rendered;
    };
    let count = rendered.chars().count();
    if count >= width {
        return rendered;
    }
    let fill = width - count;
    if spec.left {
        let mut out = rendered;
        out.extend(std::iter::repeat(' ').take(fill));
        out
    } else {
        let pad_char = if spec.zero { '0' } else { ' ' };
        let mut out = String::new();
        out.extend(std::iter::repeat(pad_char).take(fill));
        out.push_str(&rendered);
        out
    }
}
