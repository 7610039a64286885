//! Positional substitution of arguments into a message template.
//!
//! Templates use `{}` placeholders; `{{` and `}}` stand for literal braces.
//! A template logged without arguments is used verbatim, braces included.

use std::borrow::Cow;

use serde_json::Value;

use crate::error::InterpolationError;

/// Substitutes `args` into `template`, in order.
///
/// String arguments are inserted without quotes; any other value uses its
/// compact JSON form.
pub fn interpolate(template: &str, args: &[Value]) -> Result<String, InterpolationError> {
    if args.is_empty() {
        return Ok(template.to_owned());
    }

    let mut out = String::with_capacity(template.len());
    let mut placeholders = 0;
    let mut chars = template.char_indices().peekable();

    while let Some((position, ch)) = chars.next() {
        match ch {
            '{' => match chars.peek() {
                Some((_, '{')) => {
                    chars.next();
                    out.push('{');
                }
                Some((_, '}')) => {
                    chars.next();
                    if let Some(arg) = args.get(placeholders) {
                        out.push_str(&display_arg(arg));
                    }
                    placeholders += 1;
                }
                _ => return Err(InterpolationError::UnbalancedBrace { position }),
            },
            '}' => match chars.peek() {
                Some((_, '}')) => {
                    chars.next();
                    out.push('}');
                }
                _ => return Err(InterpolationError::UnbalancedBrace { position }),
            },
            _ => out.push(ch),
        }
    }

    if placeholders != args.len() {
        return Err(InterpolationError::ArgumentCount {
            expected: placeholders,
            actual: args.len(),
        });
    }
    Ok(out)
}

fn display_arg(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(text) => Cow::Borrowed(text),
        other => Cow::Owned(other.to_string()),
    }
}
