use std::fmt;

use thiserror::Error;

use crate::escape::escape;

/// Textual form given to an absent value, matching how a missing JSON field prints.
const ABSENT_VALUE: &str = "null";

/// A value interpolated between two literal segments.
///
/// Only [`Value::Text`] is escaped. The distinction is made on the value's type, not on
/// where it came from, so `Other` is not a safe channel for untrusted input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Other(String),
}

impl Value {
    /// Non-string value rendered through its `Display` form, unescaped.
    pub fn other(value: impl fmt::Display) -> Self {
        Self::Other(value.to_string())
    }

    fn write_to(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(&escape(text)),
            Self::Other(text) => out.push_str(text),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Self::Other(ABSENT_VALUE.to_string()),
        }
    }
}

macro_rules! non_string_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::other(value)
                }
            }
        )*
    };
}

non_string_value!(bool, char, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("expected {expected} literal segments for {values} values, got {literals}")]
    Arity {
        literals: usize,
        values: usize,
        expected: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedHtml(String);

impl RenderedHtml {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RenderedHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<RenderedHtml> for String {
    fn from(value: RenderedHtml) -> Self {
        value.0
    }
}

/// Literal segments interleaved with values, always one more literal than values.
///
/// ```
/// use markup::Fragment;
///
/// let html = Fragment::new("<b>").value("<script>", "</b>").render();
/// assert_eq!(html.as_str(), "<b>&lt;script&gt;</b>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    literals: Vec<String>,
    values: Vec<Value>,
}

impl Fragment {
    pub fn new(first_literal: impl Into<String>) -> Self {
        Self {
            literals: vec![first_literal.into()],
            values: Vec::new(),
        }
    }

    pub fn value(mut self, value: impl Into<Value>, next_literal: impl Into<String>) -> Self {
        self.values.push(value.into());
        self.literals.push(next_literal.into());
        self
    }

    pub fn render(&self) -> RenderedHtml {
        interleave(&self.literals, &self.values)
    }
}

/// Builds `L[0] + f(V[0]) + L[1] + ... + f(V[n-1]) + L[n]`, escaping only string values.
pub fn render_fragment<S: AsRef<str>>(
    literals: &[S],
    values: &[Value],
) -> Result<RenderedHtml, TemplateError> {
    if literals.len() != values.len() + 1 {
        return Err(TemplateError::Arity {
            literals: literals.len(),
            values: values.len(),
            expected: values.len() + 1,
        });
    }
    Ok(interleave(literals, values))
}

fn interleave<S: AsRef<str>>(literals: &[S], values: &[Value]) -> RenderedHtml {
    let mut out = String::new();
    let mut values = values.iter();
    for (index, literal) in literals.iter().enumerate() {
        if index > 0 {
            if let Some(value) = values.next() {
                value.write_to(&mut out);
            }
        }
        out.push_str(literal.as_ref());
    }
    RenderedHtml(out)
}

#[cfg(test)]
#[path = "tests/template_tests.rs"]
mod tests;
