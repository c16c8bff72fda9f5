//! Raw logging arguments and their message rendering
//!
//! A log call may carry several values of different kinds. Each one is
//! converted to text with a fixed rule set and the results are joined with a
//! single space to form the record message.

use serde::Serialize;
use std::fmt;

/// One raw argument of a log call.
#[derive(Debug, Clone, PartialEq)]
pub enum LogArg {
    /// Text, rendered unchanged
    Str(String),
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    /// An error value; the trace wins over the message when present
    Error {
        message: String,
        trace: Option<String>,
    },
    /// Structured data, rendered as compact JSON
    Json(serde_json::Value),
    /// A callable, identified by name when it has one
    Function(Option<String>),
    /// Absence of a value
    Undefined,
}

impl LogArg {
    /// Capture an error value.
    ///
    /// When the error has a `source()` chain, the trace lists the error
    /// followed by every cause, one per line.
    pub fn from_error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        let message = err.to_string();
        let mut source = err.source();
        if source.is_none() {
            return LogArg::Error {
                message,
                trace: None,
            };
        }

        let mut trace = message.clone();
        while let Some(cause) = source {
            trace.push_str("\n    caused by: ");
            trace.push_str(&cause.to_string());
            source = cause.source();
        }

        LogArg::Error {
            message,
            trace: Some(trace),
        }
    }

    /// Capture any serializable value as JSON.
    ///
    /// Values serde cannot represent as JSON become [`LogArg::Undefined`].
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Self {
        serde_json::to_value(value)
            .map(LogArg::from)
            .unwrap_or(LogArg::Undefined)
    }

    /// Capture a callable by its item name.
    ///
    /// Named functions keep the last segment of their path, also when passed
    /// by reference or inside a `Box`, `Arc` or `Rc`. Closures, function
    /// pointers and trait objects have no item name and render as anonymous,
    /// as does any value whose type is not a path (`u8`, slices, tuples).
    ///
    /// ```
    /// use logging_library::LogArg;
    /// use std::sync::Arc;
    ///
    /// fn sum(a: i32, b: i32) -> i32 { a + b }
    ///
    /// assert_eq!(LogArg::function(&sum).to_string(), "[Function: sum]");
    /// assert_eq!(LogArg::function(&Box::new(sum)).to_string(), "[Function: sum]");
    /// assert_eq!(LogArg::function(&|| 1).to_string(), "[Function: anonymous]");
    ///
    /// let shared: Arc<dyn Fn(i32) -> i32> = Arc::new(|x| x + 1);
    /// assert_eq!(LogArg::function(&shared).to_string(), "[Function: anonymous]");
    /// ```
    pub fn function<F: ?Sized>(_callable: &F) -> Self {
        LogArg::Function(callable_name(std::any::type_name::<F>()))
    }

    pub fn named_function(name: impl Into<String>) -> Self {
        LogArg::Function(Some(name.into()))
    }
}

fn callable_name(type_path: &str) -> Option<String> {
    let inner = strip_wrappers(type_path);
    if inner.starts_with("dyn ") || inner.contains("{{closure}}") || is_fn_pointer(inner) {
        return None;
    }

    let path = inner.split('<').next().unwrap_or(inner);
    if !path.contains("::") {
        return None;
    }
    path.rsplit("::")
        .next()
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}

/// Peel references, raw pointers and `Box`/`Arc`/`Rc` off a type name
fn strip_wrappers(mut ty: &str) -> &str {
    loop {
        ty = ty.trim_start();
        if let Some(rest) = ty.strip_prefix('&') {
            ty = rest.strip_prefix("mut ").unwrap_or(rest);
        } else if let Some(rest) = ty
            .strip_prefix("*const ")
            .or_else(|| ty.strip_prefix("*mut "))
        {
            ty = rest;
        } else if let Some(inner) = smart_pointer_inner(ty) {
            ty = inner;
        } else {
            return ty;
        }
    }
}

fn smart_pointer_inner(ty: &str) -> Option<&str> {
    let open = ty.find('<')?;
    let wrapper = ty[..open].rsplit("::").next()?;
    if !matches!(wrapper, "Box" | "Arc" | "Rc") {
        return None;
    }
    let params = ty[open + 1..].strip_suffix('>')?;
    // an explicit allocator parameter follows the pointee
    Some(first_type_param(params))
}

fn first_type_param(params: &str) -> &str {
    let mut depth = 0usize;
    let mut prev = ' ';
    for (i, c) in params.char_indices() {
        match c {
            '<' | '(' | '[' => depth += 1,
            // `->` in a signature is not a closing bracket
            '>' if prev == '-' => {}
            '>' | ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => return params[..i].trim_end(),
            _ => {}
        }
        prev = c;
    }
    params
}

fn is_fn_pointer(ty: &str) -> bool {
    let mut rest = ty;
    if let Some(after) = rest.strip_prefix("for<") {
        rest = after.split_once("> ").map_or(after, |(_, tail)| tail);
    }
    rest = rest.strip_prefix("unsafe ").unwrap_or(rest);
    if let Some(after) = rest.strip_prefix("extern \"") {
        rest = after.split_once("\" ").map_or(after, |(_, tail)| tail);
    }
    rest.starts_with("fn(")
}

impl fmt::Display for LogArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogArg::Str(s) => f.write_str(s),
            LogArg::Null => f.write_str("null"),
            LogArg::Bool(b) => write!(f, "{}", b),
            LogArg::Int(i) => write!(f, "{}", i),
            LogArg::UInt(u) => write!(f, "{}", u),
            LogArg::Float(fl) => write!(f, "{}", fl),
            LogArg::Error { message, trace } => f.write_str(trace.as_ref().unwrap_or(message)),
            LogArg::Json(value) => write!(f, "{}", value),
            LogArg::Function(Some(name)) => write!(f, "[Function: {}]", name),
            LogArg::Function(None) => f.write_str("[Function: anonymous]"),
            LogArg::Undefined => f.write_str("undefined"),
        }
    }
}

/// Render arguments into a single message, separated by one space.
pub fn join_args(args: &[LogArg]) -> String {
    args.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl From<&str> for LogArg {
    fn from(s: &str) -> Self {
        LogArg::Str(s.to_string())
    }
}

impl From<String> for LogArg {
    fn from(s: String) -> Self {
        LogArg::Str(s)
    }
}

impl From<&String> for LogArg {
    fn from(s: &String) -> Self {
        LogArg::Str(s.clone())
    }
}

impl From<char> for LogArg {
    fn from(c: char) -> Self {
        LogArg::Str(c.to_string())
    }
}

impl From<bool> for LogArg {
    fn from(b: bool) -> Self {
        LogArg::Bool(b)
    }
}

macro_rules! impl_from_int {
    ($variant:ident => $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for LogArg {
                fn from(value: $source) -> Self {
                    LogArg::$variant(value as $target)
                }
            }
        )+
    };
}

impl_from_int!(Int => i64: i8, i16, i32, i64, isize);
impl_from_int!(UInt => u64: u8, u16, u32, u64, usize);

impl From<f32> for LogArg {
    fn from(f: f32) -> Self {
        LogArg::Float(f as f64)
    }
}

impl From<f64> for LogArg {
    fn from(f: f64) -> Self {
        LogArg::Float(f)
    }
}

impl From<()> for LogArg {
    fn from(_: ()) -> Self {
        LogArg::Undefined
    }
}

impl<T: Into<LogArg>> From<Option<T>> for LogArg {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(LogArg::Undefined)
    }
}

impl From<serde_json::Value> for LogArg {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => LogArg::Null,
            Value::Bool(b) => LogArg::Bool(b),
            Value::String(s) => LogArg::Str(s),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    LogArg::Int(i)
                } else if let Some(u) = n.as_u64() {
                    LogArg::UInt(u)
                } else {
                    n.as_f64().map(LogArg::Float).unwrap_or(LogArg::Undefined)
                }
            }
            structured => LogArg::Json(structured),
        }
    }
}
