//! Class name composition.
//!
//! Builds a single `class` attribute value from literal class names,
//! optional class names and ordered lists of conditional class names.
//!
//! Rules:
//! - arguments are visited left to right and joined with a single space
//! - empty or absent strings are skipped
//! - a conditional entry contributes its class only when its flag is `true`
//! - supplied strings are kept verbatim (no trimming, no deduplication)

/// One argument to [`compose`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassArg<'a> {
    /// A class string, skipped when empty
    Literal(&'a str),
    /// A class string that may be absent
    Optional(Option<&'a str>),
    /// Ordered `(class, enabled)` pairs
    Conditional(Vec<(&'a str, bool)>),
}

impl<'a> ClassArg<'a> {
    /// Create a conditional argument from ordered `(class, enabled)` pairs
    pub fn when(pairs: impl IntoIterator<Item = (&'a str, bool)>) -> Self {
        ClassArg::Conditional(pairs.into_iter().collect())
    }
}

impl<'a> From<&'a str> for ClassArg<'a> {
    fn from(value: &'a str) -> Self {
        ClassArg::Literal(value)
    }
}

impl<'a> From<&'a String> for ClassArg<'a> {
    fn from(value: &'a String) -> Self {
        ClassArg::Literal(value.as_str())
    }
}

impl<'a> From<Option<&'a str>> for ClassArg<'a> {
    fn from(value: Option<&'a str>) -> Self {
        ClassArg::Optional(value)
    }
}

impl<'a> From<Option<&'a String>> for ClassArg<'a> {
    fn from(value: Option<&'a String>) -> Self {
        ClassArg::Optional(value.map(String::as_str))
    }
}

/// Compose a class string from the given arguments
pub fn compose<'a>(args: impl IntoIterator<Item = ClassArg<'a>>) -> String {
    let mut out = String::new();
    let mut push = |class: &str| {
        if class.is_empty() {
            return;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(class);
    };

    for arg in args {
        match arg {
            ClassArg::Literal(class) => push(class),
            ClassArg::Optional(class) => {
                if let Some(class) = class {
                    push(class);
                }
            }
            ClassArg::Conditional(pairs) => {
                for (class, enabled) in pairs {
                    if enabled {
                        push(class);
                    }
                }
            }
        }
    }

    out
}

/// Compose a class string at the call site
///
/// # Example
/// ```
/// use navigation_views::class_names;
/// use navigation_views::helpers::ClassArg;
///
/// let large = true;
/// let class = class_names!("list", None::<&str>, ClassArg::when([("list_l", large), ("list_s", !large)]));
/// assert_eq!(class, "list list_l");
/// ```
#[macro_export]
macro_rules! class_names {
    ($($arg:expr),* $(,)?) => {
        $crate::helpers::compose([$($crate::helpers::ClassArg::from($arg)),*])
    };
}
