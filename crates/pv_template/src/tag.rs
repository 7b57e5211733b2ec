use std::fmt;

/// Writer for an HTML opening tag such as `<select name="colors" size="4">`.
///
/// Attribute values are written verbatim, escaping is the caller's job.
/// Raw fragments are appended after all attributes, separated by a single
/// space, and empty fragments are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTag {
    name: String,
    attrs: Vec<(String, String)>,
    raw: Vec<String>,
}

impl StartTag {
    pub fn new(name: impl ToString) -> Self {
        Self { name: name.to_string(), attrs: Vec::new(), raw: Vec::new() }
    }

    pub fn attr(mut self, key: impl ToString, value: impl ToString) -> Self {
        self.attrs.push((key.to_string(), value.to_string()));
        self
    }

    /// Adds the attribute only when `cond` holds.
    pub fn attr_if(self, cond: bool, key: impl ToString, value: impl ToString) -> Self {
        if cond { self.attr(key, value) } else { self }
    }

    pub fn raw(mut self, fragment: impl ToString) -> Self {
        let fragment = fragment.to_string();
        if !fragment.is_empty() {
            self.raw.push(fragment);
        }
        self
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StartTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (key, value) in &self.attrs {
            write!(f, " {key}=\"{value}\"")?;
        }
        for fragment in &self.raw {
            write!(f, " {fragment}")?;
        }
        write!(f, ">")
    }
}
