//! Command schema and argument types.

/// Schema for a command parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSchema {
    /// Parameter name, shown in usage lines.
    pub name: String,
    /// Whether this parameter must be supplied.
    pub required: bool,
    /// Consumes every remaining word (`echo <text...>`).
    pub variadic: bool,
    /// Description for help text.
    pub description: String,
}

impl ParamSchema {
    /// Create a required parameter.
    pub fn required(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
            variadic: false,
            description: description.into(),
        }
    }

    /// Create an optional parameter.
    pub fn optional(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
            variadic: false,
            description: description.into(),
        }
    }

    /// Mark this parameter as swallowing the rest of the line.
    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    /// Render this parameter the way usage lines show it: `<path>`, `[path]`, `<text...>`.
    pub fn usage_token(&self) -> String {
        let dots = if self.variadic { "..." } else { "" };
        if self.required {
            format!("<{}{}>", self.name, dots)
        } else {
            format!("[{}{}]", self.name, dots)
        }
    }
}

/// An example showing how to use a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    /// Short description of what the example demonstrates.
    pub description: String,
    /// The example command line.
    pub code: String,
}

impl Example {
    /// Create a new example.
    pub fn new(description: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            code: code.into(),
        }
    }
}

/// Schema describing a command's interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSchema {
    /// Command name, lowercase.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Parameter definitions, in positional order.
    pub params: Vec<ParamSchema>,
    /// Usage examples.
    pub examples: Vec<Example>,
}

impl ToolSchema {
    /// Create a new tool schema.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            params: Vec::new(),
            examples: Vec::new(),
        }
    }

    /// Add a parameter to the schema.
    pub fn param(mut self, param: ParamSchema) -> Self {
        self.params.push(param);
        self
    }

    /// Add an example to the schema.
    pub fn example(mut self, description: impl Into<String>, code: impl Into<String>) -> Self {
        self.examples.push(Example::new(description, code));
        self
    }

    /// Number of leading parameters that must be present.
    pub fn required_count(&self) -> usize {
        self.params.iter().filter(|p| p.required).count()
    }

    /// Usage line body, e.g. `cat <path>` or `uxv <action> [target...]`.
    pub fn usage(&self) -> String {
        let mut usage = self.name.clone();
        for param in &self.params {
            usage.push(' ');
            usage.push_str(&param.usage_token());
        }
        usage
    }
}

/// Whitespace-split arguments ready for command execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolArgs {
    /// Positional arguments in order.
    pub positional: Vec<String>,
}

impl ToolArgs {
    /// Create empty args.
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a line fragment on whitespace.
    pub fn parse(rest: &str) -> Self {
        Self {
            positional: rest.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// Get a positional argument by index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }

    /// Join every argument from `index` on with single spaces.
    ///
    /// Returns `None` when there is nothing at or after `index`.
    pub fn rest(&self, index: usize) -> Option<String> {
        let tail = self.positional.get(index..)?;
        if tail.is_empty() {
            None
        } else {
            Some(tail.join(" "))
        }
    }

    pub fn len(&self) -> usize {
        self.positional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ToolArgs {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            positional: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_renders_required_optional_and_variadic() {
        let schema = ToolSchema::new("uxv", "Drone control")
            .param(ParamSchema::required("action", "launch, recall or status"))
            .param(ParamSchema::optional("target", "Region or company").variadic());
        assert_eq!(schema.usage(), "uxv <action> [target...]");
        assert_eq!(schema.required_count(), 1);
    }

    #[test]
    fn args_rest_joins_tail() {
        let args = ToolArgs::parse("  launch   north  sea ");
        assert_eq!(args.len(), 3);
        assert_eq!(args.get(0), Some("launch"));
        assert_eq!(args.rest(1).as_deref(), Some("north sea"));
        assert_eq!(args.rest(3), None);
        assert_eq!(args.rest(9), None);
    }
}
