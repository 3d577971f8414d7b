//! Help text, generated from the command registry's schemas.

use secterm_types::ToolSchema;

/// One line per command: name and description, in registry order.
pub fn format_tool_list(schemas: &[ToolSchema]) -> Vec<String> {
    let mut lines = vec!["Available commands:".to_string()];
    for schema in schemas {
        lines.push(format!("  {:<10}{}", schema.name, schema.description));
    }
    lines.push(String::new());
    lines.push("Type 'help <command>' for details.".to_string());
    lines
}

/// Detailed help for one command, or `None` if it is not registered.
pub fn format_tool_help(name: &str, schemas: &[ToolSchema]) -> Option<Vec<String>> {
    let wanted = name.to_lowercase();
    let schema = schemas.iter().find(|s| s.name == wanted)?;

    let mut lines = vec![
        format!("{} - {}", schema.name, schema.description),
        format!("Usage: {}", schema.usage()),
    ];

    if !schema.params.is_empty() {
        lines.push("Parameters:".to_string());
        for param in &schema.params {
            lines.push(format!("  {:<12}{}", param.usage_token(), param.description));
        }
    }

    if !schema.examples.is_empty() {
        lines.push("Examples:".to_string());
        for example in &schema.examples {
            lines.push(format!("  {}  # {}", example.code, example.description));
        }
    }

    Some(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secterm_types::ParamSchema;

    fn schemas() -> Vec<ToolSchema> {
        vec![
            ToolSchema::new("pwd", "Print working directory"),
            ToolSchema::new("cat", "Print file contents")
                .param(ParamSchema::required("path", "File to print"))
                .example("Read the region list", "cat /docs/regions.txt"),
        ]
    }

    #[test]
    fn test_list_has_every_command() {
        let lines = format_tool_list(&schemas());
        assert_eq!(lines[0], "Available commands:");
        assert_eq!(lines[1], "  pwd       Print working directory");
        assert_eq!(lines[2], "  cat       Print file contents");
    }

    #[test]
    fn test_tool_help() {
        let lines = format_tool_help("CAT", &schemas()).unwrap();
        assert_eq!(
            lines,
            vec![
                "cat - Print file contents",
                "Usage: cat <path>",
                "Parameters:",
                "  <path>      File to print",
                "Examples:",
                "  cat /docs/regions.txt  # Read the region list",
            ]
        );
    }

    #[test]
    fn test_unknown_tool() {
        assert!(format_tool_help("nope", &schemas()).is_none());
    }
}
