//! man: there are no manual pages here.

use secterm_types::{ExecResult, ParamSchema, ToolArgs, ToolSchema};

use crate::tools::{ExecContext, Tool};

pub struct Man;

impl Tool for Man {
    fn name(&self) -> &str {
        "man"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("man", "Show the manual for a command")
            .param(ParamSchema::required("command", "Command to look up"))
    }

    fn execute(&self, _args: &ToolArgs, _ctx: &mut ExecContext<'_>) -> ExecResult {
        ExecResult::line("man: this is not a real shell. Try 'help <command>'.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::testing::Fixture;

    #[test]
    fn test_man_is_fixed() {
        let mut fx = Fixture::new();
        let a = fx.run(&Man, "ls");
        let b = fx.run(&Man, "cat");
        assert_eq!(a, b);
        assert_eq!(a.lines.len(), 1);
    }
}
