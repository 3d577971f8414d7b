//! echo: print arguments.

use secterm_types::{ExecResult, ParamSchema, ToolArgs, ToolSchema};

use crate::tools::{ExecContext, Tool};

/// Echo tool: prints its arguments joined by single spaces.
pub struct Echo;

impl Tool for Echo {
    fn name(&self) -> &str {
        "echo"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("echo", "Print arguments")
            .param(ParamSchema::optional("text", "Words to print").variadic())
    }

    fn execute(&self, args: &ToolArgs, _ctx: &mut ExecContext<'_>) -> ExecResult {
        ExecResult::line(args.rest(0).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::testing::Fixture;

    #[test]
    fn test_echo_joins_words() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run(&Echo, "hello    world").lines, vec!["hello world"]);
    }

    #[test]
    fn test_echo_empty() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run(&Echo, "").lines, vec![""]);
    }
}
