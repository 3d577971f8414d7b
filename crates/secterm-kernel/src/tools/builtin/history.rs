//! history: list previously submitted commands.

use secterm_types::{ExecResult, ToolArgs, ToolSchema};

use crate::tools::{ExecContext, Tool};

pub struct History;

impl Tool for History {
    fn name(&self) -> &str {
        "history"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("history", "Show command history")
    }

    fn execute(&self, _args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        ExecResult::lines(
            ctx.session
                .history
                .iter()
                .enumerate()
                .map(|(i, line)| format!("{:>4}  {}", i + 1, line)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::testing::Fixture;

    #[test]
    fn test_history_numbers_lines() {
        let mut fx = Fixture::new();
        fx.session.record("ls");
        fx.session.record("cd /docs");
        assert_eq!(
            fx.run(&History, "").lines,
            vec!["   1  ls", "   2  cd /docs"]
        );
    }
}
