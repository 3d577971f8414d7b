//! date: print the host's current time.

use secterm_types::{ExecResult, ToolArgs, ToolSchema};

use crate::tools::{ExecContext, Tool};

/// Date tool: the timestamp comes from the host-provided clock.
pub struct Date;

impl Tool for Date {
    fn name(&self) -> &str {
        "date"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("date", "Display current date and time")
    }

    fn execute(&self, _args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        ExecResult::line(ctx.clock.now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::testing::{Fixture, NOW};

    #[test]
    fn test_date_uses_clock() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run(&Date, "").lines, vec![NOW]);
    }
}
