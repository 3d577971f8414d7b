//! riddle: pose the riddle; the next line is taken as the answer.

use secterm_types::{ExecResult, ToolArgs, ToolSchema};

use crate::session::PuzzleStage;
use crate::tools::{ExecContext, Tool};

pub struct Riddle;

impl Tool for Riddle {
    fn name(&self) -> &str {
        "riddle"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("riddle", "Answer a riddle")
    }

    fn execute(&self, _args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        ctx.session.puzzle = PuzzleStage::RiddlePending;
        ExecResult::lines(ctx.config.riddle.prompt.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::testing::Fixture;

    #[test]
    fn test_riddle_sets_stage() {
        let mut fx = Fixture::new();
        let result = fx.run(&Riddle, "");
        assert_eq!(result.lines, fx.config.riddle.prompt);
        assert_eq!(fx.session.puzzle, PuzzleStage::RiddlePending);
    }
}
