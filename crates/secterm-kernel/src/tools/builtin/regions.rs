//! regions / companies: list the map's known targets.

use secterm_types::{ExecResult, ToolArgs, ToolSchema};

use crate::tools::{ExecContext, Tool};

pub struct Regions;

impl Tool for Regions {
    fn name(&self) -> &str {
        "regions"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("regions", "List region keys")
    }

    fn execute(&self, _args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        ExecResult::lines(ctx.config.regions.iter().cloned())
    }
}

pub struct Companies;

impl Tool for Companies {
    fn name(&self) -> &str {
        "companies"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("companies", "List companies")
    }

    fn execute(&self, _args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        ExecResult::lines(ctx.config.companies.iter().cloned())
    }
}
