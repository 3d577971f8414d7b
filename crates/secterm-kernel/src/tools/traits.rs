//! Core tool trait and argument validation.

use secterm_types::{ExecResult, ShellError, ToolArgs, ToolSchema};

use super::context::ExecContext;

/// A built-in command.
///
/// Handlers are total: any bad input becomes a diagnostic inside the
/// returned [`ExecResult`], never a panic or a Rust error.
pub trait Tool: Send + Sync {
    /// The command name (used for lookup, lowercase).
    fn name(&self) -> &str;

    /// Get the command's schema.
    fn schema(&self) -> ToolSchema;

    /// Run the command against the session in `ctx`.
    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult;
}

/// Check positional arguments against the schema's declared arity.
///
/// Only missing required parameters are rejected; surplus words are left to
/// the handler, which ignores or joins them.
pub fn validate_against_schema(args: &ToolArgs, schema: &ToolSchema) -> Result<(), ShellError> {
    if args.len() < schema.required_count() {
        return Err(ShellError::usage(schema.usage()));
    }
    Ok(())
}
