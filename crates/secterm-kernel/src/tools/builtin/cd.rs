//! cd: change the working directory.

use secterm_types::{ExecResult, ParamSchema, ShellError, ToolArgs, ToolSchema};

use crate::tools::{ExecContext, Tool};
use crate::vfs::EntryType;

/// Cd tool: change current working directory.
pub struct Cd;

impl Tool for Cd {
    fn name(&self) -> &str {
        "cd"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cd", "Change working directory")
            .param(ParamSchema::optional("path", "Directory to change to (default /)"))
            .example("Open the documents folder", "cd /docs")
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let path_arg = args.get(0).unwrap_or("/");
        let resolved = ctx.resolve_path(path_arg);

        // Verify the path exists and is a directory before committing it
        match ctx.fs.stat(&resolved) {
            Some(EntryType::Directory) => {
                ctx.set_cwd(resolved);
                ExecResult::empty()
            }
            Some(EntryType::File) => ExecResult::failure(ShellError::not_a_directory("cd", path_arg)),
            None => ExecResult::failure(ShellError::not_found("cd", path_arg)),
        }
    }
}
