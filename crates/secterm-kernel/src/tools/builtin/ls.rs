//! ls: list a directory.

use secterm_types::{ExecResult, ParamSchema, ShellError, ToolArgs, ToolSchema};

use crate::tools::{ExecContext, Tool};

/// Ls tool: one entry per line, in insertion order.
pub struct Ls;

impl Tool for Ls {
    fn name(&self) -> &str {
        "ls"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("ls", "List directory contents")
            .param(ParamSchema::optional("path", "Directory to list (default .)"))
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let path_arg = args.get(0).unwrap_or(".");
        let resolved = ctx.resolve_path(path_arg);

        match ctx.fs.list_directory(&resolved) {
            Some(names) => ExecResult::lines(names),
            None if ctx.fs.is_file(&resolved) => {
                ExecResult::failure(ShellError::not_a_directory("ls", path_arg))
            }
            None => ExecResult::failure(ShellError::not_found("ls", path_arg)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::testing::Fixture;

    #[test]
    fn test_ls_root() {
        let mut fx = Fixture::new();
        let result = fx.run(&Ls, "");
        assert_eq!(result.lines, vec!["readme.txt", "docs", "secrets"]);
    }

    #[test]
    fn test_ls_cwd_relative() {
        let mut fx = Fixture::new();
        fx.session.cwd = "/docs".into();
        assert_eq!(fx.run(&Ls, "").lines, vec!["regions.txt", "companies.txt"]);
        assert_eq!(fx.run(&Ls, "..").lines, vec!["readme.txt", "docs", "secrets"]);
    }

    #[test]
    fn test_ls_file_is_not_a_directory() {
        let mut fx = Fixture::new();
        let result = fx.run(&Ls, "/docs/regions.txt");
        assert_eq!(
            result.error,
            Some(ShellError::not_a_directory("ls", "/docs/regions.txt"))
        );
    }

    #[test]
    fn test_ls_missing() {
        let mut fx = Fixture::new();
        let result = fx.run(&Ls, "ghost");
        assert_eq!(result.lines, vec!["ls: ghost: No such file or directory"]);
    }
}
