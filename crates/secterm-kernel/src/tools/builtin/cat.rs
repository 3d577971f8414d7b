//! cat: print a file.

use secterm_types::{ExecResult, ParamSchema, ShellError, ToolArgs, ToolSchema};

use crate::tools::{ExecContext, Tool};

/// Cat tool: print file contents, one output line per file line.
///
/// Paths listed in the config's `protected` set are refused unless the
/// session is root. The gate is checked before the lookup, so a guest
/// learns nothing about what lies behind it.
pub struct Cat;

impl Tool for Cat {
    fn name(&self) -> &str {
        "cat"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cat", "Print file contents")
            .param(ParamSchema::required("path", "File to print"))
            .example("Read the region list", "cat /docs/regions.txt")
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let Some(path_arg) = args.get(0) else {
            return ExecResult::failure(ShellError::usage(self.schema().usage()));
        };
        let resolved = ctx.resolve_path(path_arg);

        if ctx.config.is_protected(&resolved) && !ctx.is_root() {
            tracing::debug!(path = %resolved, "cat refused: not root");
            return ExecResult::failure(ShellError::permission_denied("cat", path_arg));
        }

        match ctx.fs.read_file(&resolved) {
            Some(content) => ExecResult::text(content),
            None if ctx.fs.is_directory(&resolved) => {
                ExecResult::failure(ShellError::not_a_file("cat", path_arg))
            }
            None => ExecResult::failure(ShellError::not_found("cat", path_arg)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::testing::Fixture;
    use secterm_types::AuthState;

    #[test]
    fn test_cat_file() {
        let mut fx = Fixture::new();
        fx.session.cwd = "/docs".into();
        let result = fx.run(&Cat, "regions.txt");
        assert!(result.ok());
        assert_eq!(result.lines, fx.config.regions);
    }

    #[test]
    fn test_cat_secrets_as_guest() {
        let mut fx = Fixture::new();
        let result = fx.run(&Cat, "/secrets");
        assert_eq!(result.lines, vec!["cat: /secrets: Permission denied"]);
        assert_eq!(fx.session.auth, AuthState::Guest);
    }

    #[test]
    fn test_cat_secrets_relative_still_gated() {
        let mut fx = Fixture::new();
        fx.session.cwd = "/docs".into();
        let result = fx.run(&Cat, "../secrets");
        assert!(matches!(result.error, Some(ShellError::PermissionDenied { .. })));
    }

    #[test]
    fn test_cat_secrets_as_root() {
        let mut fx = Fixture::new();
        fx.session.auth = AuthState::Root;
        let result = fx.run(&Cat, "/secrets");
        assert!(result.ok());
        assert_eq!(result.lines.join("\n"), fx.config.secret);
    }

    #[test]
    fn test_cat_directory() {
        let mut fx = Fixture::new();
        let result = fx.run(&Cat, "docs");
        assert_eq!(result.lines, vec!["cat: docs: Is a directory"]);
    }

    #[test]
    fn test_cat_missing() {
        let mut fx = Fixture::new();
        let result = fx.run(&Cat, "nope.txt");
        assert_eq!(result.error, Some(ShellError::not_found("cat", "nope.txt")));
    }

    #[test]
    fn test_cat_without_path() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run(&Cat, "").lines, vec!["Usage: cat <path>"]);
    }
}
