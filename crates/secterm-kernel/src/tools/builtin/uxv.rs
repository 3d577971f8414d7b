//! uxv: orders for the unmanned vehicle fleet.

use secterm_types::{Event, ExecResult, ParamSchema, ShellError, ToolArgs, ToolSchema, UxvAction};

use crate::tools::{ExecContext, Tool};

pub struct Uxv;

impl Tool for Uxv {
    fn name(&self) -> &str {
        "uxv"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("uxv", "Command the drone fleet")
            .param(ParamSchema::required("action", "launch, recall or status"))
            .param(ParamSchema::optional("target", "Where to launch to").variadic())
            .example("Send a drone", "uxv launch europe")
            .example("Bring everything home", "uxv recall")
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let action = args.get(0).map(str::to_lowercase);
        match action.as_deref() {
            Some("launch") => {
                let Some(wanted) = args.rest(1) else {
                    return ExecResult::failure(ShellError::usage("uxv launch <target...>"));
                };
                match ctx.config.find_target(&wanted) {
                    Some(target) => ExecResult::line(format!("UXV launched toward {}.", target))
                        .with_event(Event::Uxv {
                            action: UxvAction::Launch { target },
                        }),
                    None => ExecResult::failure(ShellError::unknown_target("uxv", wanted)),
                }
            }
            Some("recall") => ExecResult::line("Recalling all UXVs.").with_event(Event::Uxv {
                action: UxvAction::Recall,
            }),
            Some("status") => {
                ExecResult::line("Requesting UXV telemetry...").with_event(Event::Uxv {
                    action: UxvAction::Status,
                })
            }
            _ => ExecResult::failure(ShellError::usage(self.schema().usage())),
        }
    }
}
