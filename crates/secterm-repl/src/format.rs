//! Output formatting for the REPL.
//!
//! Output lines are printed verbatim. Events are turned into something a
//! plain terminal can show:
//!
//! - **Interactive** → colored alert banner, ANSI screen clear
//! - **Piped** → the same text without escape codes; clears are dropped

use std::io::IsTerminal;

use secterm_kernel::{Dispatch, Event};

const ALERT_BANNER: &str = "!! INTRUSION ALERT !!";
const RED: &str = "\x1b[1;31m";
const RESET: &str = "\x1b[0m";
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Who is reading the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputContext {
    Interactive,
    Piped,
}

/// Detect the output context based on terminal state.
pub fn detect_context() -> OutputContext {
    if std::io::stdout().is_terminal() {
        OutputContext::Interactive
    } else {
        OutputContext::Piped
    }
}

/// Format a dispatch result: output lines first, then one line per event.
pub fn format_dispatch(dispatch: &Dispatch, context: OutputContext) -> String {
    let mut out: Vec<String> = dispatch.lines.clone();
    out.extend(
        dispatch
            .events
            .iter()
            .filter_map(|event| format_event(event, context)),
    );
    out.join("\n")
}

/// Render a single event, or `None` if it has no visible form.
pub fn format_event(event: &Event, context: OutputContext) -> Option<String> {
    match (event, context) {
        (Event::Alert { .. }, OutputContext::Interactive) => {
            Some(format!("{RED}{ALERT_BANNER}{RESET}"))
        }
        (Event::Alert { .. }, OutputContext::Piped) => Some(ALERT_BANNER.to_string()),
        (Event::Clear, OutputContext::Interactive) => Some(CLEAR_SCREEN.to_string()),
        (Event::Clear, OutputContext::Piped) | (Event::Close, _) => None,
        (other, _) => Some(bracketed(other)),
    }
}

/// `[event] {"kind":...}` for events the terminal can only describe.
fn bracketed(event: &Event) -> String {
    match serde_json::to_string(event) {
        Ok(json) => format!("[event] {json}"),
        Err(e) => {
            tracing::warn!("Failed to serialize event: {}", e);
            format!("[event] {event:?}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secterm_kernel::{NavTarget, UxvAction};

    #[test]
    fn test_lines_then_events() {
        let dispatch = Dispatch {
            lines: vec!["sudo: su: Permission denied".into()],
            events: vec![Event::Alert { duration_ms: 10 }],
            error: None,
        };
        assert_eq!(
            format_dispatch(&dispatch, OutputContext::Piped),
            "sudo: su: Permission denied\n!! INTRUSION ALERT !!"
        );
    }

    #[test]
    fn test_alert_is_red_on_a_terminal() {
        let line = format_event(&Event::Alert { duration_ms: 1 }, OutputContext::Interactive)
            .unwrap();
        assert!(line.starts_with(RED));
        assert!(line.contains(ALERT_BANNER));
    }

    #[test]
    fn test_clear_only_on_a_terminal() {
        assert_eq!(
            format_event(&Event::Clear, OutputContext::Interactive).as_deref(),
            Some(CLEAR_SCREEN)
        );
        assert_eq!(format_event(&Event::Clear, OutputContext::Piped), None);
    }

    #[test]
    fn test_close_is_silent() {
        assert_eq!(format_event(&Event::Close, OutputContext::Interactive), None);
    }

    #[test]
    fn test_other_events_are_json() {
        let nav = Event::Navigate {
            target: NavTarget::Region("europe".into()),
        };
        let line = format_event(&nav, OutputContext::Piped).unwrap();
        assert!(line.starts_with("[event] {\"kind\":\"navigate\""));

        let uxv = Event::Uxv {
            action: UxvAction::Recall,
        };
        let line = format_event(&uxv, OutputContext::Piped).unwrap();
        assert!(line.contains("\"recall\""));
    }
}
