//! Integration tests for the secterm REPL.
//!
//! These tests drive lines through a `Repl` and check what would be printed.

use rstest::rstest;
use secterm_kernel::{AuthState, ShellConfig};
use secterm_repl::format::OutputContext;
use secterm_repl::{Outcome, Repl};

fn repl() -> Repl {
    Repl::with_config(ShellConfig::default())
        .expect("Failed to create REPL")
        .with_context(OutputContext::Piped)
}

/// Run multiple lines through a REPL and collect the printed text.
fn run_script(script: &str) -> Vec<String> {
    let mut repl = repl();
    script
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| repl.process_line(line).text)
        .collect()
}

#[test]
fn test_browse_documents() {
    let out = run_script(
        r#"
        # look around
        cd /docs
        ls
        cat companies.txt
        "#,
    );
    assert_eq!(
        out,
        vec![
            "",
            "regions.txt\ncompanies.txt",
            "Northwind Defense\nHelix Aerospace\nBlackwater Maritime",
        ]
    );
}

#[test]
fn test_login_flow_changes_prompt() {
    let mut repl = repl();
    assert_eq!(repl.prompt(), "guest@secterm:/$ ");

    assert_eq!(repl.process_line("login").text, "Password:");
    assert_eq!(repl.prompt(), "");
    assert_eq!(repl.session().auth, AuthState::AwaitingPassword);

    let out = repl.process_line("legion");
    assert!(out.text.starts_with("Access granted."));
    assert!(out.text.contains("[event] {\"kind\":\"unlock\",\"id\":\"root-access\"}"));
    assert_eq!(repl.prompt(), "root@secterm:/# ");
}

#[test]
fn test_third_strike_locks_input() {
    let mut repl = repl();
    let mut outcomes: Vec<Outcome> = Vec::new();
    for _ in 0..3 {
        repl.process_line("login");
        outcomes.push(repl.process_line("wrong"));
    }

    assert!(outcomes[..2].iter().all(|o| o.lockout.is_none()));
    assert_eq!(outcomes[2].text, "Access denied.\n!! INTRUSION ALERT !!");
    assert_eq!(
        outcomes[2].lockout,
        Some(std::time::Duration::from_millis(5_000))
    );
}

#[test]
fn test_exit_closes_and_resets() {
    let mut repl = repl();
    repl.process_line("cd /docs");
    let out = repl.process_line("exit");
    assert!(out.close);
    assert_eq!(out.text, "Connection closed.");
    assert_eq!(repl.session().cwd, "/");
    assert!(repl.session().history.is_empty());
}

#[rstest]
#[case("clear", "")]
#[case("frobnicate", "Unknown: frobnicate")]
#[case("sudo su", "sudo: su: Permission denied\nThis incident will be reported.\n!! INTRUSION ALERT !!")]
#[case("goto europe", "Navigating to region europe...\n[event] {\"kind\":\"navigate\",\"target\":{\"region\":\"europe\"}}")]
fn test_rendered_text(#[case] line: &str, #[case] expected: &str) {
    assert_eq!(repl().process_line(line).text, expected);
}

#[test]
fn test_motd_comes_from_config() {
    let config = ShellConfig {
        motd: vec!["hello".into()],
        ..ShellConfig::default()
    };
    let repl = Repl::with_config(config).unwrap();
    assert_eq!(repl.motd(), ["hello"]);
}
