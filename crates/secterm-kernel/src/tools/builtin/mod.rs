//! Built-in commands for secterm.
//!
//! These are always available. The map verbs at the bottom only validate
//! their arguments and hand a structured event to the host; they implement
//! no navigation themselves.

mod cat;
mod cd;
mod clear;
mod date;
mod echo;
mod exit;
mod goto;
mod help;
mod history;
mod login;
mod ls;
mod man;
mod pwd;
mod regions;
mod riddle;
mod scan;
mod sudo;
mod uxv;
mod whoami;

use super::ToolRegistry;

/// Register all built-in commands with the registry.
pub fn register_builtins(registry: &mut ToolRegistry) {
    registry.register(help::Help);
    registry.register(clear::Clear);
    registry.register(login::Login);
    registry.register(login::Logout);
    registry.register(whoami::Whoami);
    registry.register(pwd::Pwd);
    registry.register(cd::Cd);
    registry.register(ls::Ls);
    registry.register(cat::Cat);
    registry.register(echo::Echo);
    registry.register(date::Date);
    registry.register(history::History);
    registry.register(man::Man);
    registry.register(sudo::Sudo);
    registry.register(riddle::Riddle);
    registry.register(exit::Exit);

    registry.register(regions::Regions);
    registry.register(regions::Companies);
    registry.register(goto::Goto);
    registry.register(scan::Scan);
    registry.register(uxv::Uxv);
}
