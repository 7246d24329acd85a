//! Colored terminal output.
//!
//! Plain ANSI, gated on `NO_COLOR` and on the stream being a terminal.
//! Progress lines are blue, completions green, validation nags yellow,
//! and failures red on stderr.

use std::io::IsTerminal;

const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

fn colors_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

fn paint(code: &str, msg: &str, is_tty: bool) -> String {
    if is_tty && !colors_disabled() {
        format!("{code}{msg}{RESET}")
    } else {
        msg.to_owned()
    }
}

/// Progress line, printed before each workflow step executes.
pub fn info(msg: &str) {
    println!("{}", paint(BLUE, msg, std::io::stdout().is_terminal()));
}

pub fn success(msg: &str) {
    println!("{}", paint(GREEN, msg, std::io::stdout().is_terminal()));
}

pub fn warn(msg: &str) {
    println!("{}", paint(YELLOW, msg, std::io::stdout().is_terminal()));
}

pub fn error(msg: &str) {
    eprintln!("{}", paint(RED, msg, std::io::stderr().is_terminal()));
}
