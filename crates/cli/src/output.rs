//! Colored status lines for the terminal.
//!
//! Messages carry short markup tags such as `[g]done[/]`. Tags are turned
//! into ANSI color codes when stderr is a terminal and removed otherwise.

use std::io::IsTerminal;

/// Markup tag and the ANSI SGR sequence it stands for.
pub static COLOR_CODES: [(&str, &str); 9] = [
    ("[k]", "\x1b[30m"),
    ("[r]", "\x1b[31m"),
    ("[g]", "\x1b[32m"),
    ("[y]", "\x1b[33m"),
    ("[b]", "\x1b[34m"),
    ("[m]", "\x1b[35m"),
    ("[c]", "\x1b[36m"),
    ("[w]", "\x1b[37m"),
    ("[/]", "\x1b[m"),
];

pub fn paint(msg: &str) -> String {
    COLOR_CODES
        .iter()
        .fold(msg.to_string(), |acc, &(tag, code)| acc.replace(tag, code))
}

pub fn strip(msg: &str) -> String {
    COLOR_CODES
        .iter()
        .fold(msg.to_string(), |acc, &(tag, _)| acc.replace(tag, ""))
}

fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
}

/// Prints a status line to stderr, keeping stdout free for SQL.
pub fn log(msg: &str) {
    let line = if use_color() { paint(msg) } else { strip(msg) };
    eprintln!("{line}");
}

pub fn info(msg: &str) {
    log(&format!("[b]info:[/] {msg}"));
}

pub fn warning(msg: &str) {
    log(&format!("[y]warning:[/] {msg}"));
}

pub fn error(msg: &str, cause: &dyn std::error::Error) {
    log(&format!("[r]error:[/] {msg}"));
    log(&format!("[y]{cause}[/]"));
}

pub fn done() {
    log("[g]done[/]");
}
