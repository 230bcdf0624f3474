//! UI helpers for CLI display.

use console::style;

/// Width of the rule printed under headers and around the summary.
pub const RULE_WIDTH: usize = 40;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// A horizontal rule of `width` dashes.
#[must_use]
pub fn rule(width: usize) -> String {
    "-".repeat(width)
}

/// Print a styled section header followed by a rule.
pub fn print_header(text: &str) {
    if is_color_disabled() {
        println!("{text}");
    } else {
        println!("{}", style(text).bold().cyan());
    }
    println!("{}", rule(RULE_WIDTH));
}

/// Print a de-emphasized note.
pub fn print_note(text: &str) {
    if is_color_disabled() {
        println!("{text}");
    } else {
        println!("{}", style(text).dim());
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_width() {
        assert_eq!(rule(3), "---");
        assert_eq!(rule(RULE_WIDTH).len(), 40);
    }

    #[test]
    fn print_functions_do_not_panic() {
        print_header("FIBONACCI SEQUENCE GENERATION");
        print_note("Recursive skipped for n=35");
        print_error("Something went wrong");
        print_header("");
    }
}
