use crate::config::LogLinePattern;
use crate::error::Result;
use regex::Regex;

/// Undo one level of backslash escaping from a crontab command argument.
///
/// `\%` is left untouched: the percent escape belongs to cron, not the
/// shell, and is resolved by [`percent_unescape`] afterwards. A trailing
/// lone backslash stays literal.
pub fn shell_unescape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('%') => {
                out.push('\\');
                out.push('%');
            }
            Some(next) => out.push(next),
            None => out.push('\\'),
        }
    }
    out
}

/// Undo cron's percent escaping: `\%` becomes a literal percent, and a
/// bare `%` terminates the command (cron feeds the remainder to the job's
/// stdin, so it never appears in the logged command).
pub fn percent_unescape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('%') => out.push('%'),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            },
            '%' => break,
            _ => out.push(c),
        }
    }
    out
}

/// Escape a command string for literal use inside a regular expression.
///
/// The command comes from the invocation's arguments; embedding it raw
/// would let metacharacters widen or break the search.
pub fn to_literal_pattern(command: &str) -> String {
    regex::escape(command)
}

/// Build the compiled search expression for a job's execution record:
/// daemon prefix, the literal command, closing suffix.
pub fn build_search_pattern(template: &LogLinePattern, command: &str) -> Result<Regex> {
    let literal = to_literal_pattern(&percent_unescape(&shell_unescape(command)));
    let pattern = format!("{}{}{}", template.prefix, literal, template.suffix);
    Ok(Regex::new(&pattern)?)
}
