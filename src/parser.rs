use crate::model::ParsedCommand;

/// Splits a prompt line into operator and argument.
///
/// The front split (`n 1.2.3`, `!nightly 1.2.3`) wins when the leading word
/// is a single character or starts with `!`. Otherwise the last word is the
/// operator and everything before it the argument (`some text n`).
pub fn parse_line(line: &str) -> ParsedCommand {
    split_front(line).unwrap_or_else(|| split_back(line))
}

fn split_front(line: &str) -> Option<ParsedCommand> {
    let (head, tail) = line.split_once(' ')?;
    if head.chars().count() == 1 || head.starts_with('!') {
        Some(ParsedCommand {
            operator: head.to_string(),
            argument: tail.to_string(),
        })
    } else {
        None
    }
}

fn split_back(line: &str) -> ParsedCommand {
    match line.rsplit_once(' ') {
        Some((head, tail)) => ParsedCommand {
            operator: tail.to_string(),
            argument: head.to_string(),
        },
        None => ParsedCommand {
            operator: line.to_string(),
            argument: String::new(),
        },
    }
}
