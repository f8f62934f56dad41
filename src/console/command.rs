use crate::board::Square;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Click(Square),
    Reset,
    Show,
    Moves,
    Status,
    Layout,
    Set { name: String, value: Option<String> },
    Quit,
    /// Known command with unusable arguments
    Invalid(String),
    Unknown(String),
}

pub fn parse_console_command(line: &str) -> Option<ConsoleCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();

    let cmd = match parts[0] {
        "click" => match parts.get(1) {
            Some(arg) => match arg.parse::<Square>() {
                Ok(sq) => ConsoleCommand::Click(sq),
                Err(e) => ConsoleCommand::Invalid(e.to_string()),
            },
            None => ConsoleCommand::Invalid("click needs a square".to_string()),
        },
        "reset" | "new" => ConsoleCommand::Reset,
        "show" | "board" => ConsoleCommand::Show,
        "moves" => ConsoleCommand::Moves,
        "status" => ConsoleCommand::Status,
        "layout" => ConsoleCommand::Layout,
        "set" => match parts.get(1) {
            Some(name) => ConsoleCommand::Set {
                name: (*name).to_string(),
                value: if parts.len() > 2 {
                    Some(parts[2..].join(" "))
                } else {
                    None
                },
            },
            None => ConsoleCommand::Invalid("set needs an option name".to_string()),
        },
        "quit" | "exit" => ConsoleCommand::Quit,
        _ => ConsoleCommand::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_are_skipped() {
        assert_eq!(parse_console_command("   "), None);
    }

    #[test]
    fn test_click_accepts_both_notations() {
        assert_eq!(
            parse_console_command("click e2"),
            Some(ConsoleCommand::Click(Square(6, 4)))
        );
        assert_eq!(
            parse_console_command("click 6,4"),
            Some(ConsoleCommand::Click(Square(6, 4)))
        );
    }

    #[test]
    fn test_click_rejects_bad_square() {
        assert!(matches!(
            parse_console_command("click z9"),
            Some(ConsoleCommand::Invalid(msg)) if msg.contains("z9")
        ));
        assert!(matches!(
            parse_console_command("click 8,0"),
            Some(ConsoleCommand::Invalid(msg)) if msg.contains('8')
        ));
        assert!(matches!(
            parse_console_command("click"),
            Some(ConsoleCommand::Invalid(_))
        ));
    }

    #[test]
    fn test_set_collects_value() {
        assert_eq!(
            parse_console_command("set glyphs unicode"),
            Some(ConsoleCommand::Set {
                name: "glyphs".to_string(),
                value: Some("unicode".to_string()),
            })
        );
        assert_eq!(
            parse_console_command("set autoshow"),
            Some(ConsoleCommand::Set {
                name: "autoshow".to_string(),
                value: None,
            })
        );
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_console_command("castle"),
            Some(ConsoleCommand::Unknown("castle".to_string()))
        );
    }
}
