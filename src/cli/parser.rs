//! Command line parsing

// Command enum to represent tool commands
#[derive(Debug, PartialEq)]
pub enum Command {
    Resolve {
        base: String,
        name: String,
        scope: Option<String>,
    },
    Relative {
        from: String,
        to: String,
    },
    Info(String),
    Help,
    Unknown(String),
}

// Parse raw arguments (without the program name) into a Command
pub fn parse_command(args: &[String]) -> Command {
    let cmd = args.first().map(|s| s.to_ascii_lowercase()).unwrap_or_default();
    let rest = &args[args.len().min(1)..];

    match (cmd.as_str(), rest) {
        ("resolve", [base, name]) => Command::Resolve {
            base: base.clone(),
            name: name.clone(),
            scope: None,
        },
        ("resolve", [base, name, scope]) => Command::Resolve {
            base: base.clone(),
            name: name.clone(),
            scope: Some(scope.clone()),
        },
        ("relative", [from, to]) => Command::Relative {
            from: from.clone(),
            to: to.clone(),
        },
        ("info", [uri]) => Command::Info(uri.clone()),
        ("help" | "-h" | "--help", _) | ("", _) => Command::Help,
        _ => Command::Unknown(args.join(" ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_command(&args("")), Command::Help);
        assert_eq!(parse_command(&args("--help")), Command::Help);
        assert_eq!(
            parse_command(&args("info file:///a")),
            Command::Info("file:///a".to_string())
        );
    }

    #[test]
    fn test_parse_commands_with_args() {
        assert_eq!(
            parse_command(&args("RESOLVE file:///a ../b")),
            Command::Resolve {
                base: "file:///a".to_string(),
                name: "../b".to_string(),
                scope: None,
            }
        );
        assert_eq!(
            parse_command(&args("resolve file:///a b child")),
            Command::Resolve {
                base: "file:///a".to_string(),
                name: "b".to_string(),
                scope: Some("child".to_string()),
            }
        );
        assert_eq!(
            parse_command(&args("relative file:///a file:///b")),
            Command::Relative {
                from: "file:///a".to_string(),
                to: "file:///b".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_commands() {
        assert_eq!(parse_command(&args("info")), Command::Unknown("info".to_string()));
        assert_eq!(parse_command(&args("FOO bar")), Command::Unknown("FOO bar".to_string()));
    }
}
