use thiserror::Error;

pub const HELP: &str = "commands: login <name> | logout | unlock | theme | biometric on|off | status | help | quit";

/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Login(String),
    Logout,
    Unlock,
    Theme,
    Biometric(bool),
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellCommandError {
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

impl ShellCommand {
    /// Parses a line. Blank input is `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, ShellCommandError> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let rest: Vec<&str> = words.collect();

        let command = match (name, rest.as_slice()) {
            ("login", [user]) => ShellCommand::Login(user.to_string()),
            ("login", _) => return Err(ShellCommandError::Usage("login <name>")),
            ("logout", []) => ShellCommand::Logout,
            ("unlock", []) => ShellCommand::Unlock,
            ("theme", []) => ShellCommand::Theme,
            ("biometric", ["on"]) => ShellCommand::Biometric(true),
            ("biometric", ["off"]) => ShellCommand::Biometric(false),
            ("biometric", _) => return Err(ShellCommandError::Usage("biometric on|off")),
            ("status", []) => ShellCommand::Status,
            ("help", []) => ShellCommand::Help,
            ("quit" | "exit", []) => ShellCommand::Quit,
            _ => return Err(ShellCommandError::Unknown(line.trim().to_string())),
        };
        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(
            ShellCommand::parse("login alice").unwrap(),
            Some(ShellCommand::Login("alice".to_string()))
        );
        assert_eq!(ShellCommand::parse("  unlock ").unwrap(), Some(ShellCommand::Unlock));
        assert_eq!(
            ShellCommand::parse("biometric off").unwrap(),
            Some(ShellCommand::Biometric(false))
        );
        assert_eq!(ShellCommand::parse("exit").unwrap(), Some(ShellCommand::Quit));
        assert_eq!(ShellCommand::parse("   ").unwrap(), None);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            ShellCommand::parse("login"),
            Err(ShellCommandError::Usage("login <name>"))
        );
        assert_eq!(
            ShellCommand::parse("biometric maybe"),
            Err(ShellCommandError::Usage("biometric on|off"))
        );
        assert_eq!(
            ShellCommand::parse("theme dark"),
            Err(ShellCommandError::Unknown("theme dark".to_string()))
        );
    }
}
