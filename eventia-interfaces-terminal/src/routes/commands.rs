use crate::error::TerminalError;

pub const HELP: &str = "\
commands:
  search <term>     filter the loaded events by name (alias: /)
  click <country>   toggle a country filter chip (alias: toggle)
  chips             show filter chips
  reload            fetch the page again
  help              show this help
  quit              leave (alias: exit)";

/// Terminal stand-ins for the page's input and click events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Search(String),
    Click(String),
    Chips,
    Reload,
    Help,
    Quit,
}

impl UiCommand {
    pub fn parse(line: &str) -> Result<UiCommand, TerminalError> {
        let line = line.trim_start();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest),
            None => (line.trim_end(), ""),
        };

        match name.to_lowercase().as_str() {
            "search" | "/" => Ok(UiCommand::Search(rest.to_string())),
            "click" | "toggle" => {
                let label = rest.trim();
                if label.is_empty() {
                    return Err(TerminalError::Usage(format!("{} <country>", name)));
                }
                Ok(UiCommand::Click(label.to_string()))
            }
            "chips" => Ok(UiCommand::Chips),
            "reload" => Ok(UiCommand::Reload),
            "help" | "?" => Ok(UiCommand::Help),
            "quit" | "exit" => Ok(UiCommand::Quit),
            "" => Err(TerminalError::Usage("empty command, try 'help'".to_string())),
            other => Err(TerminalError::Usage(format!(
                "unknown command '{}', try 'help'",
                other
            ))),
        }
    }
}
