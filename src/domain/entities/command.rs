/// Result of matching a message against the configured command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    pub matched: bool,
    pub arguments: Vec<String>,
}

impl ParsedCommand {
    pub fn matched(arguments: Vec<String>) -> Self {
        Self {
            matched: true,
            arguments,
        }
    }

    pub fn unmatched() -> Self {
        Self::default()
    }
}
