use serde::{Deserialize, Serialize};

use crate::editing::FormatCommand;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("No formatting commands configured")]
    NoCommands,
    #[error("Formatting command listed twice: {0}")]
    DuplicateCommand(FormatCommand),
}

/// Editor behaviour knobs supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EditorOptions {
    /// Commands offered to the user, in toolbar order. Anything not listed
    /// is ignored by the session.
    pub allowed_commands: Vec<FormatCommand>,
    /// Accept edits that add line breaks (the Enter key).
    pub allow_multiline_commit: bool,
    /// Accept paste payloads and hand out copies.
    pub clipboard_enabled: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            allowed_commands: FormatCommand::ALL.to_vec(),
            allow_multiline_commit: false,
            clipboard_enabled: false,
        }
    }
}

impl EditorOptions {
    pub fn allows(&self, command: FormatCommand) -> bool {
        self.allowed_commands.contains(&command)
    }

    /// An editor needs at least one command, each listed once.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.allowed_commands.is_empty() {
            return Err(OptionsError::NoCommands);
        }

        for (i, command) in self.allowed_commands.iter().enumerate() {
            if self.allowed_commands[..i].contains(command) {
                return Err(OptionsError::DuplicateCommand(*command));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_allow_every_command() {
        let options = EditorOptions::default();
        assert!(FormatCommand::ALL.iter().all(|cmd| options.allows(*cmd)));
        assert!(!options.allow_multiline_commit);
        assert!(!options.clipboard_enabled);
        assert_eq!(options.validate(), Ok(()));
    }

    #[test]
    fn empty_command_list_is_invalid() {
        let options = EditorOptions {
            allowed_commands: vec![],
            ..Default::default()
        };
        assert_eq!(options.validate(), Err(OptionsError::NoCommands));
    }

    #[test]
    fn duplicate_command_is_invalid() {
        let options = EditorOptions {
            allowed_commands: vec![
                FormatCommand::Bold,
                FormatCommand::Italic,
                FormatCommand::Bold,
            ],
            ..Default::default()
        };
        assert_eq!(
            options.validate(),
            Err(OptionsError::DuplicateCommand(FormatCommand::Bold))
        );
    }

    #[test]
    fn restricted_list_keeps_order() {
        let options = EditorOptions {
            allowed_commands: vec![FormatCommand::Link, FormatCommand::Heading],
            ..Default::default()
        };
        assert!(options.allows(FormatCommand::Heading));
        assert!(!options.allows(FormatCommand::Bold));
        assert_eq!(options.allowed_commands[0], FormatCommand::Link);
    }
}
