//! Command orchestration and execution.
//!
//! This module provides the [`Commander`] struct, the entry point for the
//! lines typed in the terminal. It parses them and routes the resulting
//! commands to their handlers.
//!
//! # Flow
//!
//! ```text
//! Terminal line → parse() → Command → execute() → CommandResult
//! ```

use command_parser::Parser;

use crate::{
    commands::{
        CommandContext, CommandParseError, CommandResult,
        actions::{
            handle_cancel, handle_dismiss, handle_edit, handle_help, handle_list, handle_post,
            handle_save, handle_speed, handle_stats, handle_status,
        },
        command::{Command, format_command_error},
    },
    notifier::Notifier,
};

/// Command orchestrator for parsing and executing feed commands.
///
/// All commands must start with the `!feed` prefix. Other lines are silently
/// ignored (returning [`CommandParseError::NotForFeed`]).
pub struct Commander {
    /// Command parser for processing user commands
    parser: Parser,
}

impl Default for Commander {
    fn default() -> Self {
        Self::new()
    }
}

impl Commander {
    /// Creates a new Commander, with `!` as the command prefix and `-` as the
    /// option prefix.
    pub fn new() -> Self {
        let parser = Parser::new('!', '-');
        Commander { parser }
    }

    /// Parses a terminal line into a structured command.
    ///
    /// # Returns
    ///
    /// * `Ok(Command)` - Successfully parsed and validated command
    /// * `Err(CommandParseError::NotForFeed)` - The line is not a feed command
    /// * `Err(CommandParseError::InvalidCommand)` - Command syntax is invalid
    ///
    /// # Examples
    ///
    /// ```
    /// # use minefeed::commands::Commander;
    /// let commander = Commander::new();
    ///
    /// assert!(commander.parse("!feed help").is_ok());
    /// assert!(commander.parse("Hello, world!").is_err());
    /// ```
    pub fn parse(&self, body: &str) -> Result<Command, CommandParseError> {
        Command::parse(&self.parser, body).map_err(|error| {
            // Stay silent when the line is not for the feed
            match format_command_error(error) {
                Some(message) => CommandParseError::InvalidCommand(message),
                None => CommandParseError::NotForFeed,
            }
        })
    }

    /// Executes a parsed command against the feed.
    ///
    /// # Command Handlers
    ///
    /// - [`Command::Help`] → [`handle_help`]
    /// - [`Command::List`] → [`handle_list`]
    /// - [`Command::Post`] → [`handle_post`]
    /// - [`Command::Cancel`] → [`handle_cancel`]
    /// - [`Command::Edit`] → [`handle_edit`]
    /// - [`Command::Save`] → [`handle_save`]
    /// - [`Command::Dismiss`] → [`handle_dismiss`]
    /// - [`Command::Speed`] → [`handle_speed`]
    /// - [`Command::Status`] → [`handle_status`]
    /// - [`Command::Stats`] → [`handle_stats`]
    pub fn execute<N: Notifier>(
        &self,
        command: &Command,
        context: &mut CommandContext<'_, N>,
    ) -> CommandResult {
        match command {
            Command::Help => handle_help(),
            Command::List(min_priority, categories) => {
                handle_list(context, *min_priority, categories)
            }
            Command::Post(id) => handle_post(context, *id),
            Command::Cancel => handle_cancel(context),
            Command::Edit(id, text) => handle_edit(context, *id, text),
            Command::Save(id) => handle_save(context, *id),
            Command::Dismiss(id) => handle_dismiss(context, *id),
            Command::Speed(speed_mode) => handle_speed(context, *speed_mode),
            Command::Status => handle_status(context),
            Command::Stats => handle_stats(context),
        }
    }
}
