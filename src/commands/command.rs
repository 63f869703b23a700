//! Command parsing.
//!
//! This module converts a line typed in the terminal into a structured
//! [`Command`] that the [`Commander`](crate::commands::Commander) can run.

use command_parser::{Command as ParserCommand, Parser};
use log::debug;

use crate::{
    alerts::{AlertId, Priority},
    commands::text_response::{
        format_invalid_alert_id, format_invalid_edit, format_invalid_speed, format_unknown_command,
    },
};

/// Name every command starts with, after the `!` prefix.
pub const COMMAND_NAME: &str = "feed";

/// Represents a parsed feed command.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Display help information
    Help,
    /// List the visible alerts
    ///
    /// # Fields
    ///
    /// * `Option<Priority>` - Lowest priority to show
    /// * `Vec<String>` - Categories to show, all when empty
    List(Option<Priority>, Vec<String>),
    /// Post an alert, or start its countdown in speed mode
    Post(AlertId),
    /// Cancel the running countdown
    Cancel,
    /// Replace the draft post of an alert
    Edit(AlertId, String),
    /// Queue an alert for later
    Save(AlertId),
    /// Hide an alert from the feed
    Dismiss(AlertId),
    /// Turn speed mode on or off
    Speed(bool),
    /// Show speed mode and the running countdown
    Status,
    /// Show the performance figures
    Stats,
}

/// Errors that can occur during command parsing.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandParsingError {
    /// The line could not be parsed as a command
    UnableToParse,
    /// The command is not a feed command
    NotFeed,
    /// The command is not recognized
    Unknown,
    /// The subcommand expects an alert id
    InvalidAlertId(&'static str),
    /// The edit command lacks its id or its text
    InvalidEdit,
    /// The speed command expects `on` or `off`
    InvalidSpeed,
}

impl Command {
    /// Parses a terminal line into a Command.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The line is not a command - [`CommandParsingError::UnableToParse`]
    /// - The command is not `!feed` - [`CommandParsingError::NotFeed`]
    /// - The subcommand is not recognized - [`CommandParsingError::Unknown`]
    /// - An alert id is missing or not a number - [`CommandParsingError::InvalidAlertId`]
    /// - The edit text is missing - [`CommandParsingError::InvalidEdit`]
    /// - The speed value is not `on`/`off` - [`CommandParsingError::InvalidSpeed`]
    ///
    /// # Examples
    ///
    /// ```
    /// # use command_parser::Parser;
    /// # use minefeed::commands::command::Command;
    /// let parser = Parser::new('!', '-');
    /// let result = Command::parse(&parser, "!feed post 1");
    /// assert!(matches!(result, Ok(Command::Post(1))));
    /// ```
    pub fn parse(parser: &Parser, body: &str) -> Result<Self, CommandParsingError> {
        // Free text never reaches the parser, which would read `-` words as options
        let (head, text) = split_edit_text(body);

        // For an unknown reason the parser ignores the last word, so we add a dummy word at the end
        let head = head.to_string() + " dummy";

        // This is normal to fail if the line is not a command
        let command = match parser.parse(&head) {
            Ok(cmd) => cmd,
            Err(_) => return Err(CommandParsingError::UnableToParse),
        };

        if command.name != COMMAND_NAME {
            return Err(CommandParsingError::NotFeed);
        }

        debug!("Parsing command: {:?}", command);

        if command.arguments.is_empty() {
            return Ok(Command::Help);
        }

        match command.arguments[0].as_str() {
            "help" => Ok(Command::Help),
            "list" => Ok(Self::parse_list(&command)),
            "post" => Ok(Command::Post(Self::parse_alert_id(&command, "post")?)),
            "cancel" => Ok(Command::Cancel),
            "edit" => {
                let id = Self::parse_alert_id(&command, "edit")
                    .map_err(|_| CommandParsingError::InvalidEdit)?;
                match text {
                    Some(text) => Ok(Command::Edit(id, text.to_owned())),
                    None => Err(CommandParsingError::InvalidEdit),
                }
            }
            "save" => Ok(Command::Save(Self::parse_alert_id(&command, "save")?)),
            "dismiss" => Ok(Command::Dismiss(Self::parse_alert_id(&command, "dismiss")?)),
            "speed" => Ok(Command::Speed(Self::parse_speed(&command)?)),
            "status" => Ok(Command::Status),
            "stats" => Ok(Command::Stats),
            _ => Err(CommandParsingError::Unknown),
        }
    }

    fn parse_alert_id(
        command: &ParserCommand,
        subcommand: &'static str,
    ) -> Result<AlertId, CommandParsingError> {
        // 2 arguments: subcommand and alert id
        let Some(id) = command.arguments.get(1) else {
            return Err(CommandParsingError::InvalidAlertId(subcommand));
        };

        id.parse::<AlertId>()
            .map_err(|_| CommandParsingError::InvalidAlertId(subcommand))
    }

    fn parse_speed(command: &ParserCommand) -> Result<bool, CommandParsingError> {
        match command.arguments.get(1).map(|value| value.as_str()) {
            Some("on") => Ok(true),
            Some("off") => Ok(false),
            _ => Err(CommandParsingError::InvalidSpeed),
        }
    }

    /// `list [priority] [category...]`, an unknown priority is read as a category.
    fn parse_list(command: &ParserCommand) -> Command {
        let mut arguments = command.arguments.iter().skip(1).peekable();

        let min_priority = match arguments.peek() {
            Some(&value) if value == "all" => {
                arguments.next();
                None
            }
            Some(&value) => {
                let priority = Priority::parse(value);
                if priority.is_some() {
                    arguments.next();
                }
                priority
            }
            None => None,
        };

        Command::List(min_priority, arguments.cloned().collect())
    }
}

/// Splits an edit line into its head (`!feed edit <id>`) and the new text.
///
/// Other lines are returned whole, with no text.
fn split_edit_text(body: &str) -> (&str, Option<&str>) {
    let trimmed = body.trim();
    if trimmed.split_whitespace().nth(1) != Some("edit") {
        return (trimmed, None);
    }

    // Walk over `!feed`, `edit` and the id
    let mut rest = trimmed;
    let mut end = 0;
    for _ in 0..3 {
        let skipped = rest.len() - rest.trim_start().len();
        rest = rest.trim_start();
        let token_len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        end += skipped + token_len;
        rest = &rest[token_len..];
    }

    let text = rest.trim();
    (&trimmed[..end], (!text.is_empty()).then_some(text))
}

/// Formats a command error into a user-friendly message.
///
/// Errors for lines that are not feed commands produce no message, so that
/// regular input is silently ignored.
pub fn format_command_error(error: CommandParsingError) -> Option<String> {
    match error {
        CommandParsingError::Unknown => Some(format_unknown_command()),
        CommandParsingError::InvalidAlertId(subcommand) => {
            Some(format_invalid_alert_id(subcommand))
        }
        CommandParsingError::InvalidEdit => Some(format_invalid_edit()),
        CommandParsingError::InvalidSpeed => Some(format_invalid_speed()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_parser() -> Parser {
        Parser::new('!', '-')
    }

    #[test]
    fn test_parse_help_command() {
        let parser = create_parser();
        let result = Command::parse(&parser, "!feed help");
        assert_eq!(result, Ok(Command::Help));
    }

    #[test]
    fn test_parse_help_command_no_args() {
        let parser = create_parser();
        let result = Command::parse(&parser, "!feed");
        assert_eq!(result, Ok(Command::Help));
    }

    #[test]
    fn test_parse_list_command() {
        let parser = create_parser();
        let result = Command::parse(&parser, "!feed list");
        assert_eq!(result, Ok(Command::List(None, vec![])));
    }

    #[test]
    fn test_parse_list_command_with_priority() {
        let parser = create_parser();
        let result = Command::parse(&parser, "!feed list high");
        assert_eq!(result, Ok(Command::List(Some(Priority::High), vec![])));
    }

    #[test]
    fn test_parse_list_command_with_categories() {
        let parser = create_parser();
        let result = Command::parse(&parser, "!feed list all SEC Company");
        assert_eq!(
            result,
            Ok(Command::List(
                None,
                vec!["SEC".to_string(), "Company".to_string()]
            ))
        );
    }

    #[test]
    fn test_parse_list_command_with_priority_and_category() {
        let parser = create_parser();
        let result = Command::parse(&parser, "!feed list critical SEC");
        assert_eq!(
            result,
            Ok(Command::List(Some(Priority::Critical), vec!["SEC".to_string()]))
        );
    }

    #[test]
    fn test_parse_post_command() {
        let parser = create_parser();
        let result = Command::parse(&parser, "!feed post 2");
        assert_eq!(result, Ok(Command::Post(2)));
    }

    #[test]
    fn test_parse_post_command_missing_id() {
        let parser = create_parser();
        let result = Command::parse(&parser, "!feed post");
        assert_eq!(result, Err(CommandParsingError::InvalidAlertId("post")));
    }

    #[test]
    fn test_parse_post_command_invalid_id() {
        let parser = create_parser();
        let result = Command::parse(&parser, "!feed post first");
        assert_eq!(result, Err(CommandParsingError::InvalidAlertId("post")));
    }

    #[test]
    fn test_parse_cancel_command() {
        let parser = create_parser();
        let result = Command::parse(&parser, "!feed cancel");
        assert_eq!(result, Ok(Command::Cancel));
    }

    #[test]
    fn test_parse_edit_command() {
        let parser = create_parser();
        let result = Command::parse(
            &parser,
            "!feed edit 1 SEC approves the ETF, trading starts Monday",
        );
        assert_eq!(
            result,
            Ok(Command::Edit(
                1,
                "SEC approves the ETF, trading starts Monday".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_edit_command_keeps_dashes_in_text() {
        let parser = create_parser();
        let result = Command::parse(&parser, "!feed edit 2 Hashrate -3% this week");
        assert_eq!(
            result,
            Ok(Command::Edit(2, "Hashrate -3% this week".to_string()))
        );
    }

    #[test]
    fn test_parse_edit_command_missing_text() {
        let parser = create_parser();
        let result = Command::parse(&parser, "!feed edit 1");
        assert_eq!(result, Err(CommandParsingError::InvalidEdit));
    }

    #[test]
    fn test_parse_edit_command_invalid_id() {
        let parser = create_parser();
        let result = Command::parse(&parser, "!feed edit one new text");
        assert_eq!(result, Err(CommandParsingError::InvalidEdit));
    }

    #[test]
    fn test_parse_save_command() {
        let parser = create_parser();
        let result = Command::parse(&parser, "!feed save 3");
        assert_eq!(result, Ok(Command::Save(3)));
    }

    #[test]
    fn test_parse_dismiss_command() {
        let parser = create_parser();
        let result = Command::parse(&parser, "!feed dismiss 3");
        assert_eq!(result, Ok(Command::Dismiss(3)));
    }

    #[test]
    fn test_parse_dismiss_command_missing_id() {
        let parser = create_parser();
        let result = Command::parse(&parser, "!feed dismiss");
        assert_eq!(result, Err(CommandParsingError::InvalidAlertId("dismiss")));
    }

    #[test]
    fn test_parse_speed_command() {
        let parser = create_parser();
        assert_eq!(Command::parse(&parser, "!feed speed on"), Ok(Command::Speed(true)));
        assert_eq!(
            Command::parse(&parser, "!feed speed off"),
            Ok(Command::Speed(false))
        );
    }

    #[test]
    fn test_parse_speed_command_invalid_value() {
        let parser = create_parser();
        let result = Command::parse(&parser, "!feed speed fast");
        assert_eq!(result, Err(CommandParsingError::InvalidSpeed));
    }

    #[test]
    fn test_parse_status_and_stats_commands() {
        let parser = create_parser();
        assert_eq!(Command::parse(&parser, "!feed status"), Ok(Command::Status));
        assert_eq!(Command::parse(&parser, "!feed stats"), Ok(Command::Stats));
    }

    #[test]
    fn test_parse_unknown_command() {
        let parser = create_parser();
        let result = Command::parse(&parser, "!feed tweet 1");
        assert_eq!(result, Err(CommandParsingError::Unknown));
    }

    #[test]
    fn test_parse_not_feed_command() {
        let parser = create_parser();
        let result = Command::parse(&parser, "!other help");
        assert_eq!(result, Err(CommandParsingError::NotFeed));
    }

    #[test]
    fn test_parse_unable_to_parse() {
        let parser = create_parser();
        let result = Command::parse(&parser, "This is not a command");
        assert_eq!(result, Err(CommandParsingError::UnableToParse));
    }

    #[test]
    fn test_split_edit_text() {
        assert_eq!(
            split_edit_text("  !feed edit 12   new   text "),
            ("!feed edit 12", Some("new   text"))
        );
        assert_eq!(split_edit_text("!feed edit 12"), ("!feed edit 12", None));
        assert_eq!(split_edit_text("!feed post 12"), ("!feed post 12", None));
    }

    #[test]
    fn test_format_command_error_unknown() {
        let result = format_command_error(CommandParsingError::Unknown);
        assert!(result.unwrap().contains("Unknown command"));
    }

    #[test]
    fn test_format_command_error_invalid_alert_id() {
        let result = format_command_error(CommandParsingError::InvalidAlertId("save"));
        assert!(result.unwrap().contains("!feed save <id>"));
    }

    #[test]
    fn test_format_command_error_invalid_edit() {
        let result = format_command_error(CommandParsingError::InvalidEdit);
        assert!(result.unwrap().contains("Invalid edit"));
    }

    #[test]
    fn test_format_command_error_invalid_speed() {
        let result = format_command_error(CommandParsingError::InvalidSpeed);
        assert!(result.unwrap().contains("Invalid speed"));
    }

    #[test]
    fn test_format_command_error_silent() {
        assert!(format_command_error(CommandParsingError::UnableToParse).is_none());
        assert!(format_command_error(CommandParsingError::NotFeed).is_none());
    }
}
