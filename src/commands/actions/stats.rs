//! Performance figures command handler.

use log::debug;

use crate::{
    commands::{CommandContext, CommandResult, text_response::format_stats},
    notifier::Notifier,
};

pub fn handle_stats<N: Notifier>(context: &CommandContext<'_, N>) -> CommandResult {
    debug!("handling stats command");

    CommandResult::text(format_stats(context.tracker))
}
