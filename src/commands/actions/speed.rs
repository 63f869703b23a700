//! Speed mode command handler.
//!
//! Turning speed mode off leaves a running countdown alone, it still posts
//! unless cancelled.

use log::debug;

use crate::{
    commands::{
        CommandContext, CommandResult,
        text_response::{format_countdown_tick, format_speed_mode},
    },
    notifier::Notifier,
};

pub fn handle_speed<N: Notifier>(
    context: &mut CommandContext<'_, N>,
    speed_mode: bool,
) -> CommandResult {
    debug!("handling speed command: {}", speed_mode);

    context.feed.set_speed_mode(speed_mode);

    let mut response = format_speed_mode(speed_mode);
    if let Some(session) = context.feed.countdown() {
        response.push('\n');
        response.push_str(&format_countdown_tick(&session));
    }

    CommandResult::text(response)
}
