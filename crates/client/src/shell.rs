//! Line-oriented game loop state, independent of stdin and stdout.

use game_core::ActionError;
use runtime::{Event, Session, Topic};
use tokio::sync::broadcast::{self, error::TryRecvError};

use crate::commands::{self, Command, HELP};
use crate::config::DisplayConfig;
use crate::render;

/// Text produced by one input line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    pub quit: bool,
}

impl Reply {
    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}

/// Runs commands against a [`Session`] and turns bus traffic into text.
pub struct Shell {
    session: Session,
    receivers: Vec<broadcast::Receiver<Event>>,
    display: DisplayConfig,
}

impl Shell {
    pub fn new(session: Session, display: DisplayConfig) -> Self {
        let receivers = session
            .bus()
            .subscribe_multiple(&Topic::ALL)
            .into_values()
            .collect();
        Self {
            session,
            receivers,
            display,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Opening text: the board and a hint.
    pub fn greeting(&self) -> Vec<String> {
        let mut lines = vec![render::board(self.session.engine().grid())];
        lines.extend(render::roster(self.session.engine().grid()));
        lines.push("type 'help' for commands".to_string());
        lines
    }

    pub fn run_line(&mut self, line: &str) -> Reply {
        let mut reply = Reply::default();

        let command = match commands::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return reply,
            Err(error) => {
                reply.push(error.to_string());
                return reply;
            }
        };

        let read_only = matches!(
            command,
            Command::Show | Command::Info(_) | Command::Help | Command::Quit
        );
        if self.session.engine().is_over() && !read_only {
            reply.push("the battle is over; 'quit' to leave");
            return reply;
        }

        match command {
            Command::Show => {
                reply.push(render::board(self.session.engine().grid()));
                reply.lines.extend(render::roster(self.session.engine().grid()));
            }
            Command::Info(unit) => match self.session.engine().unit(unit) {
                Some(found) => reply.push(found.to_string()),
                None => reply.push(ActionError::UnknownUnit(unit).to_string()),
            },
            Command::Move { unit, to } => {
                let result = self.session.move_unit(unit, to);
                self.report(result.err(), &mut reply);
            }
            Command::Attack { unit, target } => {
                let result = self.session.attack_unit(unit, target);
                self.report(result.err(), &mut reply);
            }
            Command::Cast { unit, slot, target } => {
                let result = self.session.cast_skill(unit, slot, target);
                self.report(result.err(), &mut reply);
            }
            Command::Wait(unit) => {
                let result = self.session.wait_unit(unit);
                self.report(result.err(), &mut reply);
            }
            Command::End => {
                let summary = self.session.end_turn();
                self.collect(&mut reply);
                for opponent in &summary.opponent_moves {
                    if let Some(error) = &opponent.rejection {
                        reply.push(format!("enemy {} hesitates: {}", opponent.unit, error));
                    }
                }
                if self.display.board_after_turn {
                    reply.push(render::board(self.session.engine().grid()));
                }
            }
            Command::Help => reply.push(HELP),
            Command::Quit => reply.quit = true,
        }
        reply
    }

    /// Appends event lines, then the rejection when the engine did not
    /// already announce it as a notification.
    fn report(&mut self, rejection: Option<ActionError>, reply: &mut Reply) {
        self.collect(reply);
        if let Some(error) = rejection
            && !self.session.engine().config().notify_rejections
        {
            reply.push(format!("! {}", error));
        }
    }

    /// Drains every receiver and renders the events in publish order.
    fn collect(&mut self, reply: &mut Reply) {
        let mut events = Vec::new();
        for receiver in &mut self.receivers {
            loop {
                match receiver.try_recv() {
                    Ok(event) => events.push(event),
                    Err(TryRecvError::Lagged(skipped)) => {
                        tracing::warn!("Dropped {} stale events", skipped);
                    }
                    Err(TryRecvError::Empty | TryRecvError::Closed) => break,
                }
            }
        }
        events.sort_by_key(|event| event.seq);

        let engine = self.session.engine();
        reply.lines.extend(
            events
                .iter()
                .filter_map(|event| render::describe(engine, &event.event, &self.display)),
        );
    }
}
