//! # Interactive Session
//!
//! Parses one command per line and applies it to the screen in front.
//! Navigating with `open` drops the previous screen together with its
//! [`ScreenScope`](crate::screen::ScreenScope), which is how a user leaving a
//! screen mid-operation is modelled.

use scratch_oracle::VersionOracle;
use scratch_workflow::ActivationWorkflow;
use thiserror::Error;
use tokio::sync::mpsc::UnboundedSender;

use crate::render;
use crate::screen::{ActivationAction, ScratchAction, Screen, ScreenEvent, ScreenKind};

pub const HELP: &str = "\
commands:
  open <main|scratch|activation>  switch screens
  scratch                         scratch the card (scratch screen)
  activate                        activate the card (activation screen)
  dismiss                         close the error dialog (activation screen)
  status [--json]                 show the card
  help                            show this list
  quit                            stop and exit";

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Open(ScreenKind),
    Scratch,
    Activate,
    Dismiss,
    Status { json: bool },
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}` (type `help`)")]
    Unknown(String),
    #[error("`open` needs a screen: main, scratch or activation")]
    MissingScreen,
    #[error("unknown screen `{0}`: expected main, scratch or activation")]
    UnknownScreen(String),
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
}

impl Command {
    /// Parse one line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };
        let command = match head {
            "open" => {
                let target = words.next().ok_or(CommandError::MissingScreen)?;
                Self::Open(target.parse().map_err(CommandError::UnknownScreen)?)
            }
            "scratch" => Self::Scratch,
            "activate" => Self::Activate,
            "dismiss" => Self::Dismiss,
            "status" => match words.next() {
                None => Self::Status { json: false },
                Some("--json") => Self::Status { json: true },
                Some(other) => return Err(CommandError::UnexpectedArgument(other.to_string())),
            },
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        if let Some(extra) = words.next() {
            return Err(CommandError::UnexpectedArgument(extra.to_string()));
        }
        Ok(Some(command))
    }
}

/// Result of executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this.
    Text(String),
    /// Nothing to print; the renderer reports what happened.
    Silent,
    /// Leave the loop.
    Quit,
}

/// The interactive session: one workflow and the screen in front.
#[derive(Debug)]
pub struct Session<O> {
    workflow: ActivationWorkflow<O>,
    events: UnboundedSender<ScreenEvent>,
    screen: Screen<O>,
}

impl<O: VersionOracle> Session<O> {
    /// Start on the main screen.
    pub fn new(workflow: ActivationWorkflow<O>, events: UnboundedSender<ScreenEvent>) -> Self {
        let screen = Screen::open(ScreenKind::Main, &workflow, &events);
        Self {
            workflow,
            events,
            screen,
        }
    }

    pub fn screen(&self) -> &Screen<O> {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen<O> {
        &mut self.screen
    }

    pub fn execute(&mut self, command: Command) -> Reply {
        match command {
            Command::Open(kind) => {
                // Assigning drops the old screen and aborts its follow-ups.
                self.screen = Screen::open(kind, &self.workflow, &self.events);
                tracing::debug!(screen = %kind, "screen opened");
                Reply::Text(format!("[{kind}] {}", render::card(&self.workflow.store().current())))
            }
            Command::Scratch => match &mut self.screen {
                Screen::Scratch(screen) => {
                    screen.on_action(ScratchAction::Scratch);
                    Reply::Silent
                }
                other => wrong_screen(other.kind(), ScreenKind::Scratch),
            },
            Command::Activate => match &mut self.screen {
                Screen::Activation(screen) => {
                    screen.on_action(ActivationAction::Activate);
                    Reply::Silent
                }
                other => wrong_screen(other.kind(), ScreenKind::Activation),
            },
            Command::Dismiss => match &mut self.screen {
                Screen::Activation(screen) => {
                    screen.on_action(ActivationAction::DismissErrorDialog);
                    Reply::Text("dialog closed".to_string())
                }
                other => wrong_screen(other.kind(), ScreenKind::Activation),
            },
            Command::Status { json } => Reply::Text(self.status(json)),
            Command::Help => Reply::Text(HELP.to_string()),
            Command::Quit => {
                self.workflow.scope().shutdown();
                Reply::Quit
            }
        }
    }

    fn status(&self, json: bool) -> String {
        let kind = self.screen.kind();
        let (card, dialog) = match &self.screen {
            Screen::Main(screen) => (screen.card(), None),
            Screen::Scratch(screen) => (screen.card(), None),
            Screen::Activation(screen) => {
                let view = screen.view();
                (view.card, Some(view.show_error_dialog))
            }
        };
        if json {
            let mut body = serde_json::json!({
                "screen": kind.to_string(),
                "card": card,
            });
            if let Some(open) = dialog {
                body["show_error_dialog"] = serde_json::Value::Bool(open);
            }
            body.to_string()
        } else {
            let mut line = format!("[{kind}] {}", render::card(&card));
            if dialog == Some(true) {
                line.push_str(&format!(" [dialog: {}]", render::DIALOG_TITLE));
            }
            line
        }
    }
}

fn wrong_screen(current: ScreenKind, needed: ScreenKind) -> Reply {
    Reply::Text(format!(
        "not available on the {current} screen (use `open {needed}`)"
    ))
}
