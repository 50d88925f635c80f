//! Text rendering for the terminal.

use scratch_core::CardState;
use scratch_state::CardStateStream;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;

use crate::screen::ScreenEvent;

pub const DIALOG_TITLE: &str = "Version Too Old";
pub const DIALOG_TEXT: &str =
    "The version of this card is too old and cannot be activated. Please contact support for assistance.";

/// One-line description of the card.
pub fn card(state: &CardState) -> String {
    match state {
        CardState::Loading => "[card] Loading...".to_string(),
        CardState::Unscratched => "[card] Unscratched (scratch to reveal the code)".to_string(),
        CardState::Scratched(code) => format!("[card] Scratched, code {code}"),
        CardState::Activated(code) => format!("[card] Activated! code {code}"),
    }
}

pub fn event(event: &ScreenEvent) -> String {
    match event {
        ScreenEvent::Toast(message) => format!("[toast] {message}"),
        ScreenEvent::ErrorDialogOpened => {
            format!("[dialog] {DIALOG_TITLE}: {DIALOG_TEXT} (type `dismiss` to close)")
        }
    }
}

/// Print every card transition and screen event as it arrives.
///
/// Runs until both sources are closed or the handle is aborted.
pub fn spawn_renderer(
    mut states: CardStateStream,
    mut events: UnboundedReceiver<ScreenEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut states_open = true;
        let mut events_open = true;
        while states_open || events_open {
            tokio::select! {
                state = states.recv(), if states_open => match state {
                    Some(state) => println!("{}", card(&state)),
                    None => states_open = false,
                },
                ev = events.recv(), if events_open => match ev {
                    Some(ev) => println!("{}", event(&ev)),
                    None => events_open = false,
                },
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scratch_core::CardCode;

    #[test]
    fn cards_render_with_their_code() {
        let code = CardCode::new("abc").unwrap();
        assert_eq!(card(&CardState::Scratched(code.clone())), "[card] Scratched, code abc");
        assert_eq!(card(&CardState::Activated(code)), "[card] Activated! code abc");
        assert_eq!(card(&CardState::Loading), "[card] Loading...");
    }

    #[test]
    fn toasts_render_verbatim() {
        let rendered = event(&ScreenEvent::Toast("Card is already activated".into()));
        assert_eq!(rendered, "[toast] Card is already activated");
    }
}
