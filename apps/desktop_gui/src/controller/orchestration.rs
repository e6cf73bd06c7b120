//! Applies UI actions to the session.

use rand::Rng;
use session::{RunState, VisualizerSession};

use crate::controller::events::{UiAction, UiError, UiErrorContext};

/// Text field contents plus whether they changed since the last load.
#[derive(Debug, Default, Clone)]
pub struct InputField {
    pub text: String,
    pub dirty: bool,
}

impl InputField {
    pub fn edited(&mut self) {
        self.dirty = true;
    }

    fn replace(&mut self, text: String) {
        self.text = text;
        self.dirty = false;
    }
}

pub fn apply_action<R: Rng + ?Sized>(
    session: &mut VisualizerSession,
    input: &mut InputField,
    action: UiAction,
    rng: &mut R,
) -> Result<(), UiError> {
    tracing::debug!(?action, state = ?session.run_state(), "ui action");

    match action {
        UiAction::SortPressed => match session.run_state() {
            RunState::Running => {
                session.pause();
                Ok(())
            }
            RunState::Paused => session
                .start()
                .map_err(|err| UiError::from_session(UiErrorContext::StartRun, &err)),
            RunState::Idle | RunState::Completed => {
                if input.dirty || session.sequence().is_empty() {
                    session
                        .load_text(&input.text)
                        .map_err(|err| UiError::from_session(UiErrorContext::ParseInput, &err))?;
                    input.dirty = false;
                }
                session
                    .start()
                    .map_err(|err| UiError::from_session(UiErrorContext::StartRun, &err))
            }
        },
        UiAction::ResetPressed => {
            session.reset();
            input.replace(String::new());
            Ok(())
        }
        UiAction::RandomPressed => {
            let text = session
                .randomize(rng)
                .map_err(|err| UiError::from_session(UiErrorContext::GenerateRandom, &err))?
                .to_string();
            input.replace(text);
            Ok(())
        }
        UiAction::SpeedChanged(level) => {
            session.set_speed(level);
            Ok(())
        }
    }
}
