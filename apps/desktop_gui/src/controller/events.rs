//! UI actions and error modeling for the visualizer controller.

use session::SessionError;
use shared::{domain::SpeedLevel, error::ErrorCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Sort/Pause toggle.
    SortPressed,
    ResetPressed,
    RandomPressed,
    SpeedChanged(SpeedLevel),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Validation,
    RunState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    ParseInput,
    GenerateRandom,
    StartRun,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    code: Option<ErrorCode>,
    message: String,
}

impl UiError {
    pub fn from_session(context: UiErrorContext, err: &SessionError) -> Self {
        let (category, code, message) = match err {
            SessionError::Validation(inner) => {
                let code = inner.code();
                let message = match code {
                    ErrorCode::Parse => {
                        "Invalid input. Please enter numbers separated by commas.".to_string()
                    }
                    ErrorCode::Range | ErrorCode::Empty => capitalize(&inner.to_string()),
                };
                (UiErrorCategory::Validation, Some(code), message)
            }
            SessionError::RunActive | SessionError::NothingToSort => {
                (UiErrorCategory::RunState, None, capitalize(&err.to_string()))
            }
        };
        Self {
            category,
            context,
            code,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    /// Validation code behind the error; `None` for run state errors.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn title(&self) -> &'static str {
        match self.category {
            UiErrorCategory::Validation => "Invalid Input",
            UiErrorCategory::RunState => "Cannot Do That Now",
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
