//! Controller layer: UI actions, error modeling, and their application to the session.

pub mod events;
pub mod orchestration;
