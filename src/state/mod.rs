//! Presentation state: the per-screen search state machine and view-level
//! collection capping. The rendering layer consumes [`ScreenState`] to pick
//! which view to show; nothing here touches the network.

pub mod screen;
pub mod view;

pub use screen::{RequestToken, ScreenState, SearchScreen, SubmitDecision};
pub use view::{CappedList, VISIBLE_CAP};
