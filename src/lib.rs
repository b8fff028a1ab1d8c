//! View state of the certification dashboard.
//!
//! Handlers in [`view`] react to clicks on the dashboard and save what the
//! user picked; [`restore`] puts the page back the way it was on the next
//! load. Both work against the [`page::Page`] and [`store::KeyValueStore`]
//! traits, implemented by the live document and `localStorage` in the wasm
//! build and by in-memory fakes everywhere else.

pub mod cfg;
pub mod error;
pub mod model;
pub mod page;
pub mod restore;
pub mod store;
pub mod view;

#[cfg(target_family = "wasm")]
mod web;

pub use cfg::Config;
pub use error::ViewError;
pub use model::{Id, SectionColour, SectionStatus, Tab};
pub use restore::{Restored, restore, restore_on_route};
pub use view::{Expansion, PendingClear, ViewController};
