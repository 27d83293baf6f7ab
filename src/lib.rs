pub mod chat;
pub mod cli;
pub mod config;
pub mod switcher;

#[cfg(test)]
pub(crate) mod fixtures;

pub use self::{
    chat::{Channel, ChannelKind, ChatState, Guild, Snapshot, User},
    switcher::{Index, IndexItem, Indexable, QuickSwitcher, RenderContext, Row},
};

// The error type used throughout the crate.
pub type SwitcherError = anyhow::Error;
