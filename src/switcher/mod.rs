pub mod builder;
pub mod index;
pub mod item;
pub mod quick_switcher;
pub mod row;

pub use self::{
    builder::{build_items, spawn_build, BuildHandle, IndexEvent, ALLOWED_CHANNEL_KINDS},
    index::{Index, Matches, SEARCH_LIMIT},
    item::{ChannelItem, GuildItem, IndexItem, Indexable},
    quick_switcher::{ErrorReporter, QuickSwitcher},
    row::{RenderContext, Row, RowIcon, RowLayout},
};
