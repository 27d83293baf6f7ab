pub mod model;
pub mod snapshot;
pub mod state;

pub use self::{
    model::{Channel, ChannelId, ChannelKind, Guild, GuildId, User, UserId},
    snapshot::Snapshot,
    state::ChatState,
};

pub const CDN_URL: &str = "https://cdn.discordapp.com";
