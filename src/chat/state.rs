use crate::SwitcherError;

use super::{Channel, ChannelKind, Guild, GuildId};

// The chat-service state the switcher index is built from. Implementations
// are shared read-only between the owner and the index builder.
pub trait ChatState: Send + Sync {
    // Lists the direct and group message channels.
    fn private_channels(&self) -> Result<Vec<Channel>, SwitcherError>;

    // Lists the guilds the user is a member of.
    fn guilds(&self) -> Result<Vec<Guild>, SwitcherError>;

    // Lists the channels of `guild_id` whose kind is one of `kinds`.
    fn channels(&self, guild_id: GuildId, kinds: &[ChannelKind])
        -> Result<Vec<Channel>, SwitcherError>;
}
