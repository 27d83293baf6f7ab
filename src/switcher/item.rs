use std::sync::Arc;

use crate::chat::{Channel, Guild};

use super::{
    row::{initials, Row, RowIcon},
    RenderContext,
};

// The capabilities the switcher needs from anything it indexes.
pub trait Indexable {
    // The string that queries are fuzzy matched against.
    fn search_str(&self) -> &str;

    // Describes how the item is displayed as a search result.
    fn row(&self, ctx: &RenderContext) -> Row;
}

// A direct message, group message or guild channel.
#[derive(Clone, Debug)]
pub struct ChannelItem {
    pub channel: Channel,
    // The guild owning the channel. `None` for direct and group messages.
    pub guild: Option<Arc<Guild>>,
    // The display name, resolved once on construction.
    pub name: String,
    search: String,
}

impl ChannelItem {
    pub fn new(guild: Option<Arc<Guild>>, channel: Channel) -> Self {
        let name = if !channel.name.is_empty() {
            channel.name.clone()
        } else if let [recipient] = channel.recipients.as_slice() {
            recipient.tag()
        } else {
            channel.recipient_names()
        };

        let search = match &guild {
            Some(guild) => format!("{} {}", guild.name, name),
            None => name.clone(),
        };

        Self {
            channel,
            guild,
            name,
            search,
        }
    }

    fn icon(&self, ctx: &RenderContext) -> RowIcon {
        if !self.channel.kind.is_direct() {
            return RowIcon::Hash {
                nsfw: self.channel.nsfw,
            };
        }

        let url = match self.channel.recipients.as_slice() {
            [recipient] => Some(inject_avatar_size(&recipient.avatar_url(), ctx.avatar_size)),
            _ => None,
        };

        RowIcon::Avatar {
            initials: initials(&self.name),
            url,
        }
    }
}

impl Indexable for ChannelItem {
    fn search_str(&self) -> &str {
        &self.search
    }

    fn row(&self, ctx: &RenderContext) -> Row {
        let guild_name = self.guild.as_ref().map(|guild| guild.name.clone());
        let tooltip = match &guild_name {
            Some(guild) => format!("{} ({})", self.name, guild),
            None => self.name.clone(),
        };

        Row {
            icon: self.icon(ctx),
            name: self.name.clone(),
            guild_name,
            tooltip: Some(tooltip),
        }
    }
}

#[derive(Clone, Debug)]
pub struct GuildItem {
    pub guild: Arc<Guild>,
}

impl GuildItem {
    pub fn new(guild: Arc<Guild>) -> Self {
        Self { guild }
    }
}

impl Indexable for GuildItem {
    fn search_str(&self) -> &str {
        &self.guild.name
    }

    fn row(&self, _: &RenderContext) -> Row {
        Row {
            icon: RowIcon::Avatar {
                initials: initials(&self.guild.name),
                url: self.guild.icon_url(),
            },
            name: self.guild.name.clone(),
            guild_name: None,
            tooltip: None,
        }
    }
}

// An entry of the switcher index.
#[derive(Clone, Debug)]
pub enum IndexItem {
    Channel(ChannelItem),
    Guild(GuildItem),
}

impl IndexItem {
    pub fn name(&self) -> &str {
        match self {
            IndexItem::Channel(item) => &item.name,
            IndexItem::Guild(item) => &item.guild.name,
        }
    }
}

impl Indexable for IndexItem {
    fn search_str(&self) -> &str {
        match self {
            IndexItem::Channel(item) => item.search_str(),
            IndexItem::Guild(item) => item.search_str(),
        }
    }

    fn row(&self, ctx: &RenderContext) -> Row {
        match self {
            IndexItem::Channel(item) => item.row(ctx),
            IndexItem::Guild(item) => item.row(ctx),
        }
    }
}

impl From<ChannelItem> for IndexItem {
    fn from(item: ChannelItem) -> Self {
        IndexItem::Channel(item)
    }
}

impl From<GuildItem> for IndexItem {
    fn from(item: GuildItem) -> Self {
        IndexItem::Guild(item)
    }
}

// Asks the CDN for the smallest power of two size that covers `size`.
fn inject_avatar_size(url: &str, size: u32) -> String {
    let size = size.clamp(16, 4096).next_power_of_two();
    let base = url.split('?').next().unwrap_or(url);
    format!("{}?size={}", base, size)
}
