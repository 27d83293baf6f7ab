use std::fmt;

use serde::{Deserialize, Serialize};

use super::CDN_URL;

macro_rules! snowflake {
    ($name:ident) => {
        #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Ord, PartialOrd)]
        #[derive(Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

snowflake!(UserId);
snowflake!(ChannelId);
snowflake!(GuildId);

// A user as seen in a channel's recipient list.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    // Legacy four digit discriminator. Migrated accounts use "0".
    #[serde(default)]
    pub discriminator: String,
    // The global display name, if the user set one.
    #[serde(default)]
    pub display_name: Option<String>,
    // The avatar hash, if the user uploaded one.
    #[serde(default)]
    pub avatar: Option<String>,
}

impl User {
    // The username, with the discriminator appended for legacy accounts.
    pub fn tag(&self) -> String {
        match self.discriminator.as_str() {
            "" | "0" => self.username.clone(),
            discriminator => format!("{}#{}", self.username, discriminator),
        }
    }

    pub fn display_or_username(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.username,
        }
    }

    pub fn avatar_url(&self) -> String {
        match &self.avatar {
            Some(hash) => format!(
                "{}/avatars/{}/{}.{}",
                CDN_URL,
                self.id,
                hash,
                image_ext(hash)
            ),
            None => format!(
                "{}/embed/avatars/{}.png",
                CDN_URL,
                self.default_avatar_index()
            ),
        }
    }

    fn default_avatar_index(&self) -> u64 {
        match self.discriminator.parse::<u64>() {
            Ok(discriminator) if discriminator != 0 => discriminator % 5,
            _ => (self.id.0 >> 22) % 6,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    #[default]
    GuildText,
    DirectMessage,
    GuildVoice,
    GroupDm,
    GuildCategory,
    GuildAnnouncement,
    AnnouncementThread,
    GuildPublicThread,
    GuildPrivateThread,
    GuildStageVoice,
    GuildForum,
}

impl ChannelKind {
    // Whether the channel lives outside of any guild.
    pub fn is_direct(&self) -> bool {
        matches!(self, ChannelKind::DirectMessage | ChannelKind::GroupDm)
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: ChannelId,
    #[serde(default)]
    pub kind: ChannelKind,
    // The explicit channel name. Empty for most direct messages.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nsfw: bool,
    // The other participants of a direct or group message.
    #[serde(default)]
    pub recipients: Vec<User>,
}

impl Channel {
    // A name for a channel built from its recipients, used when the channel
    // has no explicit name.
    pub fn recipient_names(&self) -> String {
        let names = self
            .recipients
            .iter()
            .map(User::display_or_username)
            .collect::<Vec<_>>();

        match names.as_slice() {
            [] => String::new(),
            [only] => only.to_string(),
            [init @ .., last] => format!("{} and {}", init.join(", "), last),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Guild {
    pub id: GuildId,
    pub name: String,
    // The icon hash, if the guild has an icon.
    #[serde(default)]
    pub icon: Option<String>,
}

impl Guild {
    pub fn icon_url(&self) -> Option<String> {
        self.icon.as_ref().map(|hash| {
            format!("{}/icons/{}/{}.{}", CDN_URL, self.id, hash, image_ext(hash))
        })
    }
}

// Animated assets have hashes prefixed with "a_".
fn image_ext(hash: &str) -> &'static str {
    match hash.starts_with("a_") {
        true => "gif",
        false => "png",
    }
}
