use std::{fs, path::Path};

use {
    anyhow::{anyhow, bail, Context},
    serde::{Deserialize, Serialize},
};

use crate::SwitcherError;

use super::{Channel, ChannelKind, ChatState, Guild, GuildId};

// A cached copy of the chat-service state, read from a YAML file. Lists that
// were never cached are `None` and fail to load, the same way a cold cache
// would.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub private_channels: Option<Vec<Channel>>,
    #[serde(default)]
    pub guilds: Option<Vec<SnapshotGuild>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SnapshotGuild {
    pub id: GuildId,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub channels: Option<Vec<Channel>>,
}

impl SnapshotGuild {
    fn guild(&self) -> Guild {
        Guild {
            id: self.id,
            name: self.name.clone(),
            icon: self.icon.clone(),
        }
    }
}

impl Snapshot {
    pub fn load(path: &Path) -> Result<Self, SwitcherError> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Cannot read state file {:?}", path))?;

        Self::parse(&contents).with_context(|| format!("Invalid state file {:?}", path))
    }

    pub fn parse(contents: &str) -> Result<Self, SwitcherError> {
        let snapshot = serde_yaml::from_str(contents)?;
        Ok(snapshot)
    }
}

impl ChatState for Snapshot {
    fn private_channels(&self) -> Result<Vec<Channel>, SwitcherError> {
        self.private_channels
            .clone()
            .ok_or_else(|| anyhow!("private channels are not cached"))
    }

    fn guilds(&self) -> Result<Vec<Guild>, SwitcherError> {
        match &self.guilds {
            Some(guilds) => Ok(guilds.iter().map(SnapshotGuild::guild).collect()),
            None => bail!("guilds are not cached"),
        }
    }

    fn channels(
        &self,
        guild_id: GuildId,
        kinds: &[ChannelKind],
    ) -> Result<Vec<Channel>, SwitcherError> {
        let guild = self
            .guilds
            .iter()
            .flatten()
            .find(|guild| guild.id == guild_id)
            .ok_or_else(|| anyhow!("unknown guild {}", guild_id))?;

        let channels = guild
            .channels
            .as_ref()
            .ok_or_else(|| anyhow!("channels of guild {} are not cached", guild_id))?;

        Ok(channels
            .iter()
            .filter(|ch| kinds.contains(&ch.kind))
            .cloned()
            .collect())
    }
}
