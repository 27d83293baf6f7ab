use std::sync::{
    mpsc::{self, Receiver, Sender},
    Mutex,
};

use crate::{
    chat::{
        snapshot::SnapshotGuild, Channel, ChannelId, ChannelKind, ChatState, Guild, GuildId,
        Snapshot, User, UserId,
    },
    SwitcherError,
};

pub fn user(id: u64, username: &str) -> User {
    User {
        id: UserId(id),
        username: username.into(),
        discriminator: "0".into(),
        ..Default::default()
    }
}

pub fn dm(id: u64, username: &str) -> Channel {
    Channel {
        id: ChannelId(id),
        kind: ChannelKind::DirectMessage,
        recipients: vec![user(id * 10, username)],
        ..Default::default()
    }
}

pub fn group_dm(id: u64, usernames: &[&str]) -> Channel {
    Channel {
        id: ChannelId(id),
        kind: ChannelKind::GroupDm,
        recipients: usernames
            .iter()
            .enumerate()
            .map(|(i, name)| user(id * 10 + i as u64, name))
            .collect(),
        ..Default::default()
    }
}

pub fn guild(id: u64, name: &str) -> Guild {
    Guild {
        id: GuildId(id),
        name: name.into(),
        icon: None,
    }
}

pub fn channel(id: u64, kind: ChannelKind, name: &str) -> Channel {
    Channel {
        id: ChannelId(id),
        kind,
        name: name.into(),
        ..Default::default()
    }
}

pub fn text_channel(id: u64, name: &str) -> Channel {
    channel(id, ChannelKind::GuildText, name)
}

pub fn snapshot_guild(id: u64, name: &str, channels: Option<Vec<Channel>>) -> SnapshotGuild {
    SnapshotGuild {
        id: GuildId(id),
        name: name.into(),
        icon: None,
        channels,
    }
}

// A DM with bob, and a guild with two text channels and a voice channel.
pub fn snapshot() -> Snapshot {
    Snapshot {
        private_channels: Some(vec![dm(1, "Bob")]),
        guilds: Some(vec![snapshot_guild(
            100,
            "Guild A",
            Some(vec![
                text_channel(101, "general"),
                channel(102, ChannelKind::GuildVoice, "lounge"),
                text_channel(103, "random"),
            ]),
        )]),
    }
}

// The display names of `items`, in order.
pub fn names<'a, I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a crate::IndexItem>,
{
    items
        .into_iter()
        .map(|item| item.name().to_string())
        .collect()
}

// Holds a build inside `private_channels` until the gate opens.
pub struct Gated {
    inner: Snapshot,
    gate: Mutex<Receiver<()>>,
}

impl Gated {
    pub fn new(inner: Snapshot) -> (Self, Sender<()>) {
        let (tx, rx) = mpsc::channel();
        let gated = Gated {
            inner,
            gate: Mutex::new(rx),
        };

        (gated, tx)
    }
}

impl ChatState for Gated {
    fn private_channels(&self) -> Result<Vec<Channel>, SwitcherError> {
        _ = self.gate.lock().unwrap().recv();
        self.inner.private_channels()
    }

    fn guilds(&self) -> Result<Vec<Guild>, SwitcherError> {
        self.inner.guilds()
    }

    fn channels(
        &self,
        guild_id: GuildId,
        kinds: &[ChannelKind],
    ) -> Result<Vec<Channel>, SwitcherError> {
        self.inner.channels(guild_id, kinds)
    }
}
