use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc::Sender,
        Arc,
    },
    thread,
};

use {
    anyhow::Context,
    rayon::iter::{IntoParallelRefIterator, ParallelIterator},
};

use crate::{
    chat::{Channel, ChannelKind, ChatState, Guild},
    SwitcherError,
};

use super::{ChannelItem, GuildItem, IndexItem};

// The guild channels that can be switched to.
pub const ALLOWED_CHANNEL_KINDS: [ChannelKind; 3] = [
    ChannelKind::GuildText,
    ChannelKind::GuildPublicThread,
    ChannelKind::GuildPrivateThread,
];

const CAPACITY_HINT: usize = 250;

#[derive(Debug)]
pub enum IndexEvent {
    Built(Vec<IndexItem>),
    Failed(SwitcherError),
}

// A handle to a build running in the background. The build is cancelled
// when the handle is dropped.
#[derive(Debug, Default)]
pub struct BuildHandle {
    cancelled: Arc<AtomicBool>,
}

impl BuildHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

impl Drop for BuildHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

// Builds the index on a new thread and sends the outcome on `tx`. Nothing is
// sent once the returned handle is cancelled.
pub fn spawn_build<S>(state: Arc<S>, sequential: bool, tx: Sender<IndexEvent>) -> BuildHandle
where
    S: ChatState + ?Sized + 'static,
{
    let handle = BuildHandle::default();
    let cancelled = handle.cancelled.clone();

    thread::spawn(move || {
        let is_cancelled = || cancelled.load(Ordering::Relaxed);
        let result = build_items(state.as_ref(), sequential, is_cancelled);

        if is_cancelled() {
            log::debug!("quickswitcher: index build cancelled");
            return;
        }

        _ = match result {
            Ok(items) => tx.send(IndexEvent::Built(items)),
            Err(err) => tx.send(IndexEvent::Failed(err)),
        };
    });

    handle
}

// Collects the private channels first, then each guild followed by its
// channels. Failing to list the channels of a guild only drops those channels.
pub fn build_items<S, C>(
    state: &S,
    sequential: bool,
    is_cancelled: C,
) -> Result<Vec<IndexItem>, SwitcherError>
where
    S: ChatState + ?Sized,
    C: Fn() -> bool + Sync,
{
    let mut items = Vec::with_capacity(CAPACITY_HINT);

    let dms = state
        .private_channels()
        .context("Cannot list private channels")?;

    items.extend(
        dms.into_iter()
            .map(|ch| IndexItem::from(ChannelItem::new(None, ch))),
    );

    let guilds = state
        .guilds()
        .context("Cannot list guilds")?
        .into_iter()
        .map(Arc::new)
        .collect::<Vec<_>>();

    let fetch = |guild: &Arc<Guild>| -> Option<Vec<Channel>> {
        if is_cancelled() {
            return None;
        }

        match state.channels(guild.id, &ALLOWED_CHANNEL_KINDS) {
            Ok(channels) => Some(channels),
            Err(err) => {
                log::warn!(
                    "quickswitcher: cannot populate channels for guild {}: {:#}",
                    guild.name,
                    err
                );
                None
            }
        }
    };

    // Both branches keep the guild order.
    let channels: Vec<Option<Vec<Channel>>> = if sequential {
        guilds.iter().map(fetch).collect()
    } else {
        guilds.par_iter().map(fetch).collect()
    };

    for (guild, channels) in guilds.into_iter().zip(channels) {
        items.push(GuildItem::new(guild.clone()).into());

        for ch in channels.into_iter().flatten() {
            items.push(ChannelItem::new(Some(guild.clone()), ch).into());
        }
    }

    log::debug!("quickswitcher: indexed {} items", items.len());

    Ok(items)
}
