pub mod args;
pub mod logger;

use std::{
    io::{self, BufRead, Write},
    sync::Arc,
};

use colored::Colorize;

use crate::{
    chat::Snapshot,
    config::Config,
    switcher::{Index, IndexItem, Indexable, QuickSwitcher, RenderContext, RowIcon},
    SwitcherError,
};

pub use self::{args::Args, logger::Logger};

pub struct Cli {}

impl Cli {
    pub fn run() -> Result<(), SwitcherError> {
        let config = Config::parse_config()?;

        if config.plain {
            colored::control::set_override(false);
        }

        let state = Arc::new(Snapshot::load(&config.state_path)?);
        let reporter = |err: &SwitcherError| {
            eprintln!("{} {:#}", "[quickswitch error]:".red().bold(), err);
        };

        let mut switcher = QuickSwitcher::new(state, reporter).sequential(config.sequential);
        let mut logger = Logger::start("building index");

        switcher.update(|index: &mut Index| log::debug!("index holds {} items", index.len()));
        switcher.wait();
        logger.stop(&format!("{} items", switcher.index().len()));

        let mut stdout = io::stdout().lock();

        match &config.query {
            Some(query) => Self::print_matches(&mut stdout, &mut switcher, query, &config)?,
            None => {
                for line in io::stdin().lock().lines() {
                    let query = line?;
                    Self::print_matches(&mut stdout, &mut switcher, query.trim_end(), &config)?;
                    writeln!(stdout)?;
                    stdout.flush()?;
                }
            }
        }

        Ok(())
    }

    fn print_matches<W: Write>(
        out: &mut W,
        switcher: &mut QuickSwitcher<Snapshot>,
        query: &str,
        config: &Config,
    ) -> Result<(), SwitcherError> {
        for item in switcher.search(query) {
            Self::print_item(out, item, &config.render, config.show_urls)?;
        }

        Ok(())
    }

    fn print_item<W: Write>(
        out: &mut W,
        item: &IndexItem,
        ctx: &RenderContext,
        show_urls: bool,
    ) -> Result<(), SwitcherError> {
        let row = item.row(ctx);
        let layout = row.layout(ctx.width);

        let icon = format!("{}{:pad$}", layout.icon, "", pad = layout.icon_padding());
        let icon = match &row.icon {
            RowIcon::Hash { nsfw: true } => icon.red(),
            RowIcon::Hash { nsfw: false } => icon.cyan(),
            RowIcon::Avatar { .. } => icon.magenta(),
        };
        let name = match item {
            IndexItem::Guild(_) => layout.name.bold().green(),
            IndexItem::Channel(_) => layout.name.bold(),
        };

        write!(out, "{}{}", icon, name)?;
        if let Some(guild) = &layout.guild_name {
            write!(out, "{:gap$}{}", "", guild.dimmed(), gap = layout.gap())?;
        }
        writeln!(out)?;

        if let RowIcon::Avatar { url: Some(url), .. } = &row.icon {
            if show_urls {
                writeln!(out, "   {}", url.dimmed())?;
            }
        }

        Ok(())
    }
}
