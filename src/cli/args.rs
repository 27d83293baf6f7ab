use std::path::PathBuf;

use {
    anyhow::bail,
    clap::{error::ErrorKind, Parser},
};

use crate::SwitcherError;

pub const MIN_WIDTH: usize = 20;
pub const MAX_WIDTH: usize = 500;

// A struct that represents the command line arguments.
#[derive(Debug, Default, Parser)]
#[command(
    author = "Tim Dubbins",
    about = "A fuzzy quick switcher for chat channels and guilds",
    version = crate::config::VERSION,
)]
pub struct Args {
    /// The query to search for. Reads one query per line from stdin if omitted
    #[arg(index = 1)]
    pub query: Option<String>,

    /// The chat state file to build the index from
    #[arg(short = 's', long = "state")]
    pub state: Option<PathBuf>,

    /// Fetch guild channels one guild at a time
    #[arg(long = "sequential")]
    pub sequential: bool,

    /// The width of the printed rows
    #[arg(short = 'w', long = "width")]
    pub width: Option<usize>,

    /// The avatar size requested in avatar urls
    #[arg(long = "avatar-size")]
    pub avatar_size: Option<u32>,

    /// Print rows without colors
    #[arg(short = 'p', long = "plain")]
    pub plain: bool,

    /// Print the avatar url under each row
    #[arg(short = 'u', long = "urls")]
    pub show_urls: bool,
}

impl Args {
    pub fn parse_args() -> Result<Self, SwitcherError> {
        let args = Self::try_parse().map_err(|err| match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => err,
        })?;
        args.validate()?;

        Ok(args)
    }

    pub fn validate(&self) -> Result<(), SwitcherError> {
        if let Some(width) = self.width {
            validate_width(width)?;
        }

        if self.avatar_size == Some(0) {
            bail!("'--avatar-size' must be greater than zero");
        }

        Ok(())
    }
}

pub fn validate_width(width: usize) -> Result<(), SwitcherError> {
    if !(MIN_WIDTH..=MAX_WIDTH).contains(&width) {
        bail!(
            "width must be between {} and {}, got {}",
            MIN_WIDTH,
            MAX_WIDTH,
            width
        );
    }

    Ok(())
}
