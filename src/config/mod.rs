pub mod file;

pub use self::file::FileConfig;

use std::path::PathBuf;

use anyhow::anyhow;

use crate::{
    cli::{args::validate_width, Args},
    switcher::RenderContext,
    SwitcherError,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Program-wide configuration. Derived from merging the config file with the
// command line args, the args taking precedence.
#[derive(Debug)]
pub struct Config {
    pub query: Option<String>,
    pub state_path: PathBuf,
    pub sequential: bool,
    pub render: RenderContext,
    pub plain: bool,
    pub show_urls: bool,
}

impl Config {
    pub fn parse_config() -> Result<Self, SwitcherError> {
        let args = Args::parse_args()?;
        let file_config = FileConfig::deserialize()?;

        Self::merge(file_config, args)
    }

    pub fn merge(file_config: FileConfig, args: Args) -> Result<Self, SwitcherError> {
        let state_path = args
            .state
            .or_else(|| file_config.expanded_state())
            .ok_or_else(|| anyhow!("No state file given. Use '--state <FILE>'"))?;

        let defaults = RenderContext::default();
        let width = args.width.or(file_config.width).unwrap_or(defaults.width);
        validate_width(width)?;

        let avatar_size = args
            .avatar_size
            .or(file_config.avatar_size)
            .unwrap_or(defaults.avatar_size);

        Ok(Self {
            query: args.query,
            state_path,
            sequential: args.sequential || file_config.sequential.unwrap_or(false),
            render: RenderContext { width, avatar_size },
            plain: args.plain || file_config.plain.unwrap_or(false),
            show_urls: args.show_urls,
        })
    }
}
