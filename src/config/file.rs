use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use {
    anyhow::{bail, Context},
    serde::Deserialize,
};

use crate::SwitcherError;

pub const FILE_NAME: &str = "quickswitch.yml";

// A struct that represents our `quickswitch.yml` config file.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub state: Option<PathBuf>,
    pub sequential: Option<bool>,
    pub width: Option<usize>,
    pub avatar_size: Option<u32>,
    pub plain: Option<bool>,
}

impl FileConfig {
    pub fn find() -> Result<PathBuf, SwitcherError> {
        let mut paths = vec![];

        if let Ok(xdg_config_home) = env::var("XDG_CONFIG_HOME") {
            let xdg_config_home = PathBuf::from(xdg_config_home);
            paths.push(xdg_config_home.join("quickswitch").join(FILE_NAME));
            paths.push(xdg_config_home.join(FILE_NAME));
        }

        if let Ok(home_dir) = env::var("HOME") {
            let home_dir = PathBuf::from(home_dir);
            paths.push(home_dir.join(".config").join("quickswitch").join(FILE_NAME));
            paths.push(home_dir.join(format!(".{}", FILE_NAME)));
        }

        for path in paths {
            if path.exists() {
                return Ok(path);
            }
        }

        bail!("Config file not found!")
    }

    // The config from the first config file found. A missing file gives the
    // default config, a broken one is an error.
    pub fn deserialize() -> Result<Self, SwitcherError> {
        match FileConfig::find() {
            Ok(path) => Self::from_path(&path)
                .with_context(|| format!("Invalid config file {:?}", path)),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, SwitcherError> {
        let mut file = fs::File::open(path)?;
        let mut contents = String::new();
        io::Read::read_to_string(&mut file, &mut contents)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, SwitcherError> {
        // An empty file is a valid, empty config.
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let file_config = serde_yaml::from_str(contents)?;
        Ok(file_config)
    }

    pub fn expanded_state(&self) -> Option<PathBuf> {
        self.state.as_ref().map(|p| {
            let path_str = p.to_string_lossy();
            if let Some(rest) = path_str.strip_prefix("~/") {
                if let Ok(home) = env::var("HOME") {
                    return Path::new(&home).join(rest);
                }
            }
            p.clone()
        })
    }
}
