use std::{borrow::Cow, fmt};

use {unicode_segmentation::UnicodeSegmentation, unicode_width::UnicodeWidthStr};

const ELLIPSIS: &str = "…";
// The width of the icon column, including the trailing gap.
const ICON_WIDTH: usize = 3;

// Services and measurements available to items when they render a row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderContext {
    // The available width of a row, in cells.
    pub width: usize,
    // The size requested from the CDN for avatar images, in pixels.
    pub avatar_size: u32,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            width: 60,
            avatar_size: 32,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RowIcon {
    // An image, showing the initials until (or unless) the image loads.
    Avatar {
        initials: String,
        url: Option<String>,
    },
    // The channel hash, marked when the channel is NSFW.
    Hash { nsfw: bool },
}

impl RowIcon {
    pub fn glyph(&self) -> &str {
        match self {
            RowIcon::Avatar { initials, .. } => initials,
            RowIcon::Hash { nsfw: true } => "#!",
            RowIcon::Hash { nsfw: false } => "#",
        }
    }
}

// A toolkit independent description of a search result row.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Row {
    pub icon: RowIcon,
    pub name: String,
    pub guild_name: Option<String>,
    pub tooltip: Option<String>,
}

impl Row {
    // Lays the row out into `width` cells, ellipsizing the names that overflow.
    pub fn layout(&self, width: usize) -> RowLayout {
        let icon = self.icon.glyph();
        let available = width.saturating_sub(icon_cells(icon));

        let guild_name = self.guild_name.as_ref().map(|guild| {
            let max = (available / 3).min(guild.width());
            ellipsize(guild, max).into_owned()
        });

        let taken = guild_name.as_ref().map_or(0, |guild| guild.width() + 1);
        let name = ellipsize(&self.name, available.saturating_sub(taken)).into_owned();

        RowLayout {
            icon: icon.to_string(),
            name,
            guild_name,
            width,
        }
    }
}

// The columns of a row after layout.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RowLayout {
    pub icon: String,
    pub name: String,
    pub guild_name: Option<String>,
    width: usize,
}

impl RowLayout {
    // The padding between the icon and the name.
    pub fn icon_padding(&self) -> usize {
        icon_cells(&self.icon) - self.icon.width()
    }

    // The padding between the name and the guild name.
    pub fn gap(&self) -> usize {
        let used = icon_cells(&self.icon) + self.name.width();
        let guild = self.guild_name.as_ref().map_or(0, |guild| guild.width());
        self.width.saturating_sub(used + guild)
    }
}

impl fmt::Display for RowLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:pad$}{}",
            self.icon,
            "",
            self.name,
            pad = self.icon_padding()
        )?;

        if let Some(guild) = &self.guild_name {
            write!(f, "{:gap$}{}", "", guild, gap = self.gap())?;
        }

        Ok(())
    }
}

// Shortens `text` to at most `width` cells, ending it with an ellipsis.
pub fn ellipsize(text: &str, width: usize) -> Cow<'_, str> {
    if text.width() <= width {
        return Cow::Borrowed(text);
    }

    let budget = width.saturating_sub(ELLIPSIS.width());
    let mut used = 0;
    let mut short = String::new();

    for grapheme in text.graphemes(true) {
        let w = grapheme.width();
        if used + w > budget {
            break;
        }
        used += w;
        short.push_str(grapheme);
    }

    if width > 0 {
        short.push_str(ELLIPSIS);
    }

    Cow::Owned(short)
}

// Up to two uppercased initials, taken from the first and last words of
// `name`.
pub fn initials(name: &str) -> String {
    let mut words = name
        .split_whitespace()
        .filter_map(|word| word.graphemes(true).next());
    let first = words.next();
    let last = words.last();

    first
        .into_iter()
        .chain(last)
        .flat_map(|grapheme| grapheme.chars())
        .flat_map(char::to_uppercase)
        .collect()
}

// The cells taken by the icon column. Wide icons keep one cell of padding.
fn icon_cells(icon: &str) -> usize {
    ICON_WIDTH.max(icon.width() + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ellipsize() {
        assert_eq!(ellipsize("general", 10), "general");
        assert_eq!(ellipsize("general", 7), "general");
        assert_eq!(ellipsize("general", 5), "gene…");
        assert_eq!(ellipsize("general", 1), "…");
        assert_eq!(ellipsize("general", 0), "");
    }

    #[test]
    fn test_ellipsize_wide_graphemes() {
        // Each ideograph is two cells wide.
        assert_eq!(ellipsize("日本語チャンネル", 6), "日本…");
        assert!(ellipsize("日本語チャンネル", 6).width() <= 6);
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Guild A"), "GA");
        assert_eq!(initials("bob"), "B");
        assert_eq!(initials("ann and bob"), "AB");
        assert_eq!(initials("ann, bob and cat"), "AC");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_layout_fits_width() {
        let row = Row {
            icon: RowIcon::Hash { nsfw: false },
            name: "an-extremely-long-channel-name-that-does-not-fit".into(),
            guild_name: Some("A Guild With A Long Name".into()),
            tooltip: None,
        };

        let layout = row.layout(30);
        let line = layout.to_string();

        assert_eq!(line.width(), 30);
        assert!(layout.name.ends_with(ELLIPSIS));
        assert!(layout.guild_name.expect("guild is kept").ends_with(ELLIPSIS));
        assert!(line.starts_with("#  an-"));
    }

    #[test]
    fn test_layout_short_row() {
        let row = Row {
            icon: RowIcon::Hash { nsfw: true },
            name: "general".into(),
            guild_name: Some("Guild A".into()),
            tooltip: None,
        };

        let line = row.layout(30).to_string();
        assert!(line.starts_with("#! general"));
        assert!(line.ends_with("Guild A"));
        assert_eq!(line.width(), 30);

        let dm = Row {
            icon: RowIcon::Avatar {
                initials: "B".into(),
                url: None,
            },
            name: "bob".into(),
            guild_name: None,
            tooltip: None,
        };
        assert_eq!(dm.layout(30).to_string(), "B  bob");
    }

    #[test]
    fn test_layout_wide_initials() {
        let row = Row {
            icon: RowIcon::Avatar {
                initials: initials("日本 チャンネル"),
                url: None,
            },
            name: "日本 チャンネル".into(),
            guild_name: Some("Guild A".into()),
            tooltip: None,
        };

        let layout = row.layout(30);
        let line = layout.to_string();

        assert_eq!(layout.icon, "日チ");
        assert_eq!(layout.icon_padding(), 1);
        assert!(line.starts_with("日チ 日本"));
        assert_eq!(line.width(), 30);
    }
}
