use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Tone of the generated greeting.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Magic,
    Cozy,
    Hope,
    Spiritual,
}

impl Theme {
    /// Button label shown on the back of the card.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Magic => "Магія",
            Theme::Cozy => "Затишок",
            Theme::Hope => "Надія",
            Theme::Spiritual => "Духовність",
        }
    }

    /// Single-width glyph drawn in front of the label.
    pub fn icon(self) -> char {
        match self {
            Theme::Magic => '✦',
            Theme::Cozy => '♨',
            Theme::Hope => '★',
            Theme::Spiritual => '✝',
        }
    }

    /// What the model is asked to emphasise for this theme.
    pub fn guidance(self) -> &'static str {
        match self {
            Theme::Magic => "акцент на дивах, магії, зірках, казковості, срібному сяйві",
            Theme::Cozy => {
                "акцент на родинному затишку, теплі каміна, запаху хвої, спокої, чашці чаю"
            }
            Theme::Hope => {
                "акцент на надії, нових починаннях, світанку, силі духу, перемозі світла"
            }
            Theme::Spiritual => {
                "акцент на сакральному змісті, янгольських голосах, вічності, благодаті"
            }
        }
    }

    /// The theme after this one, wrapping around.
    pub fn next(self) -> Self {
        let all: Vec<Theme> = Theme::iter().collect();
        let index = all.iter().position(|t| *t == self).unwrap_or(0);
        all[(index + 1) % all.len()]
    }

    pub fn all() -> impl Iterator<Item = Theme> {
        Theme::iter()
    }
}
