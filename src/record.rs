use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Serenity,
    Melancholy,
    Anxiety,
    Hope,
    Whimsy,
}

impl Category {
    /// Declaration order, also the tie-break order for dominant categories.
    pub const ALL: [Category; 5] = [
        Self::Serenity,
        Self::Melancholy,
        Self::Anxiety,
        Self::Hope,
        Self::Whimsy,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Serenity => "serenity",
            Self::Melancholy => "melancholy",
            Self::Anxiety => "anxiety",
            Self::Hope => "hope",
            Self::Whimsy => "whimsy",
        }
    }

    pub(crate) fn ordinal(self) -> usize {
        match self {
            Self::Serenity => 0,
            Self::Melancholy => 1,
            Self::Anxiety => 2,
            Self::Hope => 3,
            Self::Whimsy => 4,
        }
    }
}

/// One journal entry as seen by the graph builder.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TaggedRecord {
    #[serde(default, alias = "worldName")]
    pub theme: Option<String>,
    #[serde(default, alias = "emotion")]
    pub category: Category,
    #[serde(default, alias = "symbols")]
    pub tags: Vec<String>,
}

impl TaggedRecord {
    pub fn new<I, S>(theme: Option<&str>, category: Category, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            theme: theme.map(str::to_owned),
            category,
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn theme_label(&self) -> Option<&str> {
        self.theme.as_deref().filter(|theme| !theme.is_empty())
    }
}
