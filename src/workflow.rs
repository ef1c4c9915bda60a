use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Workflow stage of a board element.
///
/// Elements only move forward: `todo -> in_progress -> done`. `done` is
/// terminal and there is no transition back into `todo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Todo,
    #[serde(alias = "inprogress")]
    InProgress,
    Done,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Todo, Category::InProgress, Category::Done];

    /// Token persisted in `elements.category`. Writes and status filters both
    /// go through this, so counts and groupings always match stored rows.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Todo => "todo",
            Category::InProgress => "in_progress",
            Category::Done => "done",
        }
    }

    /// Next stage, or `None` when already terminal.
    pub fn next(self) -> Option<Category> {
        match self {
            Category::Todo => Some(Category::InProgress),
            Category::InProgress => Some(Category::Done),
            Category::Done => None,
        }
    }

    /// Applies one advance step to a stored token. Terminal and unrecognized
    /// tokens yield `None`, meaning the row stays as it is.
    pub fn advance_stored(stored: &str) -> Option<Category> {
        stored.parse::<Category>().ok().and_then(Category::next)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "todo" => Ok(Category::Todo),
            "in_progress" | "inprogress" => Ok(Category::InProgress),
            "done" => Ok(Category::Done),
            _ => Err(format!(
                "unknown category '{value}'; expected one of todo, in_progress, done"
            )),
        }
    }
}
