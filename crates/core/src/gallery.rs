//! Product image gallery navigation.
//!
//! Navigation wraps around at both ends. A current position that is not in
//! the gallery behaves like "before the first image": `next` lands on the
//! first image and `prev` on the last.

use serde::{Deserialize, Serialize};

/// Navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Next,
    Prev,
}

/// Unrecognized navigation direction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction '{0}' (expected next or prev)")]
pub struct ParseDirectionError(pub String);

impl std::str::FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "next" => Ok(Self::Next),
            "prev" | "previous" => Ok(Self::Prev),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// A borrowed view over a product's ordered image list.
#[derive(Debug, Clone, Copy)]
pub struct Gallery<'a> {
    images: &'a [String],
}

impl<'a> Gallery<'a> {
    #[must_use]
    pub const fn new(images: &'a [String]) -> Self {
        Self { images }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Image URL at `index`.
    #[must_use]
    pub fn image(&self, index: usize) -> Option<&'a str> {
        self.images.get(index).map(String::as_str)
    }

    /// Position of `url` in the gallery.
    #[must_use]
    pub fn position(&self, url: &str) -> Option<usize> {
        self.images.iter().position(|image| image == url)
    }

    /// Step one image from `current`, wrapping at the ends.
    ///
    /// Returns `None` only when the gallery is empty.
    #[must_use]
    pub fn step(&self, current: usize, direction: Direction) -> Option<usize> {
        let len = self.images.len();
        if len == 0 {
            return None;
        }

        let next = match (direction, current < len) {
            (Direction::Next, true) => (current + 1) % len,
            (Direction::Next, false) => 0,
            (Direction::Prev, true) => (current + len - 1) % len,
            (Direction::Prev, false) => len - 1,
        };
        Some(next)
    }

    #[must_use]
    pub fn next(&self, current: usize) -> Option<usize> {
        self.step(current, Direction::Next)
    }

    #[must_use]
    pub fn prev(&self, current: usize) -> Option<usize> {
        self.step(current, Direction::Prev)
    }
}
