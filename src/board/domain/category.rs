//! Category records used to group tasks.

use super::{BoardDomainError, CategoryId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Color assigned to categories created without an explicit color.
pub const DEFAULT_CATEGORY_COLOR: &str = "#5B4EE9";

/// Colors offered when creating or editing a category.
pub const CATEGORY_PALETTE: [&str; 8] = [
    "#5B4EE9", "#8B7FF0", "#FF6B6B", "#4ECDC4", "#FFD93D", "#4D96FF", "#FF8C42", "#6BCF7F",
];

/// Non-empty, trimmed category name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryName(String);

impl CategoryName {
    /// Creates a validated category name.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyCategoryName`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyCategoryName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CategoryName {
    type Error = BoardDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategoryName> for String {
    fn from(value: CategoryName) -> Self {
        value.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display color of a category.
///
/// Only presence is checked; the value is passed through to the
/// presentation layer as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryColor(String);

impl CategoryColor {
    /// Creates a category color.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyCategoryColor`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyCategoryColor);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the color as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CategoryColor {
    fn default() -> Self {
        Self(DEFAULT_CATEGORY_COLOR.to_owned())
    }
}

impl TryFrom<String> for CategoryColor {
    type Error = BoardDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategoryColor> for String {
    fn from(value: CategoryColor) -> Self {
        value.0
    }
}

impl fmt::Display for CategoryColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated input for creating a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    name: CategoryName,
    color: CategoryColor,
}

impl NewCategory {
    /// Creates category input.
    #[must_use]
    pub const fn new(name: CategoryName, color: CategoryColor) -> Self {
        Self { name, color }
    }
}

/// Partial update applied to an existing category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPatch {
    name: Option<CategoryName>,
    color: Option<CategoryColor>,
}

impl CategoryPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the name.
    #[must_use]
    pub fn with_name(mut self, name: CategoryName) -> Self {
        self.name = Some(name);
        self
    }

    /// Replaces the color.
    #[must_use]
    pub fn with_color(mut self, color: CategoryColor) -> Self {
        self.color = Some(color);
        self
    }
}

/// Category record.
///
/// `task_count` is a display cache written by the persistence backend. The
/// live count shown to users is always recomputed from the task collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(alias = "Id")]
    id: CategoryId,
    name: CategoryName,
    #[serde(default)]
    color: CategoryColor,
    #[serde(default)]
    task_count: usize,
}

impl Category {
    /// Creates a category with the identifier assigned by the store.
    #[must_use]
    pub fn create(id: CategoryId, input: &NewCategory) -> Self {
        Self {
            id,
            name: input.name.clone(),
            color: input.color.clone(),
            task_count: 0,
        }
    }

    /// Reconstructs a category from persisted storage.
    #[must_use]
    pub const fn from_persisted(
        id: CategoryId,
        name: CategoryName,
        color: CategoryColor,
        task_count: usize,
    ) -> Self {
        Self {
            id,
            name,
            color,
            task_count,
        }
    }

    /// Returns the category identifier.
    #[must_use]
    pub const fn id(&self) -> CategoryId {
        self.id
    }

    /// Returns the name.
    #[must_use]
    pub const fn name(&self) -> &CategoryName {
        &self.name
    }

    /// Returns the display color.
    #[must_use]
    pub const fn color(&self) -> &CategoryColor {
        &self.color
    }

    /// Returns the cached task count last written by the backend.
    #[must_use]
    pub const fn cached_task_count(&self) -> usize {
        self.task_count
    }

    /// Merges a patch onto the category.
    pub fn apply_patch(&mut self, patch: &CategoryPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(color) = &patch.color {
            self.color = color.clone();
        }
    }

    /// Overwrites the cached task count.
    pub const fn set_cached_task_count(&mut self, count: usize) {
        self.task_count = count;
    }
}
