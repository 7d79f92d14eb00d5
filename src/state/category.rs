use tracing::debug;
use uuid::Uuid;

use super::Color;
use crate::error::CategoryError;

/// An action category: markers painted with `color` count towards `action_name`.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    /// Unique identifier (stable across renames)
    pub id: Uuid,
    /// Quantized color; two categories never share one
    pub color: Color,
    /// Display name, e.g. "Shot"
    pub action_name: String,
}

impl Category {
    fn new(color: Color, action_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            color,
            action_name: action_name.into(),
        }
    }

    /// Canonical `#RRGGBBAA` key of this category's color.
    pub fn color_key(&self) -> String {
        self.color.encode()
    }
}

/// Ordered set of action categories, in registration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
}

impl CategoryRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The palette a new match starts with.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for (color, name) in [
            (Color::RED, "Shot"),
            (Color::BLUE, "Pass"),
            (Color::GREEN, "Tackle"),
        ] {
            registry.categories.push(Category::new(color, name));
        }
        registry
    }

    /// Register a new category. Fails if its color is already taken or is
    /// the "no selection" sentinel.
    ///
    /// Colors are canonicalized to their quantized form before comparison and
    /// storage, so a raw picker color and its stored hex form always match.
    pub fn register(
        &mut self,
        color: Color,
        action_name: impl Into<String>,
    ) -> Result<&Category, CategoryError> {
        let key = color.encode();
        if color.is_none() {
            debug!(color = %key, "Rejected reserved category color");
            return Err(CategoryError::ReservedColor { color: key });
        }
        if self.categories.iter().any(|c| c.color_key() == key) {
            debug!(color = %key, "Rejected duplicate category color");
            return Err(CategoryError::DuplicateColor { color: key });
        }
        let [r, g, b, a] = color.to_rgba8();
        self.categories
            .push(Category::new(Color::from_rgba8(r, g, b, a), action_name));
        Ok(&self.categories[self.categories.len() - 1])
    }

    /// Remove a category by ID.
    pub fn remove(&mut self, id: Uuid) -> Option<Category> {
        let index = self.categories.iter().position(|c| c.id == id)?;
        Some(self.categories.remove(index))
    }

    /// Change a category's action name, keeping its identity.
    pub fn rename(&mut self, id: Uuid, action_name: impl Into<String>) -> bool {
        match self.categories.iter_mut().find(|c| c.id == id) {
            Some(category) => {
                category.action_name = action_name.into();
                true
            }
            None => false,
        }
    }

    /// First category whose color encodes to the same string as `color`.
    pub fn resolve(&self, color: &Color) -> Option<&Category> {
        let key = color.encode();
        self.categories.iter().find(|c| c.color_key() == key)
    }

    /// Find a category by ID
    pub fn get(&self, id: Uuid) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
