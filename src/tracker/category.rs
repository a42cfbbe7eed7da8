//! Render-time category policy: which labels may be drawn and in what color.

use std::collections::HashMap;

use crate::tracker::palette::Color;

/// Draw color for one recognized label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryStyle {
    pub label: String,
    pub color: Color,
}

impl CategoryStyle {
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }
}

/// Labels that can be drawn. Anything missing from the table is never drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    styles: Vec<CategoryStyle>,
}

impl CategoryTable {
    pub fn new(styles: Vec<CategoryStyle>) -> Self {
        Self { styles }
    }

    /// Add a label, or recolor it if already present.
    pub fn insert(&mut self, style: CategoryStyle) {
        match self.styles.iter_mut().find(|s| s.label == style.label) {
            Some(existing) => existing.color = style.color,
            None => self.styles.push(style),
        }
    }

    pub fn color_of(&self, label: &str) -> Option<Color> {
        self.styles
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.color)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.styles.iter().map(|s| s.label.as_str())
    }

    pub fn styles(&self) -> &[CategoryStyle] {
        &self.styles
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::new(vec![
            CategoryStyle::new("person", Color::from_argb(0xFF3F51B5)),
            CategoryStyle::new("bicycle", Color::from_argb(0xFF8BC34A)),
            CategoryStyle::new("car", Color::from_argb(0xFFE91E63)),
            CategoryStyle::new("truck", Color::from_argb(0xFFFF9800)),
            CategoryStyle::new("bus", Color::from_argb(0xFF9C27B0)),
            CategoryStyle::new("train", Color::from_argb(0xFF00BCD4)),
        ])
    }
}

/// Per-label visibility toggles, read at render time. Labels without an
/// entry are hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryVisibility {
    flags: HashMap<String, bool>,
}

impl CategoryVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every label of `table` switched on.
    pub fn all_visible(table: &CategoryTable) -> Self {
        table.labels().map(|label| (label, true)).collect()
    }

    pub fn set(&mut self, label: impl Into<String>, visible: bool) {
        self.flags.insert(label.into(), visible);
    }

    pub fn is_visible(&self, label: &str) -> bool {
        self.flags.get(label).copied().unwrap_or(false)
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for CategoryVisibility {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self {
            flags: iter
                .into_iter()
                .map(|(label, visible)| (label.into(), visible))
                .collect(),
        }
    }
}
