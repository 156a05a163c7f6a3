//! Active-section detection for the arrow navigation.

/// Probe distance below the scroll offset used to pick the active section.
pub const SECTION_ANCHOR_OFFSET_PX: f64 = 100.0;

/// Id of the landing section.
pub const HOME_SECTION_ID: &str = "home";

/// Vertical extent of one page section.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionBox {
    /// Element id, matched against the nav arrows' `data-section`.
    pub id: String,
    /// Offset of the section's top edge from the document top.
    pub top: f64,
    /// Rendered height.
    pub height: f64,
}

impl SectionBox {
    /// Whether `y` falls in `[top, top + height)`.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// The section under `scroll_y + 100`. When sections overlap the last one in document order
/// wins.
pub fn active_section(sections: &[SectionBox], scroll_y: f64) -> Option<&str> {
    let anchor = scroll_y + SECTION_ANCHOR_OFFSET_PX;
    sections
        .iter()
        .rev()
        .find(|s| s.contains(anchor))
        .map(|s| s.id.as_str())
}

/// Whether the landing section is the active one.
pub fn is_home_section(sections: &[SectionBox], scroll_y: f64) -> bool {
    active_section(sections, scroll_y) == Some(HOME_SECTION_ID)
}

#[cfg(test)]
#[path = "../../tests/unit/page/sections.rs"]
mod tests;
