//! Class and id resolution for the image lightbox and the project slide-over panel.
//!
//! The DOM writes stay with the caller. This module decides which classes the lightbox image
//! gets and which panel section a project card opens.

use super::author_graph::GraphKind;

/// Class added to images that show an author graph.
pub const AUTHOR_GRAPH_IMG_CLASS: &str = "author-graph-img";
/// Class added to every other lightbox image.
pub const PANEL_IMG_CLASS: &str = "panel-img";

/// Graph kind of the `.viz-item` container an image sits in, read from its classes.
///
/// `full-graph` wins when both classes are present.
pub fn graph_kind_from_classes<'a>(
    classes: impl IntoIterator<Item = &'a str>,
) -> Option<GraphKind> {
    let mut kind = None;
    for class in classes {
        if class == GraphKind::Full.css_class() {
            return Some(GraphKind::Full);
        }
        if class == GraphKind::Top5.css_class() {
            kind = Some(GraphKind::Top5);
        }
    }
    kind
}

/// Classes for the lightbox image showing `src`.
///
/// Author graph images get [`AUTHOR_GRAPH_IMG_CLASS`] plus the kind class. Without a known
/// kind the kind is guessed from `src` (`full` before `top5`); no match adds no kind class.
pub fn image_classes(src: &str, kind: Option<GraphKind>) -> Vec<&'static str> {
    if !src.contains("author_graph") {
        return vec![PANEL_IMG_CLASS];
    }
    let kind = kind.or_else(|| {
        if src.contains("full") {
            Some(GraphKind::Full)
        } else if src.contains("top5") {
            Some(GraphKind::Top5)
        } else {
            None
        }
    });
    let mut classes = vec![AUTHOR_GRAPH_IMG_CLASS];
    classes.extend(kind.map(GraphKind::css_class));
    classes
}

/// Element id of the panel section a card with `data-panel="<panel>"` opens.
pub fn panel_element_id(panel: &str) -> String {
    format!("panel-{panel}")
}

/// What the lightbox currently shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LightboxContent {
    /// An image with its resolved classes.
    Image {
        /// Image URL.
        src: String,
        /// Classes from [`image_classes`].
        classes: Vec<&'static str>,
    },
    /// Markup copied from a topic card.
    Topic(String),
}

/// Open/closed state shared by the lightbox and the slide-over panel.
///
/// While something is open the page body must not scroll.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overlay<T> {
    open: Option<T>,
}

impl<T> Overlay<T> {
    /// Closed overlay.
    pub fn new() -> Self {
        Self { open: None }
    }

    /// Show `content`, replacing whatever was shown.
    pub fn open(&mut self, content: T) {
        self.open = Some(content);
    }

    /// Hide the overlay. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        self.open.take().is_some()
    }

    /// Keyboard handler: `Escape` closes. Returns whether the key closed the overlay.
    pub fn on_key(&mut self, key: &str) -> bool {
        key == "Escape" && self.close()
    }

    /// Currently shown content.
    pub fn current(&self) -> Option<&T> {
        self.open.as_ref()
    }

    /// Whether background scrolling must be locked.
    pub fn locks_scroll(&self) -> bool {
        self.open.is_some()
    }
}

/// The image/topic lightbox.
pub type Lightbox = Overlay<LightboxContent>;

impl Lightbox {
    /// Open on the image `src`, using the enclosing container's classes to pick the graph kind.
    pub fn open_image<'a>(
        &mut self,
        src: &str,
        container_classes: impl IntoIterator<Item = &'a str>,
    ) {
        let classes = image_classes(src, graph_kind_from_classes(container_classes));
        tracing::trace!(src, ?classes, "lightbox image");
        self.open(LightboxContent::Image {
            src: src.to_owned(),
            classes,
        });
    }
}

/// The project slide-over panel, holding the open section's element id.
pub type ProjectPanel = Overlay<String>;

impl ProjectPanel {
    /// Open the section for a card's `data-panel` value.
    pub fn open_card(&mut self, panel: &str) {
        self.open(panel_element_id(panel));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/lightbox.rs"]
mod tests;
