//! Load targets for background image decoding.

/// Which session slot a decoded image is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    /// Background template
    Template,
    /// User photo shown in the circle
    Photo,
}

impl ImageSlot {
    /// Lowercase label used in messages and logs.
    pub fn label(self) -> &'static str {
        match self {
            ImageSlot::Template => "template",
            ImageSlot::Photo => "photo",
        }
    }
}
