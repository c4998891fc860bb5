//! Popup geometry
//!
//! Sizes the window from the number of actions. The buttons themselves are
//! stacked top to bottom by the view using the same padding and spacing.

const POPUP_WIDTH: f32 = 180.0;
const BUTTON_HEIGHT: f32 = 28.0;
const PADDING: f32 = 12.0;
const SPACING: f32 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub width: f32,
    pub button_height: f32,
    /// Inset between the window edge and the buttons
    pub padding: f32,
    /// Vertical gap between neighbouring buttons
    pub spacing: f32,
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry {
            width: POPUP_WIDTH,
            button_height: BUTTON_HEIGHT,
            padding: PADDING,
            spacing: SPACING,
        }
    }
}

impl Geometry {
    /// Window height for `rows` buttons
    ///
    /// Callers pass the length of a validated `ActionList`, so `rows` is at
    /// least one.
    pub fn height(&self, rows: usize) -> f32 {
        let gaps = rows.saturating_sub(1);
        2.0 * self.padding + self.button_height * rows as f32 + self.spacing * gaps as f32
    }

    pub fn window_size(&self, rows: usize) -> iced::Size {
        iced::Size::new(self.width, self.height(rows))
    }
}
