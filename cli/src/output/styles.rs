//! Terminal stylesheet for human output.

use owo_colors::Style;

/// Styles applied by the human renderer.
///
/// The default is entirely plain; [`Styles::colored`] is used only when
/// stdout is a terminal and color has not been turned off.
#[derive(Default, Clone)]
pub struct Styles {
    /// `ready` status and confirmation checkmarks
    pub success: Style,
    /// `not ready` status
    pub warning: Style,
    /// Key comments, phase labels and `unknown` status
    pub dim: Style,
    pub bold: Style,
    /// Section titles such as the config header
    pub header: Style,
}

impl Styles {
    /// ANSI-colored stylesheet.
    #[must_use]
    pub fn colored() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            dim: Style::new().dimmed(),
            bold: Style::new().bold(),
            header: Style::new().bold().cyan(),
        }
    }
}
