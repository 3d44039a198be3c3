//! Theme and Colors
//!
//! Palette for the note form. Accents keep the magenta used across the
//! project's terminal surfaces; everything else is muted so the result card
//! stands out.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Form Palette
// ============================================================================

/// Signature magenta (for titles/accents)
pub const ACCENT_MAGENTA: Color = Color::Magenta;

/// Note text green
pub const INPUT_GREEN: Color = Color::Rgb(130, 220, 130);

/// System/dim text
pub const DIM_GRAY: Color = Color::Rgb(100, 100, 100);

/// Error red
pub const ERROR_RED: Color = Color::Rgb(255, 80, 80);

/// Success green
pub const SUCCESS_GREEN: Color = Color::Rgb(120, 230, 120);

/// Submit control background while enabled
pub const BUTTON_BLUE: Color = Color::Rgb(100, 180, 255);

/// Label chip background - soft pink
pub const CHIP_PINK: Color = Color::Rgb(255, 182, 193);

/// Label chip text
pub const CHIP_TEXT: Color = Color::Rgb(40, 40, 40);

// ============================================================================
// Styles
// ============================================================================

/// Page title
pub fn title() -> Style {
    Style::default()
        .fg(ACCENT_MAGENTA)
        .add_modifier(Modifier::BOLD)
}

/// Submit control, depending on whether it accepts input
pub fn button(enabled: bool) -> Style {
    if enabled {
        Style::default()
            .fg(Color::Black)
            .bg(BUTTON_BLUE)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DIM_GRAY)
    }
}

/// Label chip
pub fn chip() -> Style {
    Style::default().fg(CHIP_TEXT).bg(CHIP_PINK)
}

/// Inline error message
pub fn error() -> Style {
    Style::default().fg(ERROR_RED)
}

/// Secondary text (timestamps, placeholder, hints)
pub fn dim() -> Style {
    Style::default().fg(DIM_GRAY)
}
