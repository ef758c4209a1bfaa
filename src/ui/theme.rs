// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the toast widgets.
//!
//! A reduced token set: just what the overlay needs, organized the same way
//! as a full design system so values stay consistent across widgets.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use iced::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Brand colors
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9); // Primary blue

    // Semantic accents
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Standard body - toast message text
    pub const BODY: f32 = 14.0;

    /// Small body - dismiss control
    pub const BODY_SM: f32 = 13.0;

    /// Title line above the message
    pub const TITLE_SM: f32 = 18.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Medium border - toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

/// Maps a sanitized category onto its accent color.
///
/// Unknown and absent categories fall back to the primary brand color, so
/// arbitrary caller labels still render with a consistent accent.
#[must_use]
pub fn accent_for_category(category: Option<&str>) -> Color {
    match category {
        Some("success") => palette::SUCCESS_500,
        Some("info") => palette::INFO_500,
        Some("warning") => palette::WARNING_500,
        Some("error") | Some("danger") => palette::ERROR_500,
        _ => palette::PRIMARY_500,
    }
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(sizing::TOAST_WIDTH > 0.0);
    assert!(border::WIDTH_MD > 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semantic_accents_are_distinct() {
        let success = accent_for_category(Some("success"));
        let info = accent_for_category(Some("info"));
        let warning = accent_for_category(Some("warning"));
        let error = accent_for_category(Some("error"));

        assert_ne!(success, info);
        assert_ne!(success, warning);
        assert_ne!(success, error);
        assert_ne!(info, warning);
        assert_ne!(info, error);
        assert_ne!(warning, error);
    }

    #[test]
    fn danger_aliases_error() {
        assert_eq!(
            accent_for_category(Some("danger")),
            accent_for_category(Some("error"))
        );
    }

    #[test]
    fn unknown_category_falls_back_to_primary() {
        assert_eq!(accent_for_category(Some("upload")), palette::PRIMARY_500);
        assert_eq!(accent_for_category(None), palette::PRIMARY_500);
    }
}
