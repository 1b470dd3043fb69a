// ============================================================================
// PALETTE - neon green on near-black, cyan for interactive highlights
// ============================================================================

use bevy::prelude::*;

/// Primary accent, rgb(0, 255, 157)
pub const PRIMARY: Color = Color::srgb(0.0, 1.0, 157.0 / 255.0);

/// Secondary accent for interactive targets, rgb(0, 255, 255)
pub const SECONDARY: Color = Color::srgb(0.0, 1.0, 1.0);

/// Page background
pub const BACKGROUND: Color = Color::srgb(0.02, 0.03, 0.04);

/// Muted foreground for labels
pub const MUTED: Color = Color::srgb(0.55, 0.6, 0.62);

/// Particles sit just under the cursor ring, above everything else
pub const TRAIL_LAYER: i32 = i32::MAX - 1;

/// Cursor ring layer
pub const CURSOR_LAYER: i32 = i32::MAX;

/// A palette colour with its alpha replaced
pub fn faded(color: Color, alpha: f32) -> Color {
    color.with_alpha(alpha.clamp(0.0, 1.0))
}
