use bevy::prelude::*;

/// Monospace face with Latin and Cyrillic coverage (stats and skills are in Russian)
pub const REGULAR_FONT: &str = "fonts/dejavu/DejaVuSansMono.ttf";
pub const BOLD_FONT: &str = "fonts/dejavu/DejaVuSansMono-Bold.ttf";

/// Font handles every text node on the page is set in
#[derive(Resource, Clone)]
pub struct PageFonts {
    pub regular: Handle<Font>,
    pub bold: Handle<Font>,
}

impl PageFonts {
    pub fn load(asset_server: &AssetServer) -> Self {
        Self {
            regular: asset_server.load(REGULAR_FONT),
            bold: asset_server.load(BOLD_FONT),
        }
    }

    pub fn regular(&self, font_size: f32) -> TextFont {
        TextFont {
            font: self.regular.clone(),
            font_size,
            ..default()
        }
    }

    pub fn bold(&self, font_size: f32) -> TextFont {
        TextFont {
            font: self.bold.clone(),
            font_size,
            ..default()
        }
    }
}

/// System: Start loading the page fonts
pub fn load_page_fonts(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(PageFonts::load(&asset_server));
    info!("✓ Page fonts queued ({}, {})", REGULAR_FONT, BOLD_FONT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_font_files_ship_with_assets() {
        let assets = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");

        for font in [REGULAR_FONT, BOLD_FONT] {
            let bytes = std::fs::read(assets.join(font)).unwrap();
            // TrueType sfnt version tag
            assert_eq!(&bytes[..4], &[0x00, 0x01, 0x00, 0x00], "{font}");
        }
    }

    #[test]
    fn test_text_fonts_use_page_faces() {
        let fonts = PageFonts {
            regular: Handle::default(),
            bold: Handle::default(),
        };

        let body = fonts.regular(14.0);
        assert_eq!(body.font, fonts.regular);
        assert_eq!(body.font_size, 14.0);
        assert_eq!(fonts.bold(48.0).font_size, 48.0);
    }
}
