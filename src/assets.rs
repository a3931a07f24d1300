//! Block art lookup
//!
//! Maps symbolic block names to textures loaded from `assets/blocks/`.
//! A missing file is not fatal: the lookup falls back to a generated
//! placeholder checker so the editor stays usable without the asset pack.

use crate::board::Block;
use macroquad::prelude::*;
use std::collections::HashMap;

pub struct BlockArt {
    textures: HashMap<String, Texture2D>,
    background: Option<Texture2D>,
    fallback: Texture2D,
}

impl BlockArt {
    /// Load art for every drawable block plus the full-buffer background.
    pub async fn load() -> Self {
        let mut textures = HashMap::new();

        let mut drawable: Vec<Block> = Block::palette().to_vec();
        // Notes only arrive via import but still need art
        drawable.push(Block::Note {
            text: String::new(),
        });

        for block in &drawable {
            let name = block.asset_name();
            let path = format!("assets/blocks/{}.png", name);
            match load_texture(&path).await {
                Ok(tex) => {
                    tex.set_filter(FilterMode::Nearest);
                    textures.insert(name.to_string(), tex);
                }
                Err(e) => {
                    eprintln!("Missing block art {}: {}", path, e);
                }
            }
        }

        let background = match load_texture("assets/background.png").await {
            Ok(tex) => {
                tex.set_filter(FilterMode::Linear);
                Some(tex)
            }
            Err(e) => {
                println!("No background image ({}), using flat fill", e);
                None
            }
        };

        Self {
            textures,
            background,
            fallback: checker_texture(),
        }
    }

    /// Texture for a symbolic block name, or the placeholder checker
    pub fn get(&self, name: &str) -> &Texture2D {
        self.textures.get(name).unwrap_or(&self.fallback)
    }

    /// Full-buffer background image, if the asset pack provides one
    pub fn background(&self) -> Option<&Texture2D> {
        self.background.as_ref()
    }
}

/// Magenta/black checker - the classic "texture missing" tile
fn checker_texture() -> Texture2D {
    let mut img = Image::gen_image_color(16, 16, BLACK);
    for y in 0..16u32 {
        for x in 0..16u32 {
            if (x / 4 + y / 4) % 2 == 0 {
                img.set_pixel(x, y, MAGENTA);
            }
        }
    }
    let tex = Texture2D::from_image(&img);
    tex.set_filter(FilterMode::Nearest);
    tex
}
