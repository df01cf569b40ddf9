//! Minimal PNG renderer for point sets: every point becomes a small filled disc.
use std::path::Path;

use anyhow::Context;
use dart_scatter::geometry::{Domain, Point};
use image::{Rgb, RgbImage};

/// How a point set is drawn.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output size in pixels for one panel.
    pub image_size: (u32, u32),
    /// Domain the points were sampled in; mapped onto the full panel.
    pub domain: Domain,
    pub background: [u8; 3],
    pub color: [u8; 3],
    /// Disc radius in pixels.
    pub radius: i32,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), domain: Domain) -> Self {
        Self {
            image_size,
            domain,
            background: [255, 255, 255],
            color: [255, 0, 0],
            radius: 3,
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_color(mut self, color: [u8; 3]) -> Self {
        self.color = color;
        self
    }

    pub fn with_radius(mut self, radius: i32) -> Self {
        self.radius = radius;
        self
    }
}

/// One point set plus the style it is drawn with.
pub struct Panel<'a> {
    pub points: &'a [Point],
    pub config: RenderConfig,
}

/// Render a single point set to `out_path`.
pub fn render_points_to_png(
    points: &[Point],
    config: &RenderConfig,
    out_path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let mut img = RgbImage::from_pixel(
        config.image_size.0,
        config.image_size.1,
        Rgb(config.background),
    );
    draw_points(&mut img, 0, points, config);
    save(&img, out_path.as_ref())
}

/// Render panels stacked top to bottom into one image.
pub fn render_panels_to_png(
    panels: &[Panel<'_>],
    out_path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    anyhow::ensure!(!panels.is_empty(), "nothing to render");

    let width = panels
        .iter()
        .map(|p| p.config.image_size.0)
        .max()
        .unwrap_or(0);
    let height = panels.iter().map(|p| p.config.image_size.1).sum();
    let mut img = RgbImage::new(width, height);

    let mut top = 0;
    for panel in panels {
        let (w, h) = panel.config.image_size;
        for y in 0..h {
            for x in 0..w {
                img.put_pixel(x, top + y, Rgb(panel.config.background));
            }
        }
        draw_points(&mut img, top, panel.points, &panel.config);
        top += h;
    }

    save(&img, out_path.as_ref())
}

fn draw_points(img: &mut RgbImage, top: u32, points: &[Point], config: &RenderConfig) {
    let (w, h) = config.image_size;
    let sx = w as f32 / config.domain.width;
    let sy = h as f32 / config.domain.height;
    let r = config.radius;

    for p in points {
        let cx = (p.x * sx).round() as i32;
        let cy = (p.y * sy).round() as i32;
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy > r * r {
                    continue;
                }
                let (x, y) = (cx + dx, cy + dy);
                if x < 0 || y < 0 || x >= w as i32 || y >= h as i32 {
                    continue;
                }
                img.put_pixel(x as u32, top + y as u32, Rgb(config.color));
            }
        }
    }
}

fn save(img: &RgbImage, out_path: &Path) -> anyhow::Result<()> {
    img.save(out_path)
        .with_context(|| format!("failed to write {}", out_path.display()))
}
