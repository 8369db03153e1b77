//! Falling-snow animation.
//!
//! A fixed-size field of flakes in continuous cell coordinates: each flake
//! falls at its own speed with a sinusoidal horizontal drift and wraps at
//! every edge. The field runs for the whole session; the app simply skips
//! tick/render while snow is toggled off.

use rand::Rng;
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::ui::theme;

#[derive(Debug, Clone)]
struct Flake {
    x: f32,
    y: f32,
    /// Visual size, picks the glyph
    size: f32,
    /// Cells per tick
    speed: f32,
    /// Drift phase
    drift: f32,
}

#[derive(Debug, Clone)]
pub struct Snowfield {
    flakes: Vec<Flake>,
    width: f32,
    height: f32,
}

impl Snowfield {
    pub fn new(count: usize) -> Self {
        let mut rng = rand::rng();
        let (width, height) = (80.0, 24.0);
        let flakes = (0..count)
            .map(|_| Flake {
                x: rng.random_range(0.0..width),
                y: rng.random_range(0.0..height),
                size: rng.random_range(1.0..4.0),
                speed: rng.random_range(0.05..0.22),
                drift: rng.random_range(0.0..std::f32::consts::TAU),
            })
            .collect();
        Self {
            flakes,
            width,
            height,
        }
    }

    /// Track the terminal size; flakes outside the new bounds wrap back in
    /// on their next tick.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width.max(1) as f32;
        self.height = height.max(1) as f32;
    }

    /// Advance every flake by one frame.
    pub fn tick(&mut self) {
        let mut rng = rand::rng();
        for flake in &mut self.flakes {
            flake.y += flake.speed;
            flake.x += flake.drift.sin() * 0.15;
            flake.drift += 0.02;

            if flake.y > self.height + 1.0 {
                flake.y = -1.0;
                flake.x = rng.random_range(0.0..self.width);
            }
            if flake.x > self.width + 1.0 {
                flake.x = -1.0;
            }
            if flake.x < -1.0 {
                flake.x = self.width + 1.0;
            }
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().fg(theme::snow());
        for flake in &self.flakes {
            let (x, y) = (flake.x.round(), flake.y.round());
            if x < 0.0 || y < 0.0 {
                continue;
            }
            let (x, y) = (area.x + x as u16, area.y + y as u16);
            if x >= area.x + area.width || y >= area.y + area.height {
                continue;
            }
            let glyph = if flake.size < 2.0 {
                "·"
            } else if flake.size < 3.0 {
                "•"
            } else {
                "❄"
            };
            buf[(x, y)].set_symbol(glyph).set_style(style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_holds_requested_count() {
        assert_eq!(Snowfield::new(130).flakes.len(), 130);
        assert!(Snowfield::new(0).flakes.is_empty());
    }

    #[test]
    fn flakes_stay_near_bounds_over_time() {
        let mut field = Snowfield::new(50);
        field.resize(40, 12);
        for _ in 0..5_000 {
            field.tick();
        }
        for flake in &field.flakes {
            assert!(flake.y >= -1.5 && flake.y <= 13.5, "y = {}", flake.y);
            assert!(flake.x >= -1.5 && flake.x <= 41.5, "x = {}", flake.x);
        }
    }

    #[test]
    fn falling_flake_wraps_to_top() {
        let mut field = Snowfield::new(1);
        field.resize(10, 5);
        field.flakes[0].y = 6.5;
        field.flakes[0].speed = 0.2;
        field.tick();
        assert_eq!(field.flakes[0].y, -1.0);
    }
}
