//! Confetti burst animation.
//!
//! Particles launch upward from the upper-center region, arc under gravity,
//! and fade exponentially. Faded or fallen-off particles are culled each
//! tick, so an idle burst costs nothing after a couple of seconds.

use rand::Rng;
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::ui::theme;

#[derive(Debug, Clone)]
struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    gravity: f32,
    alpha: f32,
    /// Index into the palette's confetti colors
    color: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Confetti {
    particles: Vec<Particle>,
}

impl Confetti {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Launch `count` particles from the upper-center of the given area.
    pub fn burst(&mut self, count: usize, width: u16, height: u16) {
        let mut rng = rand::rng();
        let (w, h) = (width.max(1) as f32, height.max(1) as f32);
        for _ in 0..count {
            self.particles.push(Particle {
                x: w / 2.0 + rng.random_range(-4.0..4.0),
                y: h / 3.0 + rng.random_range(-1.5..1.5),
                vx: rng.random_range(-0.8..0.8),
                vy: rng.random_range(-1.2..-0.3),
                gravity: rng.random_range(0.03..0.06),
                alpha: 1.0,
                color: rng.random_range(0..5),
            });
        }
    }

    /// Advance one frame: apply gravity, fade, and cull.
    pub fn tick(&mut self, height: u16) {
        let floor = height as f32 + 4.0;
        self.particles
            .retain(|p| p.alpha > 0.03 && p.y < floor);
        for p in &mut self.particles {
            p.vy += p.gravity;
            p.x += p.vx;
            p.y += p.vy;
            p.alpha *= 0.988;
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        for p in &self.particles {
            if p.x < 0.0 || p.y < 0.0 {
                continue;
            }
            let (x, y) = (area.x + p.x as u16, area.y + p.y as u16);
            if x >= area.x + area.width || y >= area.y + area.height {
                continue;
            }
            let glyph = if p.alpha > 0.7 {
                "■"
            } else if p.alpha > 0.4 {
                "▪"
            } else if p.alpha > 0.15 {
                "•"
            } else {
                "·"
            };
            buf[(x, y)]
                .set_symbol(glyph)
                .set_style(Style::default().fg(theme::confetti(p.color)));
        }
    }
}
