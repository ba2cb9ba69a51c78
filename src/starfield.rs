/// Scrolling background stars.  Purely visual.

use rand::Rng;

const MIN_SPEED: f32 = 5.0;
const MAX_SPEED: f32 = 25.0;
/// Row a recycled star re-enters at, just above the top edge.
const REENTRY_Y: f32 = -2.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    /// Side length of the square dot, 1 or 2.
    pub size: u8,
    /// Downward speed, units per second.
    pub speed: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Starfield {
    pub stars: Vec<Star>,
    width: f32,
    height: f32,
}

impl Starfield {
    /// Scatter `count` stars across a `width × height` field.
    pub fn new(count: usize, width: f32, height: f32, rng: &mut impl Rng) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                x: rng.gen_range(0.0..width),
                y: rng.gen_range(0.0..height),
                // Small stars twice as common as big ones.
                size: if rng.gen_ratio(1, 3) { 2 } else { 1 },
                speed: rng.gen_range(MIN_SPEED..MAX_SPEED),
            })
            .collect();
        Self {
            stars,
            width,
            height,
        }
    }

    /// Scroll every star down; stars falling off the bottom re-enter at the
    /// top with a fresh column and speed.
    pub fn update(&self, dt: f32, rng: &mut impl Rng) -> Starfield {
        let stars = self
            .stars
            .iter()
            .map(|s| {
                let y = s.y + s.speed * dt;
                if y > self.height {
                    Star {
                        x: rng.gen_range(0.0..self.width),
                        y: REENTRY_Y,
                        speed: rng.gen_range(MIN_SPEED..MAX_SPEED),
                        ..s.clone()
                    }
                } else {
                    Star { y, ..s.clone() }
                }
            })
            .collect();
        Starfield {
            stars,
            width: self.width,
            height: self.height,
        }
    }
}
