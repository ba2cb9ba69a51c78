/// Pixel-art sprites built from tiny text maps.
///
/// Each character of a map row picks a colour from the sprite's palette;
/// a space is transparent.  Sprites are scaled up by the renderer, so the
/// maps stay small and easy to edit.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Colour drawn for a map character missing from the palette.
pub const MISSING: Rgb = Rgb(255, 0, 255);

#[derive(Clone, Copy, Debug)]
pub struct Sprite {
    pub rows: &'static [&'static str],
    pub palette: &'static [(char, Rgb)],
}

impl Sprite {
    /// Width in map pixels (the longest row).
    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.chars().count()).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Size in world units once scaled.
    pub fn scaled_size(&self, scale: f32) -> (f32, f32) {
        (self.width() as f32 * scale, self.height() as f32 * scale)
    }

    fn color_of(&self, ch: char) -> Rgb {
        self.palette
            .iter()
            .find(|(key, _)| *key == ch)
            .map(|(_, color)| *color)
            .unwrap_or(MISSING)
    }

    /// Every opaque pixel as `(column, row, colour)`.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize, Rgb)> + '_ {
        self.rows.iter().enumerate().flat_map(move |(y, row)| {
            row.chars()
                .enumerate()
                .filter(|(_, ch)| *ch != ' ')
                .map(move |(x, ch)| (x, y, self.color_of(ch)))
        })
    }
}

// ── Maps ──────────────────────────────────────────────────────────────────────

pub const PLAYER: Sprite = Sprite {
    rows: &[
        "     r     ",
        "    rrr    ",
        "   rccrr   ",
        "  rrrrrr   ",
        " rrrrrrrr  ",
        "rrrrddddrrr",
        "rrr rrr rrr",
        "   rrrr    ",
        "   rrrr    ",
        "    rr     ",
        "    ff     ",
        "     f     ",
    ],
    palette: &[
        ('r', Rgb(220, 70, 30)),  // hull
        ('d', Rgb(170, 50, 25)),  // hull shading
        ('c', Rgb(56, 140, 210)), // cockpit
        ('f', Rgb(255, 170, 40)), // exhaust
    ],
};

pub const ENEMY: Sprite = Sprite {
    rows: &[
        "  xx  ",
        " xxxxx ",
        "xxyyyx",
        " xyyx ",
    ],
    palette: &[('x', Rgb(18, 100, 40)), ('y', Rgb(100, 220, 100))],
};

pub const BULLET: Sprite = Sprite {
    rows: &["o"],
    palette: &[('o', Rgb(255, 200, 50))],
};

// Decoration for the menu and game-over screens.

pub const PLANET: Sprite = Sprite {
    rows: &[
        "  ppp  ",
        " ppppp ",
        "ppppppp",
        " ppppp ",
        "  ppp  ",
    ],
    palette: &[('p', Rgb(200, 80, 80))],
};

pub const SAUCER: Sprite = Sprite {
    rows: &[
        "  sss  ",
        " ssssss",
        "sssss  ",
    ],
    palette: &[('s', Rgb(100, 160, 210))],
};

pub const COMET: Sprite = Sprite {
    rows: &[
        " c   ",
        "ccc  ",
        " ccc ",
    ],
    palette: &[('c', Rgb(210, 140, 80))],
};
