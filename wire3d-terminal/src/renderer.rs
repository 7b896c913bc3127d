/// Character-cell line renderer for terminal output
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::Vector3;
use std::io::Write;
use wire3d_core::Surface;

const EMPTY: char = ' ';
const HIGHLIGHT_GLYPH: char = '#';

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    glyph: char,
    highlighted: bool,
}

const BLANK: Cell = Cell {
    glyph: EMPTY,
    highlighted: false,
};

/// ASCII renderer that rasterizes screen-space segments into terminal cells
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    highlight: bool,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![BLANK; width * height],
            highlight: false,
        }
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.cells = vec![BLANK; width * height];
    }

    pub fn glyph_at(&self, x: usize, y: usize) -> Option<char> {
        (x < self.width && y < self.height).then(|| self.cells[y * self.width + x].glyph)
    }

    fn plot(&mut self, x: i64, y: i64, glyph: char) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let cell = &mut self.cells[y as usize * self.width + x as usize];
        // The selection style wins over plain edges in the same cell
        if self.highlight || !cell.highlighted {
            *cell = Cell {
                glyph: if self.highlight { HIGHLIGHT_GLYPH } else { glyph },
                highlighted: self.highlight,
            };
        }
    }

    fn rasterize_line(&mut self, start: (f64, f64), end: (f64, f64)) {
        let Some((start, end)) = clip_to_rect(
            start,
            end,
            (self.width as f64 - 1.0).max(0.0),
            (self.height as f64 - 1.0).max(0.0),
        ) else {
            return;
        };
        let glyph = slope_glyph(end.0 - start.0, end.1 - start.1);

        // Bresenham
        let (mut x, mut y) = (start.0.round() as i64, start.1.round() as i64);
        let (x1, y1) = (end.0.round() as i64, end.1.round() as i64);
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.plot(x, y, glyph);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let cell = self.cells[y * self.width + x];
                let color = if cell.highlighted {
                    Color::Red
                } else {
                    Color::White
                };

                writer.queue(SetForegroundColor(color))?;
                writer.queue(Print(cell.glyph))?;
            }
            if y + 1 < self.height {
                writer.queue(Print("\r\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl Surface for AsciiRenderer {
    fn clear(&mut self) {
        self.cells.fill(BLANK);
        self.highlight = false;
    }

    fn draw_segment(&mut self, start: &Vector3<f64>, end: &Vector3<f64>) {
        self.rasterize_line((start.x, start.y), (end.x, end.y));
    }

    fn set_highlight(&mut self, on: bool) {
        self.highlight = on;
    }
}

/// Pick a line character that follows the segment's direction (y grows downwards)
fn slope_glyph(dx: f64, dy: f64) -> char {
    // Cells are about twice as tall as wide
    let (ax, ay) = (dx.abs(), dy.abs() * 2.0);
    if ay < ax * 0.5 {
        '-'
    } else if ax < ay * 0.5 {
        '|'
    } else if (dx > 0.0) == (dy > 0.0) {
        '\\'
    } else {
        '/'
    }
}

/// Liang-Barsky clip of a segment to `[0, max_x] x [0, max_y]`
fn clip_to_rect(
    start: (f64, f64),
    end: (f64, f64),
    max_x: f64,
    max_y: f64,
) -> Option<((f64, f64), (f64, f64))> {
    if ![start.0, start.1, end.0, end.1].iter().all(|c| c.is_finite()) {
        return None;
    }
    let (dx, dy) = (end.0 - start.0, end.1 - start.1);
    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;
    let edges = [
        (-dx, start.0),
        (dx, max_x - start.0),
        (-dy, start.1),
        (dy, max_y - start.1),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
        }
    }
    if t0 > t1 {
        return None;
    }
    Some((
        (start.0 + t0 * dx, start.1 + t0 * dy),
        (start.0 + t1 * dx, start.1 + t1 * dy),
    ))
}
