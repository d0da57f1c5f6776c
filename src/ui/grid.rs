//! [`DrawSurface`] over a grid of terminal cells. Shapes become braille dots
//! (2x4 per cell), text is written one character per cell on top.

use std::collections::HashMap;

use ratatui::prelude::*;

use super::art;
use crate::math::Size;
use crate::sprites::Sprite;
use crate::surface::{Align, DrawSurface, Rgb, TextStyle};

const BACKGROUND: Color = Color::Rgb(0, 0, 5);
const BRAILLE_BASE: u32 = 0x2800;

pub struct GridSurface {
    width: usize,
    height: usize,
    /// Braille dots per canvas unit.
    scale_x: f32,
    scale_y: f32,
    grid: Vec<Vec<(char, Style)>>,
}

impl GridSurface {
    /// `width` x `height` cells showing a `canvas`-sized logical field.
    pub fn new(width: usize, height: usize, canvas: Size) -> Self {
        let scale = |dots: usize, units: f32| if units > 0.0 { dots as f32 / units } else { 0.0 };
        Self {
            width,
            height,
            scale_x: scale(width * 2, canvas.width),
            scale_y: scale(height * 4, canvas.height),
            grid: vec![vec![(' ', Style::default().bg(BACKGROUND)); width]; height],
        }
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<(char, Style)> {
        self.grid.get(y).and_then(|row| row.get(x)).copied()
    }

    pub fn into_lines(self) -> Vec<Line<'static>> {
        self.grid
            .into_iter()
            .map(|row| {
                let spans: Vec<Span<'static>> = row
                    .into_iter()
                    .map(|(ch, style)| Span::styled(String::from(ch), style))
                    .collect();
                Line::from(spans)
            })
            .collect()
    }

    fn dots(&self) -> (i32, i32) {
        ((self.width * 2) as i32, (self.height * 4) as i32)
    }

    /// Canvas box to dot box: (x0, y0, width, height), never narrower than one dot.
    fn dot_box(&self, x: f32, y: f32, w: f32, h: f32) -> (i32, i32, i32, i32) {
        let x0 = (x * self.scale_x).round() as i32;
        let y0 = (y * self.scale_y).round() as i32;
        let dw = ((w * self.scale_x).round() as i32).max(1);
        let dh = ((h * self.scale_y).round() as i32).max(1);
        (x0, y0, dw, dh)
    }
}

// ── Braille rendering ──────────────────────────────────────────────

fn braille_bit(sub_x: usize, sub_y: usize) -> u8 {
    match (sub_x, sub_y) {
        (0, 0) => 0x01,
        (0, 1) => 0x02,
        (0, 2) => 0x04,
        (0, 3) => 0x40,
        (1, 0) => 0x08,
        (1, 1) => 0x10,
        (1, 2) => 0x20,
        (1, 3) => 0x80,
        _ => 0,
    }
}

fn set_dot(map: &mut HashMap<(usize, usize), u8>, bx: i32, by: i32, bw: i32, bh: i32) {
    if bx < 0 || by < 0 || bx >= bw || by >= bh {
        return;
    }
    let cx = bx as usize / 2;
    let cy = by as usize / 4;
    let sx = bx as usize % 2;
    let sy = by as usize % 4;
    *map.entry((cx, cy)).or_insert(0) |= braille_bit(sx, sy);
}

/// Later layers win the cell colour; dots already there are kept.
fn write_layer(
    grid: &mut [Vec<(char, Style)>],
    map: &HashMap<(usize, usize), u8>,
    w: usize,
    h: usize,
    color: Color,
    bold: bool,
) {
    for (&(cx, cy), &bits) in map {
        if cx >= w || cy >= h || bits == 0 {
            continue;
        }
        let existing = grid[cy][cx].0 as u32;
        let merged = if (BRAILLE_BASE..BRAILLE_BASE + 0x100).contains(&existing) {
            (existing - BRAILLE_BASE) as u8 | bits
        } else {
            bits
        };
        let ch = char::from_u32(BRAILLE_BASE + merged as u32).unwrap_or(' ');
        let mut style = Style::default().fg(color).bg(BACKGROUND);
        if bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        grid[cy][cx] = (ch, style);
    }
}

impl DrawSurface for GridSurface {
    fn clear(&mut self) {
        for row in self.grid.iter_mut() {
            for cell in row.iter_mut() {
                *cell = (' ', Style::default().bg(BACKGROUND));
            }
        }
    }

    fn draw_sprite(&mut self, sprite: Sprite, x: f32, y: f32, width: f32, height: f32) {
        let bitmap = art::bitmap(sprite);
        let rows = bitmap.len();
        let cols = bitmap.first().map_or(0, |row| row.len());
        if rows == 0 || cols == 0 {
            return;
        }
        let (bw, bh) = self.dots();
        let (x0, y0, dw, dh) = self.dot_box(x, y, width, height);
        let mut map: HashMap<(usize, usize), u8> = HashMap::new();
        for dy in 0..dh {
            let art_row = bitmap[dy as usize * rows / dh as usize].as_bytes();
            for dx in 0..dw {
                if art_row[dx as usize * cols / dw as usize] == b'#' {
                    set_dot(&mut map, x0 + dx, y0 + dy, bw, bh);
                }
            }
        }
        write_layer(&mut self.grid, &map, self.width, self.height, art::color(sprite), true);
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: TextStyle) {
        let row = (y * self.scale_y / 4.0).floor() as i64;
        if row < 0 || row >= self.height as i64 {
            return;
        }
        let col = (x * self.scale_x / 2.0).floor() as i64;
        let len = text.chars().count() as i64;
        let start = match style.align {
            Align::Left => col,
            Align::Center => col - len / 2,
        };
        let mut cell_style = Style::default().fg(art::to_color(style.color)).bg(BACKGROUND);
        if style.size >= 36.0 {
            cell_style = cell_style.add_modifier(Modifier::BOLD);
        }
        for (i, ch) in text.chars().enumerate() {
            let c = start + i as i64;
            if c >= 0 && c < self.width as i64 {
                self.grid[row as usize][c as usize] = (ch, cell_style);
            }
        }
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
        let (bw, bh) = self.dots();
        let (x0, y0, dw, dh) = self.dot_box(x, y, width, height);
        let mut map: HashMap<(usize, usize), u8> = HashMap::new();
        for dy in 0..dh {
            for dx in 0..dw {
                set_dot(&mut map, x0 + dx, y0 + dy, bw, bh);
            }
        }
        write_layer(&mut self.grid, &map, self.width, self.height, art::to_color(color), true);
    }
}
