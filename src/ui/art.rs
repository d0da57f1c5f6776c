//! Glyph art for every sprite, one `#` per braille dot at the default sizes.
//! The grid surface stretches these to whatever box it is asked to fill.

use ratatui::style::Color;

use crate::sprites::Sprite;
use crate::surface::Rgb;

const SPACESHIP: &[&str] = &[
    ".....#.....",
    "....###....",
    "....###....",
    ".#########.",
    "###########",
    "###########",
];

const UFO_SAUCER: &[&str] = &[
    "...#####...",
    ".#########.",
    "###########",
    "##.##.##.##",
    "###########",
    "..##...##..",
    ".##.....##.",
    "##.......##",
];

const UFO_SQUID: &[&str] = &[
    "....###....",
    "..#######..",
    ".#########.",
    "###.###.###",
    "###########",
    "...#...#...",
    "..#.#.#.#..",
    ".#.......#.",
];

const BULLET: &[&str] = &["#", "#", "#"];

const BOMB: &[&str] = &[
    ".#.",
    "###",
    "###",
    "###",
    ".#.",
];

const COIN: &[&str] = &[
    ".###.",
    "##.##",
    "#.#.#",
    "##.##",
    ".###.",
];

const POWERUP: &[&str] = &[
    "..#..",
    ".###.",
    "#####",
    ".###.",
    "..#..",
];

const ASTEROID: &[&str] = &[
    "..####..",
    ".######.",
    "###..###",
    "########",
    "##.#####",
    ".######.",
    "..###...",
];

pub fn bitmap(sprite: Sprite) -> &'static [&'static str] {
    match sprite {
        Sprite::Spaceship => SPACESHIP,
        Sprite::Bullet => BULLET,
        Sprite::Ufo(variant) if variant % 2 == 0 => UFO_SAUCER,
        Sprite::Ufo(_) => UFO_SQUID,
        Sprite::Bomb => BOMB,
        Sprite::Coin => COIN,
        Sprite::Powerup => POWERUP,
        Sprite::Asteroid => ASTEROID,
    }
}

pub fn color(sprite: Sprite) -> Color {
    match sprite {
        Sprite::Spaceship => Color::Rgb(80, 255, 80),
        Sprite::Bullet => Color::Rgb(255, 255, 200),
        Sprite::Ufo(variant) if variant % 2 == 0 => Color::Rgb(255, 80, 80),
        Sprite::Ufo(_) => Color::Rgb(200, 180, 255),
        Sprite::Bomb => Color::Rgb(255, 100, 100),
        Sprite::Coin => Color::Rgb(255, 215, 0),
        Sprite::Powerup => Color::Rgb(80, 200, 255),
        Sprite::Asteroid => Color::Rgb(170, 150, 130),
    }
}

pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}
