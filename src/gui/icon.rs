// src/gui/icon.rs
//
// Window icon drawn in memory: an open book on a blue rounded tile.

use eframe::egui::IconData;
use image::{Rgba, RgbaImage};

const SIZE: u32 = 64;
const TILE: Rgba<u8> = Rgba([37, 99, 235, 255]);
const PAGE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const SPINE: Rgba<u8> = Rgba([191, 219, 254, 255]);
const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

fn inside_rounded(x: u32, y: u32, r: u32) -> bool {
    let (x, y, r, max) = (x as i64, y as i64, r as i64, (SIZE - 1) as i64);
    let cx = if x < r { r } else if x > max - r { max - r } else { x };
    let cy = if y < r { r } else if y > max - r { max - r } else { y };
    (x - cx).pow(2) + (y - cy).pow(2) <= r * r
}

pub fn render() -> RgbaImage {
    RgbaImage::from_fn(SIZE, SIZE, |x, y| {
        if !inside_rounded(x, y, 12) {
            return CLEAR;
        }
        let in_book = (14..50).contains(&x) && (18..46).contains(&y);
        match (in_book, x) {
            (true, 31 | 32) => SPINE,
            (true, _) => PAGE,
            (false, _) => TILE,
        }
    })
}

pub fn app_icon() -> IconData {
    let rgba = render();
    let (w, h) = rgba.dimensions();
    IconData { rgba: rgba.into_raw(), width: w, height: h }
}
