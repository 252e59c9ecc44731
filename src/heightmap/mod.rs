// vim: set ai et ts=4 sw=4 sts=4:
mod solver;

use ansi_term::{Colour, Style, ANSIString};
use log::info;

use super::error::Result;
use super::grid::{Grid, Location, parse_digit_grid};

pub const BASIN_WALL: u8 = 9;

#[derive(Debug, Clone)]
pub struct Heightmap {
    pub grid: Grid<u8>,
}

impl Heightmap {
    pub fn new(grid: Grid<u8>) -> Self {
        Heightmap { grid }
    }

    pub fn parse(input: &str) -> Result<Self> {
        let map = Self::new(parse_digit_grid(input)?);
        info!("loaded {}x{} heightmap", map.width(), map.height());
        Ok(map)
    }

    pub fn width(&self) -> usize { self.grid.width() }
    pub fn height(&self) -> usize { self.grid.height() }
    pub fn height_at(&self, loc: Location) -> u8 { *self.grid.get(loc) }

    pub fn render(&self, emit_color: bool) -> String {
        let low_points = self.low_points();
        self.grid.render(|loc, &h| Self::_style(h, low_points.contains(&loc)), emit_color)
    }

    fn _style(height: u8, is_low_point: bool) -> ANSIString<'static> {
        let style = match (is_low_point, height) {
            (true, _)           => Colour::Cyan.bold(),
            (false, BASIN_WALL) => Style::new().fg(Colour::Fixed(241)),
            (false, _)          => Style::default(),
        };
        style.paint(height.to_string())
    }
}
