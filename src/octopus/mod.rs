// vim: set ai et ts=4 sw=4 sts=4:
mod solver;

use ansi_term::{Colour, Style, ANSIString};
use log::info;

use super::error::Result;
use super::grid::{Grid, parse_digit_grid};

/// A grid of octopus energy levels, plus the number of steps simulated so far.
#[derive(Debug, Clone)]
pub struct Cavern {
    pub grid: Grid<u32>,
    pub steps: usize,
}

impl Cavern {
    pub fn new(grid: Grid<u32>) -> Self {
        Cavern { grid, steps: 0 }
    }

    pub fn parse(input: &str) -> Result<Self> {
        let digits = parse_digit_grid(input)?;
        info!("loaded {}x{} octopus grid", digits.width(), digits.height());
        let grid = Grid {
            squares: digits.squares
                           .into_iter()
                           .map(|row| row.into_iter().map(u32::from).collect())
                           .collect(),
        };
        Ok(Self::new(grid))
    }

    pub fn population(&self) -> usize { self.grid.width() * self.grid.height() }

    pub fn render(&self, emit_color: bool) -> String {
        self.grid.render(|_, &e| Self::_style(e), emit_color)
    }

    fn _style(energy: u32) -> ANSIString<'static> {
        match energy {
            0 => Colour::Yellow.bold().paint("0"),
            e => Style::default().paint(e.to_string()),
        }
    }
}
