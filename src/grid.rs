// vim: set ai et ts=4 sts=4 sw=4:
use std::fmt;
use std::convert::TryFrom;
use ansi_term::ANSIString;

use super::error::{Error, Result};
use super::util::{maybe_color, numbered_lines, Neighbourhood};

pub trait HasGridLocation {
    fn get_row(&self) -> usize;
    fn get_col(&self) -> usize;
    fn fmt_location(&self) -> String {
        format!("(col={:-2}, row={:-2})", self.get_col(), self.get_row())
    }
}

#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Copy, Clone, Debug)]
pub struct Location {
    pub x: usize,
    pub y: usize,
}
impl Location {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}
impl HasGridLocation for Location {
    fn get_row(&self) -> usize { self.y }
    fn get_col(&self) -> usize { self.x }
}
impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.fmt_location())
    }
}

// ------------------------------------------------

#[derive(Clone, PartialEq)]
pub struct Grid<T> {
    pub squares: Vec<Vec<T>>,
}
impl<T: Clone> Grid<T> {
    pub fn new(width: usize, height: usize, fill: T)
        -> Self
    {
        Grid {
            squares: (0..height).map(|_| vec![fill.clone(); width])
                                .collect(),
        }
    }
}
impl<T> Grid<T> {
    /// Builds a grid from rows tagged with the 1-based input line they came from.
    pub fn from_numbered_rows(rows: Vec<(usize, Vec<T>)>) -> Result<Self> {
        let width = match rows.first() {
            Some((_, row)) => row.len(),
            None           => return Err(Error::input_format(1, "grid has no rows")),
        };
        if let Some((line_no, row)) = rows.iter().find(|(_, row)| row.len() != width) {
            return Err(Error::input_format(*line_no, format!(
                "grid row has {} columns, expected {}", row.len(), width)));
        }
        Ok(Grid { squares: rows.into_iter().map(|(_, row)| row).collect() })
    }

    pub fn width(&self) -> usize { self.squares.first().map_or(0, |row| row.len()) }
    pub fn height(&self) -> usize { self.squares.len() }
    pub fn get_square(&self, x: usize, y: usize) -> &T {
        &self.squares[y][x]
    }
    pub fn get_square_mut(&mut self, x: usize, y: usize) -> &mut T {
        &mut self.squares[y][x]
    }
    pub fn get(&self, loc: Location) -> &T {
        self.get_square(loc.x, loc.y)
    }
    pub fn get_mut(&mut self, loc: Location) -> &mut T {
        self.get_square_mut(loc.x, loc.y)
    }

    /// All locations in row-major order.
    pub fn locations(&self) -> impl Iterator<Item = Location> {
        let width = self.width();
        (0..self.height()).flat_map(move |y| (0..width).map(move |x| Location::new(x, y)))
    }

    /// In-bounds neighbours of `loc`; never yields a location outside the grid.
    pub fn neighbours(&self, loc: Location, neighbourhood: Neighbourhood) -> Vec<Location> {
        let (width, height) = (self.width(), self.height());
        neighbourhood.offsets()
                     .iter()
                     .filter_map(|&(dx, dy)| {
                         let x = isize::try_from(loc.x).ok()? + dx;
                         let y = isize::try_from(loc.y).ok()? + dy;
                         let x = usize::try_from(x).ok().filter(|&x| x < width)?;
                         let y = usize::try_from(y).ok().filter(|&y| y < height)?;
                         Some(Location::new(x, y))
                     })
                     .collect()
    }

    pub fn render<F>(&self, style: F, emit_color: bool) -> String
        where F: Fn(Location, &T) -> ANSIString<'static>
    {
        let mut result = String::new();
        for (y, row) in self.squares.iter().enumerate() {
            for (x, value) in row.iter().enumerate() {
                result.push_str(&maybe_color(&style(Location::new(x, y), value), emit_color));
            }
            result.push('\n');
        }
        result
    }
}

impl<T> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid(w={}, h={})", self.width(), self.height())
    }
}

/// Parses rows of single decimal digits, e.g. heightmaps and octopus energy levels.
pub fn parse_digit_grid(input: &str) -> Result<Grid<u8>> {
    let rows = numbered_lines(input)
        .map(|(line_no, line)| {
            let row = line.chars()
                          .map(|c| c.to_digit(10)
                                    .map(|d| d as u8)
                                    .ok_or_else(|| Error::input_format(line_no, format!("'{}' is not a digit", c))))
                          .collect::<Result<Vec<_>>>()?;
            Ok((line_no, row))
        })
        .collect::<Result<Vec<_>>>()?;
    Grid::from_numbered_rows(rows)
}
