// vim: set ai et ts=4 sw=4 sts=4:
mod solver;

pub use solver::Diagram;

use std::fmt;
use std::cmp::max;

use super::error::{Error, Result};
use super::util::numbered_lines;

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum SegmentKind {
    Horizontal,
    Vertical,
    Diagonal, // exactly 45 degrees
}

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub kind: SegmentKind,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Option<Self> {
        let kind = if start.y == end.y {
            SegmentKind::Horizontal
        } else if start.x == end.x {
            SegmentKind::Vertical
        } else if start.x.abs_diff(end.x) == start.y.abs_diff(end.y) {
            SegmentKind::Diagonal
        } else {
            return None;
        };
        Some(Segment { start, end, kind })
    }

    pub fn is_axis_aligned(&self) -> bool {
        self.kind != SegmentKind::Diagonal
    }

    pub fn max_x(&self) -> usize { max(self.start.x, self.end.x) }
    pub fn max_y(&self) -> usize { max(self.start.y, self.end.y) }

    /// Lattice points from `start` to `end`, both inclusive.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let dx = step_towards(self.start.x, self.end.x);
        let dy = step_towards(self.start.y, self.end.y);
        let len = max(self.start.x.abs_diff(self.end.x), self.start.y.abs_diff(self.end.y));
        let start = self.start;
        (0..=len).map(move |i| Point {
            x: offset(start.x, dx, i),
            y: offset(start.y, dy, i),
        })
    }
}
impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

fn step_towards(from: usize, to: usize) -> isize {
    match from.cmp(&to) {
        std::cmp::Ordering::Less    => 1,
        std::cmp::Ordering::Equal   => 0,
        std::cmp::Ordering::Greater => -1,
    }
}
fn offset(base: usize, step: isize, i: usize) -> usize {
    match step {
        1  => base + i,
        -1 => base - i,
        _  => base,
    }
}

pub fn parse(input: &str) -> Result<Vec<Segment>> {
    numbered_lines(input).map(|(line_no, line)| parse_segment(line_no, line))
                         .collect()
}

fn parse_segment(line_no: usize, line: &str) -> Result<Segment> {
    let (start, end) = line.split_once("->")
                           .ok_or_else(|| Error::input_format(line_no, format!("expected 'x1,y1 -> x2,y2', got '{}'", line)))?;
    let start = parse_point(line_no, start)?;
    let end = parse_point(line_no, end)?;
    Segment::new(start, end).ok_or_else(|| Error::input_format(line_no, format!(
        "segment {} -> {} is neither axis-aligned nor diagonal", start, end)))
}

fn parse_point(line_no: usize, s: &str) -> Result<Point> {
    let s = s.trim();
    let (x, y) = s.split_once(',')
                  .ok_or_else(|| Error::input_format(line_no, format!("expected 'x,y', got '{}'", s)))?;
    let coord = |c: &str| c.trim()
                           .parse::<usize>()
                           .map_err(|e| Error::input_format(line_no, format!("bad coordinate '{}': {}", c.trim(), e)));
    Ok(Point { x: coord(x)?, y: coord(y)? })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parses_segments() {
        let segments = parse("0,9 -> 5,9\n\n8,0 -> 0,8\n").unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].kind, SegmentKind::Horizontal);
        assert_eq!(segments[1].kind, SegmentKind::Diagonal);
        assert_eq!(segments[1].start, Point { x: 8, y: 0 });
    }

    #[rstest]
    #[case("0,9 -> 5")]
    #[case("0,9 5,9")]
    #[case("a,9 -> 5,9")]
    #[case("0,0 -> 1,2")]
    #[case("-1,0 -> 1,0")]
    fn rejects_malformed_segments(#[case] line: &str) {
        let input = format!("1,1 -> 1,3\n{}\n", line);
        assert!(matches!(parse(&input), Err(Error::InputFormat { line: 2, .. })));
    }

    #[test]
    fn points_walk_from_start_to_end() {
        let seg = Segment::new(Point { x: 9, y: 7 }, Point { x: 7, y: 9 }).unwrap();
        let points = seg.points().map(|p| (p.x, p.y)).collect::<Vec<_>>();
        assert_eq!(points, vec![(9, 7), (8, 8), (7, 9)]);
    }

    #[test]
    fn single_point_segment() {
        let seg = Segment::new(Point { x: 3, y: 3 }, Point { x: 3, y: 3 }).unwrap();
        assert_eq!(seg.points().count(), 1);
    }
}
