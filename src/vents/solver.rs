// vim: set ai et ts=4 sts=4 sw=4:
use ansi_term::{Colour, Style, ANSIString};
use log::{debug, info, trace};

use super::Segment;
use super::super::grid::Grid;

/// Coverage grid: each square holds the number of segments passing through it.
#[derive(Debug)]
pub struct Diagram {
    pub grid: Grid<u32>,
}

impl Diagram {
    pub fn rasterize(segments: &[Segment], include_diagonals: bool) -> Self {
        let considered = segments.iter()
                                 .filter(|s| include_diagonals || s.is_axis_aligned())
                                 .collect::<Vec<_>>();

        // sized after the largest coordinate actually drawn
        let (width, height) = match considered.is_empty() {
            true  => (0, 0),
            false => (considered.iter().map(|s| s.max_x()).max().unwrap_or(0) + 1,
                      considered.iter().map(|s| s.max_y()).max().unwrap_or(0) + 1),
        };
        info!("rasterizing {} of {} segments onto a {}x{} diagram",
              considered.len(), segments.len(), width, height);

        let mut grid = Grid::new(width, height, 0u32);
        for segment in considered {
            trace!("drawing {:?} segment {}", segment.kind, segment);
            for point in segment.points() {
                *grid.get_square_mut(point.x, point.y) += 1;
            }
        }
        Diagram { grid }
    }

    pub fn overlaps(&self) -> usize {
        let count = self.grid.squares.iter()
                                     .flatten()
                                     .filter(|&&n| n >= 2)
                                     .count();
        debug!("{} squares covered by at least two segments", count);
        count
    }

    pub fn render(&self, emit_color: bool) -> String {
        self.grid.render(|_, &n| Self::_style(n), emit_color)
    }

    fn _style(n: u32) -> ANSIString<'static> {
        match n {
            0 => Style::new().fg(Colour::Fixed(241)).paint("."),
            1 => Style::default().paint("1"),
            n if n < 10 => Colour::Red.bold().paint(n.to_string()),
            _ => Colour::Red.bold().paint("+"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::{parse, Point};
    use rstest::rstest;

    const EXAMPLE: &str = "\
0,9 -> 5,9
8,0 -> 0,8
9,4 -> 3,4
2,2 -> 2,1
7,0 -> 7,4
6,4 -> 2,0
0,9 -> 2,9
3,4 -> 1,4
0,0 -> 8,8
5,5 -> 8,2
";

    #[rstest]
    #[case(false, 5)]
    #[case(true, 12)]
    fn example_overlaps(#[case] include_diagonals: bool, #[case] expected: usize) {
        let segments = parse(EXAMPLE).unwrap();
        assert_eq!(Diagram::rasterize(&segments, include_diagonals).overlaps(), expected);
    }

    #[test]
    fn example_diagram_matches() {
        let segments = parse(EXAMPLE).unwrap();
        let diagram = Diagram::rasterize(&segments, true);
        let expected = "\
1.1....11.
.111...2..
..2.1.111.
...1.2.2..
.112313211
...1.2....
..1...1...
.1.....1..
1.......1.
222111....
";
        assert_eq!(diagram.render(false), expected);
    }

    #[test]
    fn point_order_does_not_matter() {
        let forward = parse("0,0 -> 4,4\n4,0 -> 0,4\n0,1 -> 6,1\n").unwrap();
        let backward = forward.iter()
                              .map(|s| Segment::new(s.end, s.start).unwrap())
                              .collect::<Vec<_>>();
        let a = Diagram::rasterize(&forward, true);
        let b = Diagram::rasterize(&backward, true);
        assert_eq!(a.grid, b.grid);
        assert_eq!(a.overlaps(), 3);
    }

    #[test]
    fn size_follows_considered_segments_only() {
        let segments = parse("0,0 -> 2,0\n0,0 -> 9,9\n").unwrap();
        let diagram = Diagram::rasterize(&segments, false);
        assert_eq!((diagram.grid.width(), diagram.grid.height()), (3, 1));
        assert_eq!(*diagram.grid.get_square(2, 0), 1);
    }

    #[test]
    fn no_segments_no_overlaps() {
        assert_eq!(Diagram::rasterize(&[], true).overlaps(), 0);
        let diagonal_only = vec![Segment::new(Point { x: 0, y: 0 }, Point { x: 1, y: 1 }).unwrap()];
        assert_eq!(Diagram::rasterize(&diagonal_only, false).overlaps(), 0);
    }
}
