// vim: set ai et ts=4 sw=4 sts=4:
use std::fmt;
use std::convert::TryFrom;
use std::path::PathBuf;
use log::info;

use super::error::Result;
use super::{vents, segments};
use super::heightmap::Heightmap;
use super::octopus::Cavern;

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum Day {
    Vents,     // day 5
    Segments,  // day 8
    Smoke,     // day 9
    Octopus,   // day 11
}
impl Day {
    pub const ALL: [Day; 4] = [Day::Vents, Day::Segments, Day::Smoke, Day::Octopus];

    pub fn number(&self) -> u8 {
        match self {
            Day::Vents    => 5,
            Day::Segments => 8,
            Day::Smoke    => 9,
            Day::Octopus  => 11,
        }
    }
    pub fn default_input(&self) -> PathBuf {
        PathBuf::from(format!("day_{:02}", self.number())).join("input.txt")
    }
}
impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Day {}: {}", self.number(), match self {
            Day::Vents    => "Hydrothermal Venture",
            Day::Segments => "Seven Segment Search",
            Day::Smoke    => "Smoke Basin",
            Day::Octopus  => "Dumbo Octopus",
        })
    }
}
impl TryFrom<&str> for Day {
    type Error = String;
    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let digits = value.trim_start_matches("day").trim_start_matches('_');
        let number = digits.parse::<u8>()
                           .map_err(|_| format!("'{}' is not a day", value))?;
        Day::ALL.iter()
                .copied()
                .find(|d| d.number() == number)
                .ok_or_else(|| format!("no solution for day {}", number))
    }
}

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum Part {
    One,
    Two,
}
impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            Part::One => "part 1",
            Part::Two => "part 2",
        })
    }
}
impl TryFrom<&str> for Part {
    type Error = &'static str;
    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        match value {
            "1" => Ok(Part::One),
            "2" => Ok(Part::Two),
            _   => Err("Not a valid Part value")
        }
    }
}

#[derive(Debug, Clone)]
pub struct Options {
    pub steps: usize,     // octopus steps for part 1
    pub show: bool,       // render the final model
    pub emit_color: bool,
}
impl Default for Options {
    fn default() -> Self {
        Options { steps: 100, show: false, emit_color: false }
    }
}

#[derive(PartialEq, Eq, Debug)]
pub struct Solution {
    pub answer: u64,
    pub rendering: Option<String>,
}

pub fn solve(day: Day, part: Part, input: &str, opts: &Options) -> Result<Solution> {
    info!("solving {}, {}", day, part);
    let mut rendering = None;
    let answer = match day {
        Day::Vents => {
            let segs = vents::parse(input)?;
            let diagram = vents::Diagram::rasterize(&segs, part == Part::Two);
            if opts.show { rendering = Some(diagram.render(opts.emit_color)); }
            diagram.overlaps() as u64
        }
        Day::Segments => {
            let entries = segments::parse(input)?;
            match part {
                Part::One => segments::count_easy_digits(&entries) as u64,
                Part::Two => entries.iter()
                                    .map(|e| e.decode())
                                    .sum::<Result<u64>>()?,
            }
        }
        Day::Smoke => {
            let map = Heightmap::parse(input)?;
            if opts.show { rendering = Some(map.render(opts.emit_color)); }
            match part {
                Part::One => map.risk_level_sum(),
                Part::Two => map.largest_basins_product(),
            }
        }
        Day::Octopus => {
            let mut cavern = Cavern::parse(input)?;
            let answer = match part {
                Part::One => cavern.run(opts.steps),
                Part::Two => cavern.first_synchronized_step()? as u64,
            };
            if opts.show { rendering = Some(cavern.render(opts.emit_color)); }
            answer
        }
    };
    Ok(Solution { answer, rendering })
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::error::Error;
    use rstest::rstest;

    const VENTS: &str = "0,9 -> 5,9\n8,0 -> 0,8\n9,4 -> 3,4\n2,2 -> 2,1\n7,0 -> 7,4\n\
                         6,4 -> 2,0\n0,9 -> 2,9\n3,4 -> 1,4\n0,0 -> 8,8\n5,5 -> 8,2\n";
    const SEGMENTS: &str = "\
be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd edb | fdgacbe cefdb cefbgd gcbe
edbfga begcd cbg gc gcadebf fbgde acbgfd abcde gfcbed gfec | fcgedb cgb dgebacf gc
fgaebd cg bdaec gdafb agbcfd gdcbef bgcad gfac gcb cdgabef | cg cg fdcagb cbg
fbegcd cbd adcefb dageb afcb bc aefdc ecdab fgdeca fcdbega | efabcd cedba gadfec cb
aecbfdg fbg gf bafeg dbefa fcge gcbea fcaegb dgceab fcbdga | gecf egdcabf bgf bfgea
fgeab ca afcebg bdacfeg cfaedg gcfdb baec bfadeg bafgc acf | gebdcfa ecba ca fadegcb
dbcfg fgd bdegcaf fgec aegbdf ecdfab fbedc dacgb gdcebf gf | cefg dcbef fcge gbcadfe
bdfegc cbegaf gecbf dfcage bdacg ed bedf ced adcbefg gebcd | ed bcgafe cdgba cbgef
egadfb cdbfeg cegd fecab cgb gbdefca cg fgcdab egfdb bfceg | gbdfcae bgc cg cgb
gcafb gcf dcaebfg ecagb gf abcdeg gaef cafbge fdbac fegbdc | fgae cfgab fg bagce
";
    const SMOKE: &str = "2199943210\n3987894921\n9856789892\n8767896789\n9899965678\n";
    const OCTOPUS: &str = "5483143223\n2745854711\n5264556173\n6141336146\n6357385478\n\
                           4167524645\n2176841721\n6882881134\n4846848554\n5283751526\n";

    #[rstest]
    #[case(Day::Vents,    Part::One, VENTS,    5)]
    #[case(Day::Vents,    Part::Two, VENTS,    12)]
    #[case(Day::Segments, Part::One, SEGMENTS, 26)]
    #[case(Day::Segments, Part::Two, SEGMENTS, 61229)]
    #[case(Day::Smoke,    Part::One, SMOKE,    15)]
    #[case(Day::Smoke,    Part::Two, SMOKE,    1134)]
    #[case(Day::Octopus,  Part::One, OCTOPUS,  1656)]
    #[case(Day::Octopus,  Part::Two, OCTOPUS,  195)]
    fn example_answers(#[case] day: Day, #[case] part: Part, #[case] input: &str, #[case] expected: u64) {
        let solution = solve(day, part, input, &Options::default()).unwrap();
        assert_eq!(solution.answer, expected);
        assert_eq!(solution.rendering, None);
    }

    #[test]
    fn octopus_steps_are_configurable() {
        let opts = Options { steps: 10, ..Options::default() };
        assert_eq!(solve(Day::Octopus, Part::One, OCTOPUS, &opts).unwrap().answer, 204);
    }

    #[rstest]
    #[case(Day::Vents)]
    #[case(Day::Smoke)]
    #[case(Day::Octopus)]
    fn show_renders_the_model(#[case] day: Day) {
        let input = match day {
            Day::Vents   => VENTS,
            Day::Smoke   => SMOKE,
            _            => OCTOPUS,
        };
        let opts = Options { show: true, ..Options::default() };
        let rendering = solve(day, Part::One, input, &opts).unwrap().rendering.unwrap();
        assert_eq!(rendering.lines().count(), if day == Day::Smoke { 5 } else { 10 });
    }

    #[test]
    fn malformed_input_fails_fast() {
        let err = solve(Day::Smoke, Part::One, "219\n39x\n", &Options::default()).unwrap_err();
        assert!(matches!(err, Error::InputFormat { line: 2, .. }));
    }

    #[test]
    fn undecodable_entry_fails_the_whole_sum() {
        let input = format!("{}{}\n", SEGMENTS,
            "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb abc | cdfeb fcadb cdfeb cdbaf");
        let err = solve(Day::Segments, Part::Two, &input, &Options::default()).unwrap_err();
        assert!(matches!(err, Error::DecodeAmbiguity(_)));
    }

    #[rstest]
    #[case("5", Day::Vents)]
    #[case("08", Day::Segments)]
    #[case("day9", Day::Smoke)]
    #[case("day_11", Day::Octopus)]
    fn parses_day_names(#[case] name: &str, #[case] expected: Day) {
        assert_eq!(Day::try_from(name), Ok(expected));
    }

    #[rstest]
    #[case("4")]
    #[case("twelve")]
    #[case("")]
    fn rejects_unknown_days(#[case] name: &str) {
        assert!(Day::try_from(name).is_err());
    }

    #[test]
    fn default_input_paths() {
        assert_eq!(Day::Vents.default_input(), PathBuf::from("day_05/input.txt"));
        assert_eq!(Day::Octopus.default_input(), PathBuf::from("day_11/input.txt"));
    }
}
