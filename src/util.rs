// vim: set ai et ts=4 sw=4 sts=4:
use std::fs;
use std::io;
use std::os::unix::io::AsRawFd;
use std::path::Path;
use ansi_term::ANSIString;
use log::debug;

use super::error::{Error, Result};

pub fn maybe_color(s: &ANSIString, emit_color: bool) -> String {
    match emit_color {
        true  => s.to_string(),
        false => (**s).to_string(), // deref once to get ANSIString, once more to get underlying str
    }
}

pub fn is_a_tty<T: AsRawFd>(handle: T) -> bool {
    extern crate libc;
    let fd = handle.as_raw_fd();
    unsafe { libc::isatty(fd) != 0 }
}

pub fn read_input(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(contents) => {
            debug!("read {} bytes from {}", contents.len(), path.display());
            Ok(contents)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound
                    => Err(Error::FileNotFound(path.to_path_buf())),
        Err(e)      => Err(Error::Io { path: path.to_path_buf(), source: e }),
    }
}

/// Iterates over the non-blank lines of `input` together with their 1-based line numbers.
pub fn numbered_lines(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input.lines()
         .enumerate()
         .map(|(i, line)| (i+1, line.trim()))
         .filter(|(_, line)| !line.is_empty())
}

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum Neighbourhood {
    Orthogonal, // up, down, left, right
    Touching,   // orthogonal plus diagonals
}
impl Neighbourhood {
    pub fn offsets(&self) -> &'static [(isize, isize)] {
        match self {
            Neighbourhood::Orthogonal => &[(0, -1), (0, 1), (-1, 0), (1, 0)],
            Neighbourhood::Touching   => &[(-1, -1), (0, -1), (1, -1),
                                           (-1,  0),          (1,  0),
                                           (-1,  1), (0,  1), (1,  1)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::PathBuf;

    #[test]
    fn missing_input_is_file_not_found() {
        let path = PathBuf::from("no_such_day/input.txt");
        match read_input(&path) {
            Err(Error::FileNotFound(p)) => assert_eq!(p, path),
            other => panic!("expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn reads_existing_input() {
        let path = std::env::temp_dir().join(format!("advent2021-util-{}.txt", std::process::id()));
        fs::write(&path, "123\n456\n").unwrap();
        let contents = read_input(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(contents, "123\n456\n");
    }

    #[test]
    fn numbered_lines_skips_blanks_but_keeps_numbering() {
        let lines = numbered_lines("a\n\n  b  \n").collect::<Vec<_>>();
        assert_eq!(lines, vec![(1, "a"), (3, "b")]);
    }

    #[rstest]
    #[case(Neighbourhood::Orthogonal, 4)]
    #[case(Neighbourhood::Touching, 8)]
    fn offsets_are_distinct_and_exclude_origin(#[case] n: Neighbourhood, #[case] expected: usize) {
        let offsets = n.offsets();
        assert_eq!(offsets.len(), expected);
        assert!(!offsets.contains(&(0, 0)));
        for (i, a) in offsets.iter().enumerate() {
            assert!(offsets[i+1..].iter().all(|b| a != b));
        }
    }
}
