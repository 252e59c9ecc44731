// vim: set ai et ts=4 sts=4 sw=4:
use std::collections::HashSet;
use log::{debug, trace};

use super::Cavern;
use super::super::error::{Error, Result};
use super::super::grid::Location;
use super::super::util::Neighbourhood::Touching;

pub const FLASH_THRESHOLD: u32 = 10;
pub const SYNC_STEP_LIMIT: usize = 1_000_000;

impl Cavern {
    /// Advances one step and returns how many octopuses flashed during it.
    pub fn step(&mut self) -> usize {
        let mut flashed = HashSet::<Location>::new();
        let mut pending = Vec::<Location>::new();

        for loc in self.grid.locations().collect::<Vec<_>>() {
            if self._charge(loc) && flashed.insert(loc) {
                pending.push(loc);
            }
        }

        // each octopus flashes at most once per step, however often it is charged afterwards
        while let Some(loc) = pending.pop() {
            for n in self.grid.neighbours(loc, Touching) {
                if self._charge(n) && flashed.insert(n) {
                    pending.push(n);
                }
            }
        }

        for loc in flashed.iter() {
            *self.grid.get_mut(*loc) = 0;
        }

        self.steps += 1;
        trace!("step {}: {} flashes", self.steps, flashed.len());
        flashed.len()
    }

    fn _charge(&mut self, loc: Location) -> bool {
        let energy = self.grid.get_mut(loc);
        *energy += 1;
        *energy >= FLASH_THRESHOLD
    }

    /// Runs `steps` more steps and returns the flashes counted during them.
    pub fn run(&mut self, steps: usize) -> u64 {
        let flashes = (0..steps).map(|_| self.step() as u64).sum::<u64>();
        debug!("{} flashes in {} steps ({} steps total)", flashes, steps, self.steps);
        flashes
    }

    /// Steps until every octopus flashes during the same step, and returns that step's number.
    pub fn first_synchronized_step(&mut self) -> Result<usize> {
        let all = self.population();
        while self.steps < SYNC_STEP_LIMIT {
            if self.step() == all {
                debug!("all {} octopuses flashed in step {}", all, self.steps);
                return Ok(self.steps);
            }
        }
        Err(Error::NoSolution(format!("octopuses did not synchronize within {} steps", SYNC_STEP_LIMIT)))
    }
}
