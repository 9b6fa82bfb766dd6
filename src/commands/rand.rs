//! `rand` — read a count, emit that many pseudo-random numbers from the
//! Park–Miller LCG, and return the generator's final state so the caller
//! can persist it as the next `last_random_number`.

use super::read_number;
use crate::console::{Console, ReplayConsole};
use crate::error::CalcError;
use crate::rng;

pub fn run<C: Console>(console: &mut ReplayConsole<C>, seed: i64) -> Result<i64, CalcError> {
    let count = read_number(console)?;
    let mut x = seed;
    for _ in 0..count.max(0) {
        console.write_line(&x.to_string())?;
        x = rng::next(x);
    }
    Ok(x)
}
