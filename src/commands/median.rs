//! `median` — read a count `n`, then `n` integers, write the median.

use super::read_number;
use crate::console::{Console, ReplayConsole};
use crate::error::CalcError;

pub fn run<C: Console>(console: &mut ReplayConsole<C>) -> Result<(), CalcError> {
    let n = read_number(console)?;
    let count = n.max(0) as usize;
    let mut nums = Vec::with_capacity(count);
    for _ in 0..count {
        nums.push(read_number(console)?);
    }
    console.write_line(&format_median(&nums))?;
    Ok(())
}

/// Sort `nums` ascending and format the median: `0` for an empty list, the
/// middle element for an odd count, and the arithmetic mean of the two
/// middle elements for an even count — an invariant decimal with a dot
/// separator, no trailing `.0` on whole halves.
fn format_median(nums: &[i64]) -> String {
    if nums.is_empty() {
        return "0".to_string();
    }
    let mut sorted = nums.to_vec();
    sorted.sort_unstable();
    let len = sorted.len();
    if len % 2 == 1 {
        sorted[len / 2].to_string()
    } else {
        let sum = sorted[len / 2 - 1] + sorted[len / 2];
        let half = sum as f64 / 2.0;
        if sum % 2 == 0 {
            (sum / 2).to_string()
        } else {
            half.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SessionState;
    use crate::testutil::{MemStorage, ScriptedConsole};

    fn run_with(inputs: &[&str]) -> String {
        let mut state = SessionState::default();
        let mut storage = MemStorage::default();
        let mut inner = ScriptedConsole::with_inputs(inputs.to_vec());
        let mut console = ReplayConsole::new(&mut inner, &mut state, &mut storage);
        run(&mut console).unwrap();
        console.inner.outputs()[0].clone()
    }

    #[test]
    fn odd_count_picks_the_middle_element() {
        assert_eq!(run_with(&["3", "10", "1", "100"]), "10");
    }

    #[test]
    fn even_count_averages_the_two_middle_elements() {
        assert_eq!(run_with(&["4", "1", "2", "3", "4"]), "2.5");
    }

    #[test]
    fn even_count_with_whole_average_has_no_trailing_zero() {
        assert_eq!(run_with(&["2", "1", "3"]), "2");
    }

    #[test]
    fn zero_count_writes_zero() {
        assert_eq!(run_with(&["0"]), "0");
    }

    #[test]
    fn negative_count_is_treated_as_zero() {
        assert_eq!(run_with(&["-1"]), "0");
    }

    #[test]
    fn pure_function_sorts_before_taking_the_middle() {
        assert_eq!(format_median(&[100, 1, 10]), "10");
    }
}
