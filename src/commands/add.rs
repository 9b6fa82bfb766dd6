//! `add` — read two integers, write their sum.

use super::read_number;
use crate::console::{Console, ReplayConsole};
use crate::error::CalcError;

pub fn run<C: Console>(console: &mut ReplayConsole<C>) -> Result<(), CalcError> {
    let a = read_number(console)?;
    let b = read_number(console)?;
    console.write_line(&(a + b).to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SessionState;
    use crate::testutil::{MemStorage, ScriptedConsole};

    #[test]
    fn sums_two_numbers() {
        let mut state = SessionState::default();
        let mut storage = MemStorage::default();
        let mut inner = ScriptedConsole::with_inputs(["2", "3"]);
        let mut console = ReplayConsole::new(&mut inner, &mut state, &mut storage);
        run(&mut console).unwrap();
        assert_eq!(console.inner.outputs(), &["5".to_string()]);
    }

    #[test]
    fn sums_negative_numbers() {
        let mut state = SessionState::default();
        let mut storage = MemStorage::default();
        let mut inner = ScriptedConsole::with_inputs(["-7", "2"]);
        let mut console = ReplayConsole::new(&mut inner, &mut state, &mut storage);
        run(&mut console).unwrap();
        assert_eq!(console.inner.outputs(), &["-5".to_string()]);
    }
}
