//! `help` — print the command list, then enter a sub-loop describing one
//! command at a time until the user types `end`.
//!
//! The prompt text is fixed literal Russian strings that are part of the
//! user-visible contract and must not be altered.

use crate::console::{Console, ReplayConsole};
use crate::error::CalcError;

const INTRO: &str = "Укажите команду, для которой хотите посмотреть помощь";
const COMMAND_LIST: &str = "Доступные команды: add, median, rand";
const EXIT_HINT: &str = "Чтобы выйти из режима помощи введите end";
const UNKNOWN: &str = "Такой команды нет";

pub fn run<C: Console>(console: &mut ReplayConsole<C>) -> Result<(), CalcError> {
    console.write_line(INTRO)?;
    console.write_line(COMMAND_LIST)?;
    console.write_line(EXIT_HINT)?;

    loop {
        let line = console.read_line()?;
        match line.trim() {
            "end" => return Ok(()),
            "add" => {
                console.write_line("Вычисляет сумму двух чисел")?;
                console.write_line(EXIT_HINT)?;
            }
            "median" => {
                console.write_line("Вычисляет медиану списка чисел")?;
                console.write_line(EXIT_HINT)?;
            }
            "rand" => {
                console.write_line("Генерирует список случайных чисел")?;
                console.write_line(EXIT_HINT)?;
            }
            _ => {
                console.write_line(UNKNOWN)?;
                console.write_line(COMMAND_LIST)?;
                console.write_line(EXIT_HINT)?;
            }
        }
    }
}
