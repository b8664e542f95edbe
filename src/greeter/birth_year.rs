//! Birth-year calculator
//!
//! Keeps asking for an age until a non-negative integer arrives, then prints
//! the year the user was born. End of input stops the loop with
//! [`GreeterError::InputClosed`].

use std::io::{BufRead, Write};

use chrono::Datelike;

use crate::error::{AgeError, GreeterError, GreeterResult};
use crate::prompt::Prompter;

const AGE_PROMPT: &str = "What's your age? ";

/// Current calendar year from the local clock
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Parse an age answer
///
/// Surrounding whitespace is ignored. A leading sign is accepted, so `-0`
/// is a valid age of zero.
pub fn parse_age(input: &str) -> Result<i64, AgeError> {
    let age: i64 = input.trim().parse().map_err(|_| AgeError::Parse)?;
    if age < 0 {
        return Err(AgeError::Negative);
    }
    Ok(age)
}

/// Year of birth for `age` in `current_year`
pub fn birth_year(current_year: i32, age: i64) -> i64 {
    i64::from(current_year) - age
}

/// Ask for an age until valid and print `"You were born in {year}."`
///
/// Each rejected answer prints its validation message and asks again, with
/// no retry limit. Returns the computed birth year.
pub fn ask_birth_year<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    current_year: i32,
) -> GreeterResult<i64> {
    loop {
        let Some(answer) = prompter.ask(AGE_PROMPT)? else {
            return Err(GreeterError::InputClosed("an age"));
        };

        match parse_age(&answer) {
            Ok(age) => {
                let year = birth_year(current_year, age);
                prompter.say(&format!("You were born in {}.", year))?;
                return Ok(year);
            }
            Err(err) => {
                tracing::debug!(input = %answer, reason = ?err, "Rejected age input");
                prompter.say(&err.to_string())?;
            }
        }
    }
}
