//! Named greeter
//!
//! Asks for a name and prints it behind a randomly chosen emoji marker.

use std::io::{BufRead, Write};

use rand::rngs::{StdRng, ThreadRng};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::GreeterResult;
use crate::prompt::Prompter;

/// Decorative markers, in selection order
pub const MARKERS: [&str; 10] = [
    "👋", "😊", "🎉", "🌟", "✨", "🙌", "😄", "🌈", "🚀", "🤗",
];

/// Name used when the answer is blank
pub const FALLBACK_NAME: &str = "friend";

const NAME_PROMPT: &str = "What's your name? ";

/// Source of the marker placed in front of a greeting
pub trait MarkerSource {
    /// Choose one of `markers`
    fn pick(&mut self, markers: &[&'static str]) -> &'static str;
}

/// Uniform random choice backed by any `rand` generator
pub struct RandomMarkers<R> {
    rng: R,
}

impl RandomMarkers<ThreadRng> {
    /// Markers drawn from the thread-local generator
    pub fn thread() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl RandomMarkers<StdRng> {
    /// Reproducible markers for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> MarkerSource for RandomMarkers<R> {
    fn pick(&mut self, markers: &[&'static str]) -> &'static str {
        markers.choose(&mut self.rng).copied().unwrap_or_default()
    }
}

/// Resolve the name to greet from a raw answer
pub fn resolve_name(answer: Option<&str>) -> &str {
    match answer.map(str::trim) {
        Some(name) if !name.is_empty() => name,
        _ => FALLBACK_NAME,
    }
}

/// Ask for a name and print `"{marker} Hello, {name}!"`
///
/// End of input is treated like a blank answer. Returns the printed line
/// without its newline.
pub fn greet_by_name<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    markers: &mut dyn MarkerSource,
) -> GreeterResult<String> {
    let answer = prompter.ask(NAME_PROMPT)?;
    let name = resolve_name(answer.as_deref());
    let marker = markers.pick(&MARKERS);

    let line = format!("{} Hello, {}!", marker, name);
    prompter.say(&line)?;
    Ok(line)
}
