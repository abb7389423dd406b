//! Scripted input: replays a move string through the input layer

use anyhow::{Context, Result, bail};
use plato_core::entity::{InputState, InteractTool, Tool};
use plato_core::render::RenderGateway;
use plato_core::world::WindowStreamer;

/// One scripted action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Press and release a movement key (`KeyboardEvent.code` naming)
    Key(&'static str),
    /// Click the cell at the window center
    Interact,
}

/// Counts collected while replaying a script
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScriptReport {
    pub moves: usize,
    pub blocked: usize,
    pub edits: usize,
    pub rejected: usize,
}

/// Parse `w a s d` moves and `x` clicks. Whitespace is ignored.
pub fn parse_script(script: &str) -> Result<Vec<Step>> {
    let mut steps = Vec::with_capacity(script.len());
    for (index, c) in script.chars().enumerate() {
        let step = match c.to_ascii_lowercase() {
            'w' => Step::Key("KeyW"),
            'a' => Step::Key("KeyA"),
            's' => Step::Key("KeyS"),
            'd' => Step::Key("KeyD"),
            'x' => Step::Interact,
            c if c.is_whitespace() => continue,
            _ => bail!("Unknown move '{}' at position {}", c, index),
        };
        steps.push(step);
    }
    Ok(steps)
}

/// Replay `steps`, calling `on_step` after each one
pub fn run_script<G: RenderGateway>(
    streamer: &mut WindowStreamer<G>,
    steps: &[Step],
    mut on_step: impl FnMut(&WindowStreamer<G>),
) -> Result<ScriptReport> {
    let mut input = InputState::new();
    let mut report = ScriptReport::default();

    for step in steps {
        match *step {
            Step::Key(code) => {
                input.key_down(code);
                if let Some(direction) = input.current_direction() {
                    match streamer.slide(direction) {
                        Some(_) => report.moves += 1,
                        None => report.blocked += 1,
                    }
                }
                input.key_up(code);
            }
            Step::Interact => {
                let target = streamer.center_position();
                input.pointer = Some(target);
                let outcome = InteractTool
                    .apply(streamer, target)
                    .context("Failed to interact with the center cell")?;
                if outcome.is_applied() {
                    report.edits += 1;
                } else {
                    report.rejected += 1;
                }
            }
        }
        on_step(streamer);
    }

    log::info!(
        "Script done: {} moves, {} blocked, {} edits",
        report.moves,
        report.blocked,
        report.edits
    );
    Ok(report)
}
