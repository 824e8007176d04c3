//! Headless gesture scripts.
//!
//! A script is a line-oriented list of editor events that can be replayed
//! against an [`EditorState`] without a window:
//!
//! ```text
//! // draw a red square outline, then undo it
//! tool rect
//! color #ff0000
//! width 3
//! drag 10 10 60 60
//! key Ctrl+Z
//! export out/square.png
//! ```
//!
//! Blank lines and lines starting with `//` are ignored.

use crate::config::KeyBinding;
use crate::draw::CanvasError;
use crate::export::{self, ExportError};
use crate::input::{EditorState, Key, MouseButton, Tool};
use log::{debug, info};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while parsing or replaying a script.
///
/// Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("line {line}: {source}")]
    Canvas {
        line: usize,
        #[source]
        source: CanvasError,
    },

    #[error("line {line}: {source}")]
    Export {
        line: usize,
        #[source]
        source: ExportError,
    },
}

/// A single replayable editor event.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptStep {
    Tool(Tool),
    Color(String),
    Width(u32),
    Fill(bool),
    Down { x: i32, y: i32 },
    Move { x: i32, y: i32 },
    Up { x: i32, y: i32 },
    /// Press at the first point, move to and release at the second
    Drag { from: (i32, i32), to: (i32, i32) },
    /// Key press with modifiers held, as in "Ctrl+Z"
    Key { key: Key, ctrl: bool, shift: bool, alt: bool },
    Undo,
    Redo,
    Clear,
    Resize { width: u32, height: u32 },
    Abort,
    /// Write a PNG to the given path, or request an export to the
    /// configured directory when no path is given
    Export(Option<PathBuf>),
}

/// A parsed script: steps paired with their source line numbers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    steps: Vec<(usize, ScriptStep)>,
}

impl Script {
    /// Parses script text.
    ///
    /// # Errors
    /// [`ScriptError::Parse`] for the first malformed line.
    pub fn parse(text: &str) -> Result<Self, ScriptError> {
        let mut steps = Vec::new();
        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with("//") {
                continue;
            }
            let step = parse_step(trimmed).map_err(|message| ScriptError::Parse { line, message })?;
            steps.push((line, step));
        }
        debug!("Parsed script with {} steps", steps.len());
        Ok(Self { steps })
    }

    pub fn steps(&self) -> impl Iterator<Item = &ScriptStep> {
        self.steps.iter().map(|(_, step)| step)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Replays every step against `state`.
    ///
    /// Replay stops early once the editor asks to exit. Pathless `export`
    /// steps only raise the editor's export request; the caller decides
    /// where those go.
    ///
    /// # Returns
    /// Paths written by `export <path>` steps, in order
    ///
    /// # Errors
    /// The first canvas or export failure, tagged with its line. Steps before
    /// it have already been applied.
    pub fn run(&self, state: &mut EditorState) -> Result<Vec<PathBuf>, ScriptError> {
        let mut written = Vec::new();
        for (line, step) in &self.steps {
            let line = *line;
            apply_step(state, step, &mut written).map_err(|err| match err {
                StepError::Canvas(source) => ScriptError::Canvas { line, source },
                StepError::Export(source) => ScriptError::Export { line, source },
            })?;

            if state.should_exit {
                info!("Exit requested at line {line}, stopping replay");
                break;
            }
        }
        Ok(written)
    }
}

impl FromStr for Script {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

enum StepError {
    Canvas(CanvasError),
    Export(ExportError),
}

impl From<CanvasError> for StepError {
    fn from(err: CanvasError) -> Self {
        StepError::Canvas(err)
    }
}

impl From<ExportError> for StepError {
    fn from(err: ExportError) -> Self {
        StepError::Export(err)
    }
}

fn apply_step(
    state: &mut EditorState,
    step: &ScriptStep,
    written: &mut Vec<PathBuf>,
) -> Result<(), StepError> {
    match step {
        ScriptStep::Tool(tool) => state.set_tool(*tool),
        ScriptStep::Color(color) => state.set_color(color)?,
        ScriptStep::Width(width) => state.set_stroke_width(*width),
        ScriptStep::Fill(enabled) => state.set_fill_enabled(*enabled),
        ScriptStep::Down { x, y } => state.on_mouse_press(MouseButton::Left, *x, *y)?,
        ScriptStep::Move { x, y } => state.on_mouse_motion(*x, *y),
        ScriptStep::Up { x, y } => state.on_mouse_release(MouseButton::Left, *x, *y),
        ScriptStep::Drag { from, to } => {
            state.on_mouse_press(MouseButton::Left, from.0, from.1)?;
            state.on_mouse_motion(to.0, to.1);
            state.on_mouse_release(MouseButton::Left, to.0, to.1);
        }
        ScriptStep::Key {
            key,
            ctrl,
            shift,
            alt,
        } => {
            let held: Vec<Key> = [(*ctrl, Key::Ctrl), (*shift, Key::Shift), (*alt, Key::Alt)]
                .into_iter()
                .filter_map(|(on, modifier)| on.then_some(modifier))
                .collect();
            for modifier in &held {
                state.on_key_press(*modifier);
            }
            state.on_key_press(*key);
            state.on_key_release(*key);
            for modifier in held.iter().rev() {
                state.on_key_release(*modifier);
            }
        }
        ScriptStep::Undo => {
            state.undo();
        }
        ScriptStep::Redo => {
            state.redo();
        }
        ScriptStep::Clear => state.clear(),
        ScriptStep::Resize { width, height } => state.resize(*width, *height)?,
        ScriptStep::Abort => state.abort_gesture(),
        ScriptStep::Export(Some(path)) => {
            written.push(export::save_png(state.buffer(), path)?);
        }
        ScriptStep::Export(None) => state.request_export(),
    }
    Ok(())
}

fn parse_step(line: &str) -> Result<ScriptStep, String> {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or_default().to_lowercase();
    let args: Vec<&str> = parts.collect();

    let step = match command.as_str() {
        "tool" => ScriptStep::Tool(single(&args)?.parse()?),
        "color" | "colour" => ScriptStep::Color(single(&args)?.to_string()),
        "width" => ScriptStep::Width(number(single(&args)?)?),
        "fill" => ScriptStep::Fill(switch(single(&args)?)?),
        "down" => {
            let [x, y] = numbers(&args)?;
            ScriptStep::Down { x, y }
        }
        "move" => {
            let [x, y] = numbers(&args)?;
            ScriptStep::Move { x, y }
        }
        "up" => {
            let [x, y] = numbers(&args)?;
            ScriptStep::Up { x, y }
        }
        "drag" => {
            let [x0, y0, x1, y1] = numbers(&args)?;
            ScriptStep::Drag {
                from: (x0, y0),
                to: (x1, y1),
            }
        }
        "key" => {
            let binding = KeyBinding::parse(&args.join(" "))?;
            let key = Key::from_name(&binding.key);
            if key == Key::Unknown {
                return Err(format!("Unknown key '{}'", binding.key));
            }
            ScriptStep::Key {
                key,
                ctrl: binding.ctrl,
                shift: binding.shift,
                alt: binding.alt,
            }
        }
        "undo" => no_args(&args, ScriptStep::Undo)?,
        "redo" => no_args(&args, ScriptStep::Redo)?,
        "clear" => no_args(&args, ScriptStep::Clear)?,
        "abort" => no_args(&args, ScriptStep::Abort)?,
        "resize" => {
            let [width, height] = numbers(&args)?;
            ScriptStep::Resize { width, height }
        }
        "export" => match args.as_slice() {
            [] => ScriptStep::Export(None),
            [path] => ScriptStep::Export(Some(export::expand_tilde(path))),
            _ => return Err("export takes at most one path".to_string()),
        },
        other => return Err(format!("Unknown command '{}'", other)),
    };
    Ok(step)
}

fn single<'a>(args: &[&'a str]) -> Result<&'a str, String> {
    match args {
        [value] => Ok(value),
        _ => Err(format!("Expected 1 argument, got {}", args.len())),
    }
}

fn no_args(args: &[&str], step: ScriptStep) -> Result<ScriptStep, String> {
    if args.is_empty() {
        Ok(step)
    } else {
        Err(format!("Unexpected arguments: {}", args.join(" ")))
    }
}

fn number<T: FromStr>(value: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("Invalid number '{}'", value))
}

fn numbers<T: FromStr, const N: usize>(args: &[&str]) -> Result<[T; N], String> {
    if args.len() != N {
        return Err(format!("Expected {} arguments, got {}", N, args.len()));
    }
    let parsed = args
        .iter()
        .map(|arg| number(arg))
        .collect::<Result<Vec<T>, String>>()?;
    parsed
        .try_into()
        .map_err(|_| format!("Expected {} arguments", N))
}

fn switch(value: &str) -> Result<bool, String> {
    match value.to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        other => Err(format!("Expected on/off, got '{}'", other)),
    }
}
