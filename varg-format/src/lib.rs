// varg-format - Simplified formatted output over variadic cursors
// Interprets `%d`/`%i`, `%f` and `%s` templates against an argument cursor

pub mod config;
pub mod forward;
pub mod interpreter;
pub mod sink;

pub use config::{Config, FloatNotation, FloatStyle, MalformedPolicy};
pub use forward::{call_vprint, vprint};
pub use interpreter::{placeholders, Directive, Directives, Interpreter};
pub use sink::{Piece, Sink, StringSink, WriteSink};

use std::io;
use thiserror::Error;
use varg_runtime::{Activation, VarargError};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Args(#[from] VarargError),

    #[error("Sink write failed: {0}")]
    Sink(#[from] io::Error),
}

/// Render `template` against the trailing arguments of `va`
pub fn print<S: Sink + ?Sized>(
    interpreter: &Interpreter,
    sink: &mut S,
    template: &str,
    va: &Activation,
) -> Result<(), RenderError> {
    let mut args = va.start();
    interpreter.render(template, &mut args, sink)
}

/// Render `template` twice: once through a cursor and once through a
/// duplicate taken before the first rendering
pub fn print_copied<S: Sink + ?Sized>(
    interpreter: &Interpreter,
    sink: &mut S,
    template: &str,
    va: &Activation,
) -> Result<(), RenderError> {
    let mut ap = va.start();
    let mut aq = ap.duplicate();
    vprint(interpreter, sink, template, &mut ap)?;
    vprint(interpreter, sink, template, &mut aq)?;
    aq.close();
    ap.close();
    Ok(())
}

/// Render `template`, restart the cursor and render it again
pub fn print_restarted<S: Sink + ?Sized>(
    interpreter: &Interpreter,
    sink: &mut S,
    template: &str,
    va: &Activation,
) -> Result<(), RenderError> {
    let mut ap = va.start();
    vprint(interpreter, sink, template, &mut ap)?;
    ap.restart(va)?;
    vprint(interpreter, sink, template, &mut ap)?;
    Ok(())
}

/// Render into a `String` using the interpreter and float style of `config`
pub fn render_to_string(
    config: &Config,
    template: &str,
    va: &Activation,
) -> Result<String, RenderError> {
    let mut sink = StringSink::with_float_style(config.float_style());
    print(&Interpreter::from_config(config), &mut sink, template, va)?;
    Ok(sink.into_string())
}

/// Render with the default configuration
pub fn render_with_defaults(template: &str, va: &Activation) -> Result<String, RenderError> {
    render_to_string(&Config::default(), template, va)
}
