// Routines that take a live cursor instead of opening their own

use varg_runtime::{Activation, Cursor};

use crate::interpreter::Interpreter;
use crate::sink::Sink;
use crate::RenderError;

/// Render `template` through a cursor owned by the caller.
///
/// The cursor is only borrowed: whatever this routine extracts stays
/// extracted when it returns, and the caller remains responsible for
/// releasing the cursor.
pub fn vprint<S: Sink + ?Sized>(
    interpreter: &Interpreter,
    sink: &mut S,
    template: &str,
    args: &mut Cursor<'_>,
) -> Result<(), RenderError> {
    interpreter.render(template, args, sink)
}

/// Open a cursor over `va` and hand it to [`vprint`]
pub fn call_vprint<S: Sink + ?Sized>(
    interpreter: &Interpreter,
    sink: &mut S,
    template: &str,
    va: &Activation,
) -> Result<(), RenderError> {
    let mut args = va.start();
    vprint(interpreter, sink, template, &mut args)?;
    args.close();
    Ok(())
}
