// Output sinks: render one literal character or one typed value

use std::fmt;
use std::io::{self, Write};

use crate::config::FloatStyle;

/// One unit handed to a sink: a literal template character or an
/// already-extracted value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Piece<'a> {
    Char(char),
    Int(i64),
    Double(f64),
    Text(&'a str),
}

/// Consumer of rendered pieces
pub trait Sink {
    fn emit(&mut self, piece: Piece<'_>) -> io::Result<()>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn emit(&mut self, piece: Piece<'_>) -> io::Result<()> {
        (**self).emit(piece)
    }
}

fn write_piece<W: fmt::Write>(out: &mut W, piece: Piece<'_>, float_style: FloatStyle) -> fmt::Result {
    match piece {
        Piece::Char(ch) => out.write_char(ch),
        Piece::Int(v) => write!(out, "{}", v),
        Piece::Double(v) => match float_style {
            FloatStyle::Shortest => write!(out, "{}", v),
            FloatStyle::Fixed { precision } => write!(out, "{:.*}", precision, v),
        },
        Piece::Text(s) => out.write_str(s),
    }
}

fn render_error(_: fmt::Error) -> io::Error {
    io::Error::new(io::ErrorKind::Other, "failed to render piece")
}

/// Sink over any `io::Write` (stdout, files, buffers)
pub struct WriteSink<W: Write> {
    out: W,
    float_style: FloatStyle,
    scratch: String,
}

impl<W: Write> WriteSink<W> {
    pub fn new(out: W) -> Self {
        Self::with_float_style(out, FloatStyle::default())
    }

    pub fn with_float_style(out: W, float_style: FloatStyle) -> Self {
        Self {
            out,
            float_style,
            scratch: String::new(),
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Sink for WriteSink<W> {
    fn emit(&mut self, piece: Piece<'_>) -> io::Result<()> {
        self.scratch.clear();
        write_piece(&mut self.scratch, piece, self.float_style).map_err(render_error)?;
        self.out.write_all(self.scratch.as_bytes())
    }
}

/// In-memory sink collecting output into a `String`
#[derive(Debug, Default)]
pub struct StringSink {
    buf: String,
    float_style: FloatStyle,
}

impl StringSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_float_style(float_style: FloatStyle) -> Self {
        Self {
            buf: String::new(),
            float_style,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

impl Sink for StringSink {
    fn emit(&mut self, piece: Piece<'_>) -> io::Result<()> {
        write_piece(&mut self.buf, piece, self.float_style).map_err(render_error)
    }
}
