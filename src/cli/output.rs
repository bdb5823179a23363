//! Output formatting for the parameter index
//!
//! JSON is the canonical format: 4-space indentation, map keys in the order
//! they were first seen, everything outside printable ASCII written as `\uXXXX`
//! escapes (UTF-16 surrogate pairs above the BMP). YAML renders the same
//! structure as plain UTF-8.

use crate::error::OutputError;
use crate::params::TestParams;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

const JSON_INDENT: &[u8] = b"    ";

/// Pretty printer that keeps the output pure ASCII
struct AsciiPrettyFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl<'a> AsciiPrettyFormatter<'a> {
    fn with_indent(indent: &'a [u8]) -> Self {
        Self {
            inner: PrettyFormatter::with_indent(indent),
        }
    }
}

impl Formatter for AsciiPrettyFormatter<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }

    // quotes, backslashes and control characters never reach this point
    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if (c as u32) < 0x7f {
                writer.write_all(&[c as u8])?;
            } else {
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, params: &TestParams) -> Result<String, OutputError> {
        match self.format {
            OutputFormat::Json => self.format_json(params),
            OutputFormat::Yaml => self.format_yaml(params),
        }
    }

    /// Renders `params` and writes them to `path`, replacing any existing file
    pub fn write_to(&self, path: &Path, params: &TestParams) -> Result<(), OutputError> {
        let rendered = self.format(params)?;
        fs::write(path, rendered).map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    fn format_json(&self, params: &TestParams) -> Result<String, OutputError> {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(
            &mut buf,
            AsciiPrettyFormatter::with_indent(JSON_INDENT),
        );
        params.serialize(&mut ser)?;
        // escaped output is ASCII
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn format_yaml(&self, params: &TestParams) -> Result<String, OutputError> {
        Ok(serde_yaml::to_string(params)?)
    }
}
