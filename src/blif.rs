//! BLIF format support
//!
//! This module handles BLIF text I/O for [`Model`]. Reading happens in
//! two stages: a preprocessor folds physical lines into logical lines
//! (comment stripping, backslash continuation, blank-line removal), and
//! the directive dispatcher builds the model from logical lines.
//!
//! The accepted subset: `.model`, `.inputs`, `.outputs`, `.names` with
//! its cube rows, `.latch` and `.clock` (carried verbatim), `.end`.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use crate::cover::Cover;
use crate::error::{BlifError, BlifReadError, BlifWriteError};
use crate::model::{Gate, Model};

/// Fold physical lines into logical lines
///
/// Anything from an unescaped `#` to end-of-line is a comment. A trailing
/// backslash joins the next physical line with a single space. Blank
/// lines disappear.
pub(crate) fn preprocess<'a, I>(physical: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut logical = Vec::new();
    let mut pending = String::new();

    let mut push_segment = |pending: &mut String, segment: &str| {
        if !pending.is_empty() && !segment.is_empty() {
            pending.push(' ');
        }
        pending.push_str(segment);
    };

    for raw in physical {
        let stripped = strip_comment(raw).trim_end();
        if let Some(head) = stripped.strip_suffix('\\') {
            push_segment(&mut pending, head.trim());
            continue;
        }
        push_segment(&mut pending, stripped.trim());
        let line = std::mem::take(&mut pending);
        if !line.is_empty() {
            logical.push(line);
        }
    }
    if !pending.is_empty() {
        logical.push(pending);
    }
    logical
}

/// Truncate at the first `#` that is not preceded by a backslash
fn strip_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'#' && (i == 0 || bytes[i - 1] != b'\\') {
            return &line[..i];
        }
    }
    line
}

/// Internal trait for types that can be serialized to and deserialized
/// from BLIF format
///
/// This provides the accessors the writer needs and the constructor the
/// reader needs. It is the basis for the public `BlifReader` and
/// `BlifWriter` traits.
pub(crate) trait BlifSerialisable: Sized {
    // Read access (for serialization)

    /// Model name
    fn model_name(&self) -> &str;

    /// Global input labels
    fn input_labels(&self) -> &[Arc<str>];

    /// Global output labels
    fn output_labels(&self) -> &[Arc<str>];

    /// Gates in declaration order
    fn model_gates(&self) -> &[Gate];

    /// Verbatim latch token lists
    fn latch_lines(&self) -> &[Vec<String>];

    /// Verbatim clock token lists
    fn clock_lines(&self) -> &[Vec<String>];

    // Constructor (for deserialization)

    /// Create an instance from parsed BLIF components
    fn create_from_blif_parts(
        name: String,
        inputs: Vec<Arc<str>>,
        outputs: Vec<Arc<str>>,
        gates: Vec<Gate>,
        latches: Vec<Vec<String>>,
        clocks: Vec<Vec<String>>,
    ) -> Self;
}

impl BlifSerialisable for Model {
    fn model_name(&self) -> &str {
        self.name()
    }

    fn input_labels(&self) -> &[Arc<str>] {
        self.inputs()
    }

    fn output_labels(&self) -> &[Arc<str>] {
        self.outputs()
    }

    fn model_gates(&self) -> &[Gate] {
        self.gates()
    }

    fn latch_lines(&self) -> &[Vec<String>] {
        self.latches()
    }

    fn clock_lines(&self) -> &[Vec<String>] {
        self.clocks()
    }

    fn create_from_blif_parts(
        name: String,
        inputs: Vec<Arc<str>>,
        outputs: Vec<Arc<str>>,
        gates: Vec<Gate>,
        latches: Vec<Vec<String>>,
        clocks: Vec<Vec<String>>,
    ) -> Self {
        Model::new(name, inputs, outputs, gates, latches, clocks)
    }
}

/// Trait for types that support BLIF serialization (writing)
///
/// Automatically implemented for all types that implement
/// `BlifSerialisable`.
pub trait BlifWriter {
    /// Write this model in BLIF format using a writer
    ///
    /// This is the core serialization method; `to_blif_string` and
    /// `to_blif_file` delegate to it.
    fn write_blif<W: Write>(&self, writer: &mut W) -> Result<(), BlifWriteError>;

    /// Serialize to a BLIF format string
    fn to_blif_string(&self) -> Result<String, BlifWriteError> {
        let mut buffer = Vec::new();
        self.write_blif(&mut buffer)?;
        // BLIF format is ASCII, so this conversion is safe
        Ok(String::from_utf8(buffer).unwrap())
    }

    /// Write to a BLIF file
    fn to_blif_file<P: AsRef<Path>>(&self, path: P) -> Result<(), BlifWriteError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_blif(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Blanket implementation of BlifWriter for all BlifSerialisable types
impl<T: BlifSerialisable> BlifWriter for T {
    fn write_blif<W: Write>(&self, writer: &mut W) -> Result<(), BlifWriteError> {
        writeln!(writer, ".model {}", self.model_name())?;

        write!(writer, ".inputs")?;
        for label in self.input_labels() {
            write!(writer, " {}", label)?;
        }
        writeln!(writer)?;

        write!(writer, ".outputs")?;
        for label in self.output_labels() {
            write!(writer, " {}", label)?;
        }
        writeln!(writer)?;

        for gate in self.model_gates() {
            write!(writer, ".names")?;
            for label in gate.inputs() {
                write!(writer, " {}", label)?;
            }
            writeln!(writer, " {}", gate.output())?;
            for cube in gate.cover().cubes() {
                writeln!(writer, "{}", cube)?;
            }
        }

        for latch in self.latch_lines() {
            write!(writer, ".latch")?;
            for token in latch {
                write!(writer, " {}", token)?;
            }
            writeln!(writer)?;
        }
        for clock in self.clock_lines() {
            write!(writer, ".clock")?;
            for token in clock {
                write!(writer, " {}", token)?;
            }
            writeln!(writer)?;
        }

        writeln!(writer, ".end")?;
        Ok(())
    }
}

/// Trait for types that support BLIF deserialization (reading)
///
/// Automatically implemented for all types that implement
/// `BlifSerialisable`. The convenience methods delegate to the core
/// `from_blif_reader` method.
pub trait BlifReader: Sized {
    /// Parse from a BLIF format reader
    fn from_blif_reader<R: BufRead>(reader: R) -> Result<Self, BlifReadError>;

    /// Parse from a BLIF format string
    ///
    /// ```
    /// use blifmin::{BlifReader, Model};
    ///
    /// let text = ".model and2\n.inputs a b\n.outputs y\n.names a b y\n11 1\n.end\n";
    /// let model = Model::from_blif_string(text).unwrap();
    /// assert_eq!(model.name(), "and2");
    /// assert_eq!(model.gates().len(), 1);
    /// ```
    fn from_blif_string(s: &str) -> Result<Self, BlifReadError> {
        use std::io::Cursor;
        let cursor = Cursor::new(s.as_bytes());
        Self::from_blif_reader(cursor)
    }

    /// Load from a BLIF file
    fn from_blif_file<P: AsRef<Path>>(path: P) -> Result<Self, BlifReadError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Self::from_blif_reader(reader)
    }
}

/// Blanket implementation of BlifReader for all BlifSerialisable types
impl<T: BlifSerialisable> BlifReader for T {
    fn from_blif_reader<R: BufRead>(reader: R) -> Result<Self, BlifReadError> {
        let physical: Vec<String> = reader.lines().collect::<io::Result<Vec<_>>>()?;
        let lines = preprocess(physical.iter().map(String::as_str));

        let mut name: Option<String> = None;
        let mut inputs: Vec<Arc<str>> = Vec::new();
        let mut outputs: Vec<Arc<str>> = Vec::new();
        let mut gates: Vec<Gate> = Vec::new();
        let mut latches: Vec<Vec<String>> = Vec::new();
        let mut clocks: Vec<Vec<String>> = Vec::new();

        // The .names block currently being filled, if any
        let mut current: Option<(Vec<Arc<str>>, Arc<str>, Cover)> = None;

        fn flush(
            current: &mut Option<(Vec<Arc<str>>, Arc<str>, Cover)>,
            gates: &mut Vec<Gate>,
        ) {
            if let Some((ins, out, cover)) = current.take() {
                gates.push(Gate::new(ins, out, cover));
            }
        }

        for line in lines {
            let mut tokens = line.split_whitespace();
            let first = tokens.next().unwrap_or("");

            if !first.starts_with('.') {
                match current.as_mut() {
                    Some((_, _, cover)) => cover.add_row(&line)?,
                    None => return Err(BlifError::RowOutsideGate { line }.into()),
                }
                continue;
            }

            match first {
                ".model" => {
                    let payload = tokens.next().ok_or_else(|| BlifError::MalformedDirective {
                        line: line.clone(),
                    })?;
                    name = Some(payload.to_string());
                }
                ".inputs" => inputs.extend(tokens.map(Arc::from)),
                ".outputs" => outputs.extend(tokens.map(Arc::from)),
                ".names" => {
                    flush(&mut current, &mut gates);
                    let labels: Vec<Arc<str>> = tokens.map(Arc::from).collect();
                    let output = labels.last().cloned().ok_or_else(|| {
                        BlifError::MalformedDirective { line: line.clone() }
                    })?;
                    let gate_inputs = labels[..labels.len() - 1].to_vec();
                    let cover = Cover::new(gate_inputs.len());
                    current = Some((gate_inputs, output, cover));
                }
                ".latch" => {
                    flush(&mut current, &mut gates);
                    latches.push(tokens.map(str::to_string).collect());
                }
                ".clock" => {
                    flush(&mut current, &mut gates);
                    clocks.push(tokens.map(str::to_string).collect());
                }
                ".end" => {
                    flush(&mut current, &mut gates);
                    break;
                }
                _ => return Err(BlifError::UnknownDirective { line }.into()),
            }
        }
        flush(&mut current, &mut gates);

        let name = name.ok_or(BlifError::MissingModel)?;
        Ok(T::create_from_blif_parts(
            name, inputs, outputs, gates, latches, clocks,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preprocess_discards_comments_and_blanks() {
        let physical = vec![
            "# full-line comment",
            "",
            ".model demo  # trailing comment",
            "   ",
            ".end",
        ];
        assert_eq!(preprocess(physical), vec![".model demo", ".end"]);
    }

    #[test]
    fn test_preprocess_joins_continuations_with_one_space() {
        let physical = vec![".inputs a\\", "b\\", "c d", ".end"];
        assert_eq!(preprocess(physical), vec![".inputs a b c d", ".end"]);
    }

    #[test]
    fn test_preprocess_continuation_at_eof() {
        let physical = vec![".inputs a\\", "b\\"];
        assert_eq!(preprocess(physical), vec![".inputs a b"]);
    }

    #[test]
    fn test_preprocess_escaped_hash_is_not_a_comment() {
        let physical = vec![".model net\\#1 rest"];
        assert_eq!(preprocess(physical), vec![".model net\\#1 rest"]);
    }

    #[test]
    fn test_preprocess_comment_swallows_continuation_marker() {
        // The backslash is part of the comment, so no continuation happens
        let physical = vec![".inputs a # note \\", ".outputs y"];
        assert_eq!(preprocess(physical), vec![".inputs a", ".outputs y"]);
    }

    #[test]
    fn test_strip_comment_at_line_start() {
        assert_eq!(strip_comment("# everything"), "");
        assert_eq!(strip_comment("a b # c"), "a b ");
        assert_eq!(strip_comment("plain"), "plain");
    }
}
