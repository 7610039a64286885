//! A drain that writes rendered lines.

use std::{
    fmt,
    io::{self, Write},
    sync::Mutex,
};

use ::slog::{Drain, Key, OwnedKVList, Record, SerdeValue, Serializer, KV};

use crate::{
    fields::{SensitiveData, SENSITIVE_DATA_KEY},
    render::render_line,
};

/// Writes each record as `[sensitive_data={...}] <message>` plus a newline.
///
/// The mapping is read from the record's `sensitive_data` pair, as emitted by
/// [`super::Logger`]. Records without one (for example, logged straight
/// through a plain `slog::Logger`) render the empty mapping `{}`.
///
/// Wrap it with `.fuse()` (or `.ignore_res()`) to build a root logger.
pub struct SensitiveDataFormat<W: Write> {
    out: Mutex<W>,
}

impl<W: Write> SensitiveDataFormat<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> io::Result<W> {
        self.out.into_inner().map_err(|_| poisoned())
    }
}

impl<W: Write> Drain for SensitiveDataFormat<W> {
    type Ok = ();
    type Err = io::Error;

    fn log(&self, record: &Record<'_>, _values: &OwnedKVList) -> io::Result<()> {
        let mut capture = SensitiveDataCapture::default();
        record
            .kv()
            .serialize(record, &mut capture)
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;
        let line = render_line(&capture.data, &record.msg().to_string());

        let mut out = self.out.lock().map_err(|_| poisoned())?;
        writeln!(out, "{line}")?;
        out.flush()
    }
}

fn poisoned() -> io::Error {
    io::Error::new(io::ErrorKind::Other, "output writer mutex poisoned")
}

/// Picks the `sensitive_data` pair out of a record and ignores the rest.
#[derive(Default)]
struct SensitiveDataCapture {
    data: SensitiveData,
}

impl Serializer for SensitiveDataCapture {
    fn emit_arguments(&mut self, _key: Key, _val: &fmt::Arguments<'_>) -> ::slog::Result {
        Ok(())
    }

    fn emit_serde(&mut self, key: Key, value: &dyn SerdeValue) -> ::slog::Result {
        if key.to_string() != SENSITIVE_DATA_KEY {
            return Ok(());
        }
        let json = serde_json::to_value(value.as_serde()).map_err(|_| ::slog::Error::Other)?;
        if let Some(data) = SensitiveData::from_json(json) {
            self.data = data;
        }
        Ok(())
    }
}
