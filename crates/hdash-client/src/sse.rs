//! Incremental `text/event-stream` frame decoder
//!
//! Bytes are fed in arbitrary chunks as they arrive from the socket; complete
//! events are returned as soon as their terminating blank line is seen.
//!
//! Only the parts of the event-stream format the log endpoint uses are
//! interpreted: `data` lines are accumulated (joined with `\n`), `event`
//! names are kept, comment lines starting with `:` are skipped, and `id` /
//! `retry` fields are ignored. `\r\n`, `\r` and `\n` all end a line.

/// One dispatched server-sent event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    /// Value of the `event:` field, if any
    pub event: Option<String>,
    /// All `data:` lines joined with `\n`
    pub data: String,
}

#[derive(Debug, Default)]
pub struct SseDecoder {
    /// Bytes of the current, not yet terminated line
    line: Vec<u8>,
    /// Accumulated data lines for the pending event
    data: Option<String>,
    event: Option<String>,
    /// Last byte processed was `\r`; swallow an immediately following `\n`
    after_cr: bool,
    /// Still at stream start, where a UTF-8 BOM may appear
    at_start: bool,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self {
            at_start: true,
            ..Self::default()
        }
    }

    /// Feed a chunk of bytes and collect any events it completes.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<SseEvent> {
        let mut events = Vec::new();
        let mut bytes = chunk;

        if self.at_start {
            if bytes.is_empty() {
                return events;
            }
            if let Some(rest) = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]) {
                bytes = rest;
            }
            self.at_start = false;
        }

        for &byte in bytes {
            if self.after_cr {
                self.after_cr = false;
                if byte == b'\n' {
                    continue;
                }
            }

            match byte {
                b'\r' => {
                    self.after_cr = true;
                    self.end_line(&mut events);
                }
                b'\n' => self.end_line(&mut events),
                other => self.line.push(other),
            }
        }

        events
    }

    fn end_line(&mut self, events: &mut Vec<SseEvent>) {
        let line = String::from_utf8_lossy(&self.line).into_owned();
        self.line.clear();

        if line.is_empty() {
            if let Some(data) = self.data.take() {
                events.push(SseEvent {
                    event: self.event.take(),
                    data,
                });
            } else {
                self.event = None;
            }
            return;
        }

        if line.starts_with(':') {
            return;
        }

        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line.as_str(), ""),
        };

        match field {
            "data" => match self.data.as_mut() {
                Some(data) => {
                    data.push('\n');
                    data.push_str(value);
                }
                None => self.data = Some(value.to_string()),
            },
            "event" => self.event = Some(value.to_string()),
            _ => {}
        }
    }
}
