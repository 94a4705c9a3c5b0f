//! Incremental `text/event-stream` decoder

/// One dispatched server-sent event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    /// `event:` field; `None` means the default `message` type
    pub event: Option<String>,
    pub data: String,
}

impl SseEvent {
    pub fn is_error(&self) -> bool {
        self.event.as_deref() == Some("error")
    }
}

/// Turns arbitrary byte chunks into events
///
/// Chunks may split lines (and UTF-8 sequences) anywhere; incomplete input is
/// buffered until the rest arrives.
#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: Vec<u8>,
    event: Option<String>,
    data: Vec<String>,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk; returns the events it completed
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<SseEvent> {
        self.buffer.extend_from_slice(chunk);

        let mut events = Vec::new();
        while let Some(end) = self.buffer.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=end).collect();
            let line = String::from_utf8_lossy(&line);
            let line = line.trim_end_matches(['\n', '\r']);

            if let Some(event) = self.process_line(line) {
                events.push(event);
            }
        }
        events
    }

    fn process_line(&mut self, line: &str) -> Option<SseEvent> {
        if line.is_empty() {
            return self.dispatch();
        }
        if line.starts_with(':') {
            return None;
        }

        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line, ""),
        };

        match field {
            "data" => self.data.push(value.to_string()),
            "event" => self.event = Some(value.to_string()),
            // id and retry do not matter for a status feed
            _ => {}
        }
        None
    }

    fn dispatch(&mut self) -> Option<SseEvent> {
        let event = self.event.take();
        if self.data.is_empty() {
            return None;
        }

        let data = std::mem::take(&mut self.data).join("\n");
        Some(SseEvent { event, data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_event() {
        let mut decoder = SseDecoder::new();
        let events = decoder.feed(b"data: {\"isOffline\":false}\n\n");
        assert_eq!(
            events,
            vec![SseEvent {
                event: None,
                data: "{\"isOffline\":false}".to_string(),
            }]
        );
    }

    #[test]
    fn test_event_split_across_chunks() {
        let mut decoder = SseDecoder::new();
        assert!(decoder.feed(b"da").is_empty());
        assert!(decoder.feed(b"ta: 4").is_empty());
        assert!(decoder.feed(b"2\r\n").is_empty());

        let events = decoder.feed(b"\r\n");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].data, "42");
    }

    #[test]
    fn test_multiline_data_and_comments() {
        let mut decoder = SseDecoder::new();
        let events = decoder.feed(b": keepalive\ndata: a\ndata: b\n\n");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].data, "a\nb");
    }

    #[test]
    fn test_named_error_event() {
        let mut decoder = SseDecoder::new();
        let events = decoder.feed(b"event: error\ndata: mount server down\n\ndata: next\n\n");
        assert_eq!(events.len(), 2);
        assert!(events[0].is_error());
        assert!(!events[1].is_error());
    }

    #[test]
    fn test_blank_lines_without_data_dispatch_nothing() {
        let mut decoder = SseDecoder::new();
        assert!(decoder.feed(b"\n\nevent: ping\n\n").is_empty());
    }
}
