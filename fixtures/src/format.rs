//! Wire serialization of logical events and comments.
//!
//! These helpers always produce well-formed frames; the malformed ones are
//! written out byte for byte by the fixtures that need them.

/// A logical event. Serialized immediately, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Event {
    pub event: Option<String>,
    pub data: String,
    pub id: Option<String>,
    pub retry: Option<u64>,
}

impl Event {
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            ..Self::default()
        }
    }

    pub fn event(mut self, name: impl Into<String>) -> Self {
        self.event = Some(name.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the reconnection delay in milliseconds.
    pub fn retry(mut self, millis: u64) -> Self {
        self.retry = Some(millis);
        self
    }
}

impl From<&str> for Event {
    fn from(data: &str) -> Self {
        Event::new(data)
    }
}

impl From<String> for Event {
    fn from(data: String) -> Self {
        Event::new(data)
    }
}

/// Serializes an event into one frame terminated by a blank line.
///
/// Multi-line data (LF, CR or CRLF separated) becomes repeated `data:` lines.
pub fn format_event(event: impl Into<Event>) -> String {
    let event = event.into();
    let mut frame = String::new();

    if let Some(name) = &event.event {
        frame.push_str(&format!("event: {name}\n"));
    }
    if let Some(id) = &event.id {
        frame.push_str(&format!("id: {id}\n"));
    }
    if let Some(retry) = event.retry {
        frame.push_str(&format!("retry: {retry}\n"));
    }
    frame.push_str(&encode_data(&event.data));
    frame.push_str("\n\n");
    frame
}

/// Serializes a comment into a single line. The colon is added here, so
/// `format_comment(" ping")` yields `": ping\n"`.
pub fn format_comment(comment: &str) -> String {
    format!(":{comment}\n")
}

/// Turns arbitrary text into `data: ` lines joined by LF, without the trailing
/// line terminator.
pub fn encode_data(text: &str) -> String {
    split_lines(text)
        .map(|line| format!("data: {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(['\r', '\n']) {
            Some(at) => {
                let skip = if current[at..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&current[at + skip..]);
                Some(&current[..at])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_string_becomes_a_data_only_frame() {
        assert_eq!(format_event("hello"), "data: hello\n\n");
    }

    #[test]
    fn test_all_fields_are_written_before_data() {
        let frame = format_event(Event::new("1").event("tick").id("1").retry(50));
        assert_eq!(frame, "event: tick\nid: 1\nretry: 50\ndata: 1\n\n");
    }

    #[test]
    fn test_multiline_data_is_split_on_every_line_terminator() {
        let frame = format_event("a\nb\r\nc\rd");
        assert_eq!(frame, "data: a\ndata: b\ndata: c\ndata: d\n\n");
    }

    #[test]
    fn test_empty_data_still_emits_one_data_line() {
        assert_eq!(format_event(""), "data: \n\n");
    }

    #[test]
    fn test_comment_is_prefixed_with_a_colon() {
        assert_eq!(format_comment(" ♥"), ": ♥\n");
        assert_eq!(format_comment(""), ":\n");
    }

    #[test]
    fn test_encode_data_keeps_blank_lines() {
        assert_eq!(encode_data("one\n\ntwo"), "data: one\ndata: \ndata: two");
    }
}
