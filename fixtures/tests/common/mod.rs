//! A conformant event-stream parser used to check what clients will see.

use bytes::Bytes;
use fixtures::FixtureStream;
use futures::StreamExt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub event: String,
    pub data: String,
    pub id: String,
    pub retry: Option<u64>,
}

pub async fn collect(stream: FixtureStream) -> Vec<Bytes> {
    stream.collect().await
}

pub fn concat(chunks: &[Bytes]) -> Vec<u8> {
    chunks.iter().flat_map(|chunk| chunk.iter().copied()).collect()
}

/// Parses a complete stream. A trailing line without a terminator is
/// discarded, as a client would when the connection closes.
pub fn parse(input: &[u8]) -> Vec<Message> {
    let text = std::str::from_utf8(input).expect("fixture streams are valid UTF-8 overall");
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);

    let mut messages = Vec::new();
    let mut data = String::new();
    let mut event = String::new();
    let mut id = String::new();
    let mut retry = None;

    for line in complete_lines(text) {
        if line.is_empty() {
            if !data.is_empty() {
                data.pop();
                messages.push(Message {
                    event: if event.is_empty() { "message".into() } else { event.clone() },
                    data: data.clone(),
                    id: id.clone(),
                    retry,
                });
            }
            data.clear();
            event.clear();
            continue;
        }
        if line.starts_with(':') {
            continue;
        }
        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line, ""),
        };
        match field {
            "event" => event = value.to_string(),
            "data" => {
                data.push_str(value);
                data.push('\n');
            }
            "id" if !value.contains('\0') => id = value.to_string(),
            "retry" if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) => {
                retry = value.parse().ok();
            }
            _ => {}
        }
    }
    messages
}

fn complete_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(at) = rest.find(['\r', '\n']) {
        lines.push(&rest[..at]);
        let skip = if rest[at..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[at + skip..];
    }
    lines
}

pub fn data_of(messages: &[Message]) -> Vec<&str> {
    messages.iter().map(|message| message.data.as_str()).collect()
}

pub fn is_done(message: &Message) -> bool {
    message.event == "done" && message.data == "✔"
}
