use crate::format::{format_event, Event};
use crate::FixtureStream;
use bytes::Bytes;
use futures::StreamExt;
use serde_json::{Map, Value};

/// One `headers` event whose data is a JSON object of the given request
/// headers. Names are lowercased and repeated headers joined with `, `.
pub fn headers<I, K, V>(request_headers: I) -> FixtureStream
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut echoed = Map::new();
    for (name, value) in request_headers {
        let name = name.as_ref().to_ascii_lowercase();
        let value = value.as_ref();
        match echoed.get_mut(&name) {
            Some(Value::String(existing)) => {
                existing.push_str(", ");
                existing.push_str(value);
            }
            _ => {
                echoed.insert(name, Value::String(value.to_string()));
            }
        }
    }

    let data = Value::Object(echoed).to_string();
    let frame = Bytes::from(format_event(Event::new(data).event("headers")));
    futures::stream::iter([frame]).boxed()
}
