#![no_main]

use jsonpush::{Event, EventLog, PushParser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }
    let split_seed = u64::from_le_bytes(data[..8].try_into().unwrap());
    let payload = &data[8..];

    // Reference run: the whole payload as one chunk.
    let mut whole = PushParser::new(EventLog::new());
    whole.feed(payload);
    let reference = whole.into_sink().into_events();

    // Same payload in seed-derived chunk sizes.
    let mut parser = PushParser::new(EventLog::new());
    for chunk in split_into_chunks(payload, split_seed) {
        if !parser.feed(chunk) {
            break;
        }
    }
    let chunked = parser.into_sink().into_events();

    check_protocol(&reference);
    check_protocol(&chunked);
    assert_eq!(
        coalesce(&chunked),
        coalesce(&reference),
        "chunking changed the observed document"
    );
});

/// Split `payload` into chunks whose sizes are derived from `seed`. Every
/// chunk is at least one byte; any byte position is a legal boundary.
fn split_into_chunks(payload: &[u8], seed: u64) -> Vec<&[u8]> {
    let mut chunks = Vec::new();
    let mut rest = payload;
    let mut state = seed | 1;

    while !rest.is_empty() {
        // xorshift; only the distribution of cut points matters
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let size = (state as usize % rest.len()) + 1;
        let (chunk, tail) = rest.split_at(size);
        chunks.push(chunk);
        rest = tail;
    }
    chunks
}

/// Structural invariants every event stream must satisfy, valid or not:
/// fragments are well-bracketed and never empty, container ends match their
/// starts in LIFO order, and an error terminates the stream.
fn check_protocol(events: &[Event]) {
    let mut fragment_open = false;
    let mut containers: Vec<Event> = Vec::new();

    for (index, event) in events.iter().enumerate() {
        if index > 0 && matches!(events[index - 1], Event::Error(_)) {
            panic!("event recorded after an error");
        }

        match event {
            Event::StringStart(bytes) | Event::NameStart(bytes) => {
                assert!(!fragment_open, "fragment opened twice");
                assert!(!bytes.is_empty(), "empty opening fragment");
                fragment_open = true;
            }
            Event::StringCont(bytes) | Event::NameCont(bytes) => {
                assert!(fragment_open, "continuation without an opening");
                assert!(!bytes.is_empty(), "empty continuation fragment");
            }
            Event::StringEnd | Event::NameEnd => {
                assert!(fragment_open, "end mark without an opening");
                fragment_open = false;
            }
            Event::ObjectStart => containers.push(Event::ObjectEnd),
            Event::ArrayStart => containers.push(Event::ArrayEnd),
            Event::ObjectEnd | Event::ArrayEnd => {
                assert_eq!(
                    containers.pop().as_ref(),
                    Some(event),
                    "container close mismatch"
                );
            }
            _ => {}
        }
    }
}

/// Merge fragment sequences into whole tokens so streams from different
/// chunkings compare equal. A fragment left open at end of input is
/// represented by its opening variant with the concatenated payload.
fn coalesce(events: &[Event]) -> Vec<Event> {
    let mut out = Vec::new();
    let mut buffer: Option<Vec<u8>> = None;

    for event in events {
        match event {
            Event::StringStart(bytes) | Event::NameStart(bytes) => {
                buffer = Some(bytes.clone());
            }
            Event::StringCont(bytes) | Event::NameCont(bytes) => {
                buffer.as_mut().unwrap().extend_from_slice(bytes);
            }
            Event::StringEnd => out.push(Event::String(buffer.take().unwrap())),
            Event::NameEnd => out.push(Event::Name(buffer.take().unwrap())),
            other => out.push(other.clone()),
        }
    }

    // Both runs flush pending content at chunk boundaries, so an unfinished
    // token holds the same bytes regardless of chunking.
    if let Some(bytes) = buffer {
        out.push(Event::StringStart(bytes));
    }
    out
}
