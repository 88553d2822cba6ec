use alloc::vec::Vec;

use crate::{error::ErrorKind, sink::Sink};

/// One recorded sink callback, with payload bytes copied out of the chunk.
///
/// The fragment variants mirror the fragmented delivery protocol: a token
/// confined to one chunk records as [`Event::String`]/[`Event::Name`], a
/// spanning token as `…Start`, zero or more `…Cont`, then `…End`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(Vec<u8>),
    StringStart(Vec<u8>),
    StringCont(Vec<u8>),
    StringEnd,
    Name(Vec<u8>),
    NameStart(Vec<u8>),
    NameCont(Vec<u8>),
    NameEnd,
    ObjectStart,
    ObjectEnd,
    ArrayStart,
    ArrayEnd,
    Error(ErrorKind),
}

/// A [`Sink`] that copies every event into an owned list.
///
/// Useful for consumers that want a flat event log rather than reacting
/// inside the callbacks, and used throughout this crate's tests.
///
/// # Examples
///
/// ```rust
/// use jsonpush::{Event, EventLog, PushParser};
///
/// let mut parser = PushParser::new(EventLog::new());
/// parser.feed(b"[null]");
/// assert_eq!(
///     parser.into_sink().into_events(),
///     vec![Event::ArrayStart, Event::Null, Event::ArrayEnd]
/// );
/// ```
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        EventLog { events: Vec::new() }
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[must_use]
    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

impl Sink for EventLog {
    fn null(&mut self) {
        self.events.push(Event::Null);
    }

    fn boolean(&mut self, value: bool) {
        self.events.push(Event::Boolean(value));
    }

    fn integer(&mut self, value: i64) {
        self.events.push(Event::Integer(value));
    }

    fn float(&mut self, value: f64) {
        self.events.push(Event::Float(value));
    }

    fn string(&mut self, bytes: &[u8]) {
        self.events.push(Event::String(bytes.to_vec()));
    }

    fn string_start(&mut self, bytes: &[u8]) {
        self.events.push(Event::StringStart(bytes.to_vec()));
    }

    fn string_cont(&mut self, bytes: &[u8]) {
        self.events.push(Event::StringCont(bytes.to_vec()));
    }

    fn string_end(&mut self) {
        self.events.push(Event::StringEnd);
    }

    fn name(&mut self, bytes: &[u8]) {
        self.events.push(Event::Name(bytes.to_vec()));
    }

    fn name_start(&mut self, bytes: &[u8]) {
        self.events.push(Event::NameStart(bytes.to_vec()));
    }

    fn name_cont(&mut self, bytes: &[u8]) {
        self.events.push(Event::NameCont(bytes.to_vec()));
    }

    fn name_end(&mut self) {
        self.events.push(Event::NameEnd);
    }

    fn object_start(&mut self) {
        self.events.push(Event::ObjectStart);
    }

    fn object_end(&mut self) {
        self.events.push(Event::ObjectEnd);
    }

    fn array_start(&mut self) {
        self.events.push(Event::ArrayStart);
    }

    fn array_end(&mut self) {
        self.events.push(Event::ArrayEnd);
    }

    fn error(&mut self, kind: ErrorKind) {
        self.events.push(Event::Error(kind));
    }
}
