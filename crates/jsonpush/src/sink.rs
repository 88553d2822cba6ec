use crate::error::ErrorKind;

/// Receiver for the structural events of a parse.
///
/// Every operation defaults to a no-op, so implementations override only the
/// callbacks they care about. Callbacks arrive in strict document order;
/// container starts and ends bracket their children.
///
/// String and name payloads borrow from the chunk currently being fed — a
/// sink that wants to keep them beyond the call must copy. A token confined
/// to one chunk arrives through the whole-token callback ([`Sink::string`] or
/// [`Sink::name`]); a token that straddles chunk boundaries arrives as an
/// opening fragment, any number of continuing fragments, and a payload-less
/// end mark. Fragment payloads are never empty, and concatenating them yields
/// exactly the bytes between the quotes.
///
/// After [`Sink::error`] no further callbacks are made by the same parser.
pub trait Sink {
    /// A JSON `null`.
    fn null(&mut self) {}

    /// A JSON `true` or `false`.
    fn boolean(&mut self, _value: bool) {}

    /// A number with neither fraction nor exponent.
    fn integer(&mut self, _value: i64) {}

    /// A number with a fraction and/or exponent.
    fn float(&mut self, _value: f64) {}

    /// A whole string value, both quotes seen within the current chunk span.
    fn string(&mut self, _bytes: &[u8]) {}

    /// Opening fragment of a string value that continues past this chunk.
    fn string_start(&mut self, _bytes: &[u8]) {}

    /// Further bytes of a fragmented string value.
    fn string_cont(&mut self, _bytes: &[u8]) {}

    /// The closing quote of a fragmented string value.
    fn string_end(&mut self) {}

    /// A whole member name.
    fn name(&mut self, _bytes: &[u8]) {}

    /// Opening fragment of a member name that continues past this chunk.
    fn name_start(&mut self, _bytes: &[u8]) {}

    /// Further bytes of a fragmented member name.
    fn name_cont(&mut self, _bytes: &[u8]) {}

    /// The closing quote of a fragmented member name.
    fn name_end(&mut self) {}

    fn object_start(&mut self) {}

    fn object_end(&mut self) {}

    fn array_start(&mut self) {}

    fn array_end(&mut self) {}

    /// The document is malformed; the parser is terminal from here on.
    fn error(&mut self, _kind: ErrorKind) {}
}

/// A [`Sink`] that discards every event.
///
/// Pairs with [`PushParser::validator`](crate::PushParser::validator) for
/// pure syntax checking, where the `feed` return value is the only output of
/// interest.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl Sink for NoopSink {}
