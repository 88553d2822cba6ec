/// What to do when an integer's magnitude no longer fits the accumulator.
///
/// Applies to the integer part of a numeric token. Fraction digits beyond the
/// accumulator's precision are always dropped (they are below `f64`
/// resolution), and exponent magnitudes always saturate — only the integer
/// magnitude has an observable policy choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberOverflow {
    /// Clamp the emitted integer into the `i64` range.
    #[default]
    Saturate,
    /// Report the token as an invalid number and stop parsing.
    Reject,
}

/// Configuration options for [`PushParser`](crate::PushParser).
///
/// # Examples
///
/// ```rust
/// use jsonpush::{ParserOptions, PushParser};
///
/// let mut parser = PushParser::with_options(
///     jsonpush::NoopSink,
///     ParserOptions {
///         reject_leading_zeros: true,
///         ..Default::default()
///     },
/// );
/// assert!(!parser.feed(b"007 "));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ParserOptions {
    /// Policy for integers whose magnitude exceeds the accumulator.
    ///
    /// # Default
    ///
    /// [`NumberOverflow::Saturate`]
    pub number_overflow: NumberOverflow,

    /// Whether to reject zero-prefixed integer parts such as `00123`.
    ///
    /// By default the parser is permissive and accepts any run of digits as
    /// the integer part. Setting this reports such tokens as invalid numbers,
    /// matching strict JSON.
    ///
    /// # Default
    ///
    /// `false`
    pub reject_leading_zeros: bool,
}
