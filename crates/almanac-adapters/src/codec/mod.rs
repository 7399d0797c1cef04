//! Date text codecs.

mod pattern;

pub use pattern::PatternCodec;
