//! Adapters that implement the `traits` capabilities over `std::io` streams.
//!
//! All three keep their own buffering, so they can be handed raw files or
//! sockets directly.

pub mod bit_reader;
pub mod bit_writer;
pub mod byte_reader;

pub use bit_reader::BitReader;
pub use bit_writer::BitWriter;
pub use byte_reader::ByteReader;

/// Default size of the staging buffers, in bytes.
pub const DEFAULT_BUFFER_CAPACITY: usize = 64 * 1024;
