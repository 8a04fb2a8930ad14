//! Snapshot archive download and extraction
//!
//! # Modules
//!
//! - [`source`]: `ArchiveSource` trait producing the archive byte stream
//! - [`cdn`]: HTTP implementation for the snapshot CDN
//! - [`download`]: Streams an archive into a scoped temporary file
//! - [`extract`]: `ArchiveExtractor` trait and the zip implementation

pub mod cdn;
pub mod download;
pub mod extract;
pub mod source;

pub use cdn::CdnArchiveSource;
pub use download::download_to_temp;
pub use extract::{ArchiveExtractor, ZipExtractor};
pub use source::{ArchiveSource, ChunkStream};
