//! Archiver Implementations

mod tar;

pub use tar::TarArchiver;
