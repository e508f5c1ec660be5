//! Pluggable CD image backend.
//!
//! The library never parses `.cue`, `.chd`, or raw `.bin` track layouts
//! itself; a backend supplies tracks and 2048-byte user-data sectors. Two
//! sector coordinate systems exist: disc-absolute LBAs (used by ISO-9660
//! extents) and track-relative sectors (used for reads).

use std::io;

use crate::error::HashError;
use crate::MAX_BUFFER_SIZE;

/// Which track of a disc image to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackSelector {
    /// A specific 1-based track number.
    Track(u32),
    /// The first data track on the disc.
    FirstData,
    /// The largest data track on the disc.
    Largest,
    /// The last track on the disc.
    Last,
}

impl std::fmt::Display for TrackSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Track(n) => write!(f, "track {}", n),
            Self::FirstData => write!(f, "first data track"),
            Self::Largest => write!(f, "largest data track"),
            Self::Last => write!(f, "last track"),
        }
    }
}

/// An open track of a disc image.
///
/// A single logical CD may be opened several times with different
/// selectors, each yielding an independent handle. Handles are released
/// by `Drop`.
pub trait CdTrack {
    /// Read up to `buf.len()` bytes of user data starting at a
    /// track-relative sector. Short reads are permitted at end of track.
    fn read_sector(&mut self, track_sector: u32, buf: &mut [u8]) -> io::Result<usize>;

    /// Map a disc-absolute sector onto this track, or `None` when the
    /// sector lies outside it.
    fn to_track_sector(&mut self, absolute_sector: u32) -> Option<u32>;
}

/// Backend that opens tracks of disc images.
pub trait CdAccess: Send + Sync {
    fn open_track(&self, path: &str, selector: TrackSelector) -> io::Result<Box<dyn CdTrack>>;
}

/// Digest the contents of an on-disc file that starts at a disc-absolute
/// sector: translate onto the track, then stream full 2048-byte sectors
/// with the final sector trimmed to the remaining length.
pub fn append_file_content(
    md5: &mut md5::Context,
    track: &mut dyn CdTrack,
    absolute_sector: u32,
    size: u32,
) -> Result<(), HashError> {
    let track_sector = track
        .to_track_sector(absolute_sector)
        .ok_or_else(|| HashError::invalid_format("File content lies outside the opened track"))?;
    append_track_sectors(md5, track, track_sector, size)
}

/// Digest `size` bytes starting at a track-relative sector.
///
/// Feeds at most [`MAX_BUFFER_SIZE`] bytes to the digest; a short read
/// before the trimmed length is reached is an error.
pub fn append_track_sectors(
    md5: &mut md5::Context,
    track: &mut dyn CdTrack,
    track_sector: u32,
    size: u32,
) -> Result<(), HashError> {
    let mut sector = track_sector;
    let mut remaining = (size as u64).min(MAX_BUFFER_SIZE) as u32;
    let mut buf = [0u8; 2048];

    while remaining >= 2048 {
        let n = track.read_sector(sector, &mut buf)?;
        if n < buf.len() {
            return Err(HashError::too_small(2048, n as u64));
        }
        md5.consume(buf);
        sector += 1;
        remaining -= 2048;
    }

    if remaining > 0 {
        let tail = &mut buf[..remaining as usize];
        let n = track.read_sector(sector, tail)?;
        if n < tail.len() {
            return Err(HashError::too_small(remaining as u64, n as u64));
        }
        md5.consume(&buf[..remaining as usize]);
    }

    Ok(())
}
