//! Magic-byte content-type sniffing.
//!
//! Uploads carry no trusted metadata, so the stored content type is derived
//! from the bytes themselves: a fixed table of file signatures checked
//! against the first 512 bytes. Classification is pure and total -- it never
//! fails, at worst it answers [`OCTET_STREAM`].
//!
//! The signature set is deliberately small (the image, video and document
//! formats the serving layer actually cares about). The signatures do not
//! overlap, so match order carries no semantics.

/// Generic fallback for unrecognized or too-short content.
pub const OCTET_STREAM: &str = "application/octet-stream";

pub const IMAGE_PNG: &str = "image/png";
pub const IMAGE_JPEG: &str = "image/jpeg";
pub const IMAGE_GIF: &str = "image/gif";
pub const IMAGE_WEBP: &str = "image/webp";
pub const VIDEO_MP4: &str = "video/mp4";
pub const VIDEO_WEBM: &str = "video/webm";
pub const APPLICATION_PDF: &str = "application/pdf";

/// Number of leading bytes inspected, and the minimum input size for
/// sniffing to be attempted at all.
pub const SNIFF_WINDOW: usize = 512;

/// Classify `data` into a MIME type from its leading bytes.
///
/// Inputs shorter than [`SNIFF_WINDOW`] bytes are not sniffed: too little
/// data to classify safely, so the answer is [`OCTET_STREAM`]. Everything
/// past the window is ignored -- the type is advisory and is never
/// re-validated against the full payload.
pub fn sniff(data: &[u8]) -> &'static str {
    if data.len() < SNIFF_WINDOW {
        return OCTET_STREAM;
    }
    match_signature(&data[..SNIFF_WINDOW])
}

fn match_signature(header: &[u8]) -> &'static str {
    // Callers guarantee at least SNIFF_WINDOW bytes; the explicit length
    // check keeps the indexing below in-bounds regardless.
    if header.len() < 12 {
        return OCTET_STREAM;
    }

    if header[..4] == [0x89, 0x50, 0x4E, 0x47] {
        return IMAGE_PNG;
    }
    if header[..3] == [0xFF, 0xD8, 0xFF] {
        return IMAGE_JPEG;
    }
    if header[..3] == [0x47, 0x49, 0x46] {
        return IMAGE_GIF;
    }
    if &header[..4] == b"RIFF" && &header[8..12] == b"WEBP" {
        return IMAGE_WEBP;
    }
    if &header[4..8] == b"ftyp" {
        return VIDEO_MP4;
    }
    if header[..4] == [0x1A, 0x45, 0xDF, 0xA3] {
        return VIDEO_WEBM;
    }
    if header[..4] == [0x25, 0x50, 0x44, 0x46] {
        return APPLICATION_PDF;
    }

    OCTET_STREAM
}
