//! Provenance metadata and staged-file naming.
//!
//! Pure functions: everything here is derived from the message's own
//! timestamps, never from the wall clock.

use chrono::{DateTime, Utc};

use crate::messaging::types::IncomingMessage;

const FILE_STAMP: &str = "%Y%m%d_%H%M%S";
const HUMAN_STAMP: &str = "%Y-%m-%d %H:%M:%S";

/// Extension used when a document arrives without a declared filename.
pub const DEFAULT_DOCUMENT_EXT: &str = ".bin";

/// `YYYYMMDD_HHMMSS`, for file names.
pub fn file_stamp(ts: DateTime<Utc>) -> String {
    ts.format(FILE_STAMP).to_string()
}

/// `YYYY-MM-DD HH:MM:SS`, for metadata lines.
pub fn human_stamp(ts: DateTime<Utc>) -> String {
    ts.format(HUMAN_STAMP).to_string()
}

/// Source / original-post / saved-at lines, in that order.
pub fn metadata_lines(msg: &IncomingMessage) -> Vec<String> {
    let mut lines = Vec::with_capacity(3);

    if let Some(origin) = &msg.forward_origin {
        let source = match &origin.source.handle {
            Some(handle) => format!("{} (@{handle})", origin.source.title),
            None => origin.source.title.clone(),
        };
        lines.push(format!("Source: {source}"));
        lines.push(format!("Original post: {}", human_stamp(origin.date)));
    }

    lines.push(format!("Saved at: {}", human_stamp(msg.date)));
    lines
}

/// Caption for a re-uploaded attachment: text first (if any), then metadata.
pub fn attachment_caption(text: &str, metadata: &[String]) -> String {
    let meta = metadata.join("\n");
    if text.is_empty() {
        meta
    } else {
        format!("{text}\n{meta}")
    }
}

/// Body of the synthesized text file.
pub fn text_file_body(text: &str, metadata: &[String]) -> String {
    format!("{text}\n\n---\n{}", metadata.join("\n"))
}

pub fn photo_file_name(ts: DateTime<Utc>) -> String {
    format!("photo_{}.jpg", file_stamp(ts))
}

pub fn document_file_name(ts: DateTime<Utc>, declared: Option<&str>) -> String {
    format!("doc_{}{}", file_stamp(ts), document_extension(declared))
}

pub fn text_file_name(ts: DateTime<Utc>) -> String {
    format!("text_{}.txt", file_stamp(ts))
}

/// Extension (with the dot) of a declared document filename.
///
/// Only the last `/`-separated component counts (a backslash is an ordinary
/// character), leading dots (`.bashrc`) are not an extension, and a name
/// without one yields `""`. No name yields `.bin`.
pub fn document_extension(declared: Option<&str>) -> String {
    let Some(name) = declared else {
        return DEFAULT_DOCUMENT_EXT.to_string();
    };

    let base = name.rsplit('/').next().unwrap_or(name);
    let stem_start = base.len() - base.trim_start_matches('.').len();
    match base[stem_start..].rfind('.') {
        Some(dot) => base[stem_start + dot..].to_string(),
        None => String::new(),
    }
}
