//! # Media Types
//!
//! Response body formats and `Accept` header negotiation.

use crate::error::{StoreError, StoreResult};

/// Response body format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    Json,
    Xml,
}

impl MediaType {
    /// Server preference when the client accepts several formats equally
    const PREFERENCE: [MediaType; 2] = [MediaType::Json, MediaType::Xml];

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Json => "application/json",
            MediaType::Xml => "application/xml",
        }
    }

    /// Match an `essence` such as `application/xml` (no parameters)
    pub fn from_essence(essence: &str) -> Option<Self> {
        Self::PREFERENCE
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(essence))
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of an `Accept` header
#[derive(Debug, Clone, PartialEq)]
struct MediaRange {
    essence: String,
    quality: f32,
}

fn parse_accept(accept: &str) -> Vec<MediaRange> {
    let mut ranges: Vec<MediaRange> = accept
        .split(',')
        .filter_map(|part| {
            let mut pieces = part.split(';');
            let essence = pieces.next()?.trim().to_ascii_lowercase();
            if essence.is_empty() {
                return None;
            }
            let quality = pieces
                .filter_map(|p| p.trim().strip_prefix("q="))
                .find_map(|q| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);
            Some(MediaRange { essence, quality })
        })
        .filter(|range| range.quality > 0.0)
        .collect();

    // Stable, so equal weights keep the client's order.
    ranges.sort_by(|a, b| b.quality.total_cmp(&a.quality));
    ranges
}

/// Pick the body format for a response.
///
/// `produces` lists the operation's declared media types. An operation that
/// declares none has no body to negotiate and always yields JSON. A missing
/// or blank `Accept` header accepts anything.
pub fn negotiate(accept: Option<&str>, produces: &[&str]) -> StoreResult<MediaType> {
    let offered: Vec<MediaType> = MediaType::PREFERENCE
        .into_iter()
        .filter(|m| produces.iter().any(|p| p.eq_ignore_ascii_case(m.as_str())))
        .collect();

    let Some(&preferred) = offered.first() else {
        return Ok(MediaType::Json);
    };

    let accept = match accept.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => return Ok(preferred),
    };

    for range in parse_accept(accept) {
        if range.essence == "*/*" {
            return Ok(preferred);
        }
        if let Some(prefix) = range.essence.strip_suffix("/*") {
            if let Some(m) = offered
                .iter()
                .find(|m| m.as_str().split('/').next() == Some(prefix))
            {
                return Ok(*m);
            }
            continue;
        }
        if let Some(m) = MediaType::from_essence(&range.essence) {
            if offered.contains(&m) {
                return Ok(m);
            }
        }
    }

    Err(StoreError::NotAcceptable(format!(
        "{} (available: {})",
        accept,
        produces.join(", ")
    )))
}
