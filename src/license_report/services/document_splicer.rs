use std::ops::Range;

/// Marker delimiting the license table in the markdown document
pub const DEFAULT_MARKER: &str = "<!---EXT-LIBS-->";

/// Byte span strictly between the first and second occurrence of a marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerRegion {
    /// Replaceable interior, markers excluded
    pub interior: Range<usize>,
}

/// Result of a failed marker lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerNotFound {
    /// How many times the marker was found (0 or 1)
    pub occurrences: usize,
}

/// DocumentSplicer service for marker-delimited replacement
///
/// Works on text only; reading and writing the document is up to the caller,
/// so a failed lookup never leaves a half-written file behind.
pub struct DocumentSplicer;

impl DocumentSplicer {
    /// Locates the region between the first two occurrences of `marker`
    pub fn locate(document: &str, marker: &str) -> Result<MarkerRegion, MarkerNotFound> {
        if marker.is_empty() {
            return Err(MarkerNotFound { occurrences: 0 });
        }

        let first = document
            .find(marker)
            .ok_or(MarkerNotFound { occurrences: 0 })?;
        let interior_start = first + marker.len();
        let second = document[interior_start..]
            .find(marker)
            .map(|offset| interior_start + offset)
            .ok_or(MarkerNotFound { occurrences: 1 })?;

        Ok(MarkerRegion {
            interior: interior_start..second,
        })
    }

    /// Replaces the marker interior with `"\n" + content + "\n"`
    ///
    /// Everything before the first marker, both markers, and everything after
    /// the second marker (a third occurrence included) is kept byte for byte.
    /// Splicing the same content twice gives the same document.
    pub fn splice(document: &str, marker: &str, content: &str) -> Result<String, MarkerNotFound> {
        let region = Self::locate(document, marker)?;

        let mut spliced =
            String::with_capacity(document.len() - region.interior.len() + content.len() + 2);
        spliced.push_str(&document[..region.interior.start]);
        spliced.push('\n');
        spliced.push_str(content);
        spliced.push('\n');
        spliced.push_str(&document[region.interior.end..]);

        Ok(spliced)
    }
}
