//! Segment-level predicates over parsed paths.

/// The attribute a path belongs to: its first segment.
///
/// `"/name"` and `"/replicationSpecs/0/id"` belong to `name` and
/// `replicationSpecs`; the root path belongs to no attribute.
pub fn top_level_key(path: &[String]) -> Option<&str> {
    path.first().map(String::as_str)
}

/// True when the last segments of `path` equal `suffix`.
///
/// An empty suffix never matches.
pub fn ends_with_segments(path: &[String], suffix: &[String]) -> bool {
    !suffix.is_empty() && path.ends_with(suffix)
}

/// True when `needle` occurs in `path` as a contiguous run of segments.
pub fn contains_segments(path: &[String], needle: &[String]) -> bool {
    if needle.is_empty() || needle.len() > path.len() {
        return false;
    }
    path.windows(needle.len()).any(|window| window == needle)
}

/// True for a canonical non-negative array index (`"0"`, `"12"`, never `"01"`).
pub fn is_index_segment(segment: &str) -> bool {
    match segment.as_bytes() {
        [] => false,
        [b'0'] => true,
        [b'0', ..] => false,
        bytes => bytes.iter().all(u8::is_ascii_digit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_json_pointer;

    #[test]
    fn top_level_key_of_nested_path() {
        let path = parse_json_pointer("/replicationSpecs/0/zoneName");
        assert_eq!(top_level_key(&path), Some("replicationSpecs"));
        assert_eq!(top_level_key(&[]), None);
    }

    #[test]
    fn suffix_matches_whole_segments() {
        let path = parse_json_pointer("/specs/0/readOnlySpecs/diskSizeGB");
        assert!(ends_with_segments(&path, &parse_json_pointer("/diskSizeGB")));
        assert!(ends_with_segments(&path, &parse_json_pointer("/readOnlySpecs/diskSizeGB")));
        assert!(!ends_with_segments(&path, &parse_json_pointer("/SizeGB")));
        assert!(!ends_with_segments(&path, &[]));
    }

    #[test]
    fn contains_matches_anywhere() {
        let path = parse_json_pointer("/replicationSpecs/0/regionConfigs/0/priority");
        assert!(contains_segments(&path, &parse_json_pointer("/replicationSpecs")));
        assert!(contains_segments(&path, &parse_json_pointer("/regionConfigs")));
        assert!(!contains_segments(&path, &parse_json_pointer("/region")));
        assert!(!contains_segments(&path, &[]));
    }

    #[test]
    fn index_segments() {
        assert!(is_index_segment("0"));
        assert!(is_index_segment("42"));
        assert!(!is_index_segment("042"));
        assert!(!is_index_segment("-"));
        assert!(!is_index_segment("-1"));
        assert!(!is_index_segment(""));
        assert!(!is_index_segment("id"));
    }
}
