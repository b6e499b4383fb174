use serde::{Deserialize, Serialize};

/// A club discovered on a search results page.
///
/// Serialized field names match the output file format
/// (`club_name` / `club_link`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    #[serde(rename = "club_name", default)]
    pub name: String,
    #[serde(rename = "club_link", default)]
    pub link: String,
}

impl Club {
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
        }
    }

    /// Deduplication key, parsed from the link.
    ///
    /// Club links end in `/<id>-<name-slug>`; the id alone identifies the
    /// club, so `/club/111-a` and `/club/111-b` are the same club no matter
    /// what name text was captured. Returns `None` for an empty link or a
    /// link ending in `/`, since such a record cannot be deduplicated
    /// safely.
    pub fn identity(&self) -> Option<&str> {
        if self.link.is_empty() {
            return None;
        }
        let segment = self.link.rsplit('/').next().unwrap_or("");
        if segment.is_empty() {
            return None;
        }
        match segment.split('-').next() {
            Some(id) if !id.is_empty() => Some(id),
            _ => Some(segment),
        }
    }

    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "(unnamed)"
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_id_prefix_of_last_segment() {
        let club = Club::new("Padel One", "/club/12345-padel-one");
        assert_eq!(club.identity(), Some("12345"));
    }

    #[test]
    fn test_identity_segment_without_slug() {
        let club = Club::new("Bare", "/club/12345");
        assert_eq!(club.identity(), Some("12345"));
    }

    #[test]
    fn test_identity_without_slashes() {
        let club = Club::new("Bare", "12345");
        assert_eq!(club.identity(), Some("12345"));
    }

    #[test]
    fn test_identity_empty_link() {
        let club = Club::new("No Link", "");
        assert_eq!(club.identity(), None);
    }

    #[test]
    fn test_identity_trailing_slash() {
        let club = Club::new("Trailing", "/club/12345/");
        assert_eq!(club.identity(), None);
    }

    #[test]
    fn test_same_id_different_slugs_collide() {
        let a = Club::new("Club A", "/club/111-a");
        let b = Club::new("Completely Different", "/club/111-b");
        assert_eq!(a.identity(), b.identity());
    }

    #[test]
    fn test_same_name_different_ids_distinct() {
        let a = Club::new("Padel Club", "/club/111-padel-club");
        let b = Club::new("Padel Club", "/club/222-padel-club");
        assert_ne!(a.identity(), b.identity());
    }

    #[test]
    fn test_serializes_with_wire_names() {
        let club = Club::new("Padel One", "/club/1-padel-one");
        let json = serde_json::to_value(&club).unwrap();
        assert_eq!(json["club_name"], "Padel One");
        assert_eq!(json["club_link"], "/club/1-padel-one");
    }

    #[test]
    fn test_deserializes_with_missing_fields() {
        let club: Club = serde_json::from_str(r#"{"club_name": "Padel One"}"#).unwrap();
        assert_eq!(club.name, "Padel One");
        assert_eq!(club.link, "");
        assert_eq!(club.identity(), None);
    }

    #[test]
    fn test_display_name_fallback() {
        let club = Club::new("", "/club/1-x");
        assert_eq!(club.display_name(), "(unnamed)");
    }
}
