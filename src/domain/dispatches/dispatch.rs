/// One journal entry, regardless of which source produced it.
///
/// `date` is an ISO `YYYY-MM-DD` string; the fixed-width format makes plain
/// string comparison sufficient for ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub id: String,
    pub title: String,
    pub date: String,
    pub content: String,
}

/// Metadata derived from a `YYYY-MM-DD-slug` file stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameMeta {
    pub id: String,
    pub date: String,
    pub title: String,
}

/// Parses a markdown file stem of the form `YYYY-MM-DD-some-title`.
///
/// With at least three hyphen-separated segments the first three become the
/// date and the remainder becomes the title, hyphens replaced by spaces.
/// Shorter stems keep the whole stem as the title and fall back to
/// `fallback_date` (the current calendar date at the call site).
pub fn parse_filename(stem: &str, fallback_date: &str) -> FilenameMeta {
    let parts: Vec<&str> = stem.split('-').collect();

    let (date, title) = if parts.len() >= 3 {
        let date = parts[..3].join("-");
        let rest = parts[3..].join(" ");
        let rest = rest.trim();
        let title = if rest.is_empty() { stem } else { rest };
        (date, title.to_string())
    } else {
        (fallback_date.to_string(), stem.to_string())
    };

    FilenameMeta {
        id: stem.to_string(),
        date,
        title,
    }
}

/// A leading `# ` heading on the first line is the canonical title and beats
/// anything derived from the filename.
pub fn title_from_body(raw: &str) -> Option<String> {
    let first_line = raw.lines().next()?;
    first_line
        .strip_prefix("# ")
        .map(|rest| rest.trim_start().to_string())
}

/// Newest first; the sort is stable so same-date entries keep input order.
pub fn sort_newest_first(dispatches: &mut [Dispatch]) {
    dispatches.sort_by(|a, b| b.date.cmp(&a.date));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_date_and_title_from_stem() {
        let meta = parse_filename("2024-03-05-notes-from-the-road", "2026-01-01");
        assert_eq!(meta.id, "2024-03-05-notes-from-the-road");
        assert_eq!(meta.date, "2024-03-05");
        assert_eq!(meta.title, "notes from the road");
    }

    #[test]
    fn short_stem_falls_back_to_today_and_full_stem() {
        let meta = parse_filename("hello", "2026-08-30");
        assert_eq!(meta.date, "2026-08-30");
        assert_eq!(meta.title, "hello");
    }

    #[test]
    fn date_only_stem_keeps_stem_as_title() {
        // Exactly three segments: a date but nothing left over for a title.
        let meta = parse_filename("2024-01-02", "2026-08-30");
        assert_eq!(meta.date, "2024-01-02");
        assert_eq!(meta.title, "2024-01-02");
    }

    #[test]
    fn heading_line_wins_over_filename() {
        assert_eq!(
            title_from_body("# A Better Title\n\nbody"),
            Some("A Better Title".to_string())
        );
        assert_eq!(title_from_body("no heading here"), None);
        // A bare "#" without the space is not a title marker.
        assert_eq!(title_from_body("#tag line"), None);
    }

    #[test]
    fn sorts_by_date_descending() {
        let mut entries: Vec<Dispatch> = ["2024-01-01", "2024-03-05", "2024-02-10"]
            .iter()
            .map(|d| Dispatch {
                id: d.to_string(),
                title: String::new(),
                date: d.to_string(),
                content: String::new(),
            })
            .collect();
        sort_newest_first(&mut entries);
        let dates: Vec<&str> = entries.iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, ["2024-03-05", "2024-02-10", "2024-01-01"]);
    }
}
