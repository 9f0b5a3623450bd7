//! Legal event timeline.
//!
//! A patent page lists dated milestones (priority filing, publication,
//! grant, expiration...) as `dd[itemprop=events]` entries. Each entry has a
//! type label, a date, and a free-text title.

use dom_query::Selection;

use crate::dom;
use crate::patterns::{EVENT, EVENT_DATE, EVENT_TITLE, EVENT_TYPE};

/// Dates resolved from the event timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDates {
    pub priority: String,
    pub granted: String,
    pub publication: String,
    pub expiration: String,
}

/// Scan every event in document order.
///
/// Later events overwrite earlier ones of the same category. An event with
/// no type label or no date carries nothing usable and is skipped entirely,
/// including the expiration check on its title.
#[must_use]
pub fn resolve_event_dates(scope: &Selection) -> EventDates {
    let mut dates = EventDates::default();

    for event in dom::find_all(scope, EVENT) {
        let (Some(kind), Some(date)) = (
            dom::find_first(&event, EVENT_TYPE),
            dom::find_first(&event, EVENT_DATE),
        ) else {
            tracing::trace!("skipping event without type or date");
            continue;
        };

        let kind = dom::trimmed_text(&kind);
        let date = dom::trimmed_text(&date);

        match kind.as_str() {
            "priority" => dates.priority.clone_from(&date),
            "granted" => dates.granted.clone_from(&date),
            "publication" => dates.publication.clone_from(&date),
            _ => {}
        }

        let title = dom::lookup_text(&event, EVENT_TITLE);
        if title.to_lowercase().contains("expiration") {
            dates.expiration = date;
        }
    }

    dates
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom_query::Document;

    fn event(kind: &str, date: &str, title: &str) -> String {
        format!(
            r#"<dd itemprop="events"><time itemprop="date">{date}</time>
               <span itemprop="type">{kind}</span><span itemprop="title">{title}</span></dd>"#
        )
    }

    #[test]
    fn test_classifies_by_type_label() {
        let html = format!(
            "<dl>{}{}{}</dl>",
            event("priority", "2011-02-01", "Priority to US201161438412P"),
            event("filed", "2012-01-31", "Application filed by Acme"),
            event("granted", "2014-09-16", "Application granted"),
        );
        let doc = Document::from(html);

        let dates = resolve_event_dates(&dom::root(&doc));
        assert_eq!(dates.priority, "2011-02-01");
        assert_eq!(dates.granted, "2014-09-16");
        assert_eq!(dates.publication, "");
        assert_eq!(dates.expiration, "");
    }

    #[test]
    fn test_duplicate_labels_are_last_wins() {
        let html = format!(
            "<dl>{}{}</dl>",
            event("granted", "2014-09-16", "Application granted"),
            event("granted", "2016-01-05", "Reissue granted"),
        );
        let doc = Document::from(html);

        assert_eq!(resolve_event_dates(&dom::root(&doc)).granted, "2016-01-05");
    }

    #[test]
    fn test_expiration_comes_from_title_case_insensitively() {
        let html = format!(
            "<dl>{}{}</dl>",
            event("legal-status", "2032-06-11", "Anticipated EXPIRATION"),
            event("legal-status", "2032-09-01", "Adjusted expiration"),
        );
        let doc = Document::from(html);

        assert_eq!(resolve_event_dates(&dom::root(&doc)).expiration, "2032-09-01");
    }

    #[test]
    fn test_incomplete_events_are_skipped() {
        let html = r#"<dl>
            <dd itemprop="events"><span itemprop="type">granted</span>
                <span itemprop="title">Anticipated expiration</span></dd>
            <dd itemprop="events"><time itemprop="date">2030-01-01</time>
                <span itemprop="title">Anticipated expiration</span></dd>
        </dl>"#;
        let doc = Document::from(html);

        assert_eq!(resolve_event_dates(&dom::root(&doc)), EventDates::default());
    }
}
