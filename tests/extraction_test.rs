use rs_patent_scraper::{extract_html, Citation, Classification, Options, PatentRecord};

const PAGE: &str = include_str!("fixtures/US8834455B2.html");
const URL: &str = "https://patents.google.com/patent/US8834455B2/en";

fn full_record() -> PatentRecord {
    extract_html(PAGE, "US2012192377", URL, &Options::full_text())
        .expect("fixture page should extract")
}

fn citation(number: &str, priority: &str, publication: &str) -> Citation {
    Citation {
        patent_number: number.to_string(),
        priority_date: priority.to_string(),
        publication_date: publication.to_string(),
    }
}

#[test]
fn extracts_bibliographic_fields() {
    let record = full_record();

    assert_eq!(record.title, "Wearable hand tool with interchangeable heads");
    assert_eq!(record.publication_number, "US8834455B2");
    assert_eq!(record.application_number, "US13/362,778");
    assert_eq!(record.filing_date, "2012-01-31");
    assert_eq!(record.legal_status, "Active");
}

#[test]
fn extracts_people_in_document_order() {
    let record = full_record();

    assert_eq!(record.inventors, vec!["Alice Example", "Bob  Builder"]);
    assert_eq!(record.assignee_original, vec!["Acme Tool Works LLC"]);
    assert_eq!(record.assignee_current, vec!["Acme Holdings Inc"]);
}

#[test]
fn resolves_dates_from_direct_fields_and_events() {
    let record = full_record();

    // Direct publication date wins over the earlier `publication` event.
    assert_eq!(record.publication_date, "2014-09-16");
    assert_eq!(record.priority_date, "2011-02-01");
    assert_eq!(record.granted_date, "2014-09-16");
    assert_eq!(record.expiration_date, "2032-06-11");
}

#[test]
fn extracts_all_four_citation_tables() {
    let record = full_record();

    assert_eq!(
        record.backward_citations_no_family,
        vec![
            citation("US5123456A", "1990-05-01", "1992-06-16"),
            citation("US6000001A", "1997-11-20", "1999-12-07"),
        ]
    );
    assert_eq!(
        record.backward_citations_with_family,
        vec![citation("US7000002B1", "2003-03-03", "2006-04-18")]
    );
    assert_eq!(
        record.forward_citations_no_family,
        vec![
            citation("US9500000B2", "2014-01-10", "2016-11-22"),
            citation("US10000003B1", "2016-05-05", "2018-06-19"),
            citation("US20190000004A1", "2017-06-30", ""),
        ]
    );
    assert_eq!(
        record.forward_citations_with_family,
        vec![citation("WO2020123456A1", "2019-02-14", "2020-06-18")]
    );
    assert_eq!(record.citation_count(), 7);
}

#[test]
fn extracts_only_leaf_classifications() {
    let record = full_record();

    assert_eq!(
        record.classifications,
        vec![
            Classification {
                code: "A01B1/00".to_string(),
                description: "Hand tools".to_string(),
            },
            Classification {
                code: "A41D19/0024".to_string(),
                description: "Gloves with accessories".to_string(),
            },
        ]
    );
}

#[test]
fn extracts_requested_text_blocks() {
    let record = full_record();

    assert!(record
        .r#abstract
        .starts_with("A wearable hand tool includes a glove body"));
    assert!(record.r#abstract.ends_with("accepts interchangeable working heads."));

    assert_eq!(
        record.description,
        "Description\nBACKGROUND\nGardeners switch tools frequently.\n\
         Existing gloves do not hold tools.\nSUMMARY\nA glove with a\nmounting plate\nis provided."
    );
    assert_eq!(
        record.claims,
        "Claims (2)\n1. A wearable hand tool comprising a glove body.\n\
         2. The tool of claim 1, further comprising a mounting plate."
    );
}

#[test]
fn passes_identifiers_through_unchanged() {
    let record = full_record();

    assert_eq!(record.requested_identifier, "US2012192377");
    assert_eq!(record.source_url, URL);
}

#[test]
fn parsed_date_views_follow_raw_fields() {
    let record = full_record();

    assert_eq!(record.granted_on().map(|d| d.to_string()).as_deref(), Some("2014-09-16"));
    assert_eq!(record.expires_on().map(|d| d.to_string()).as_deref(), Some("2032-06-11"));
    assert!(record.priority_on() < record.published_on());
}
