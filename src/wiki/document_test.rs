use super::document::*;
use chrono::NaiveDate;

const PEOPLE_SECTIONS: &[&str] = &["Appearances", "Notes"];

const PAGE: &str = "# People

## Alice Smith

### Appearances
- [[2024-01-15]]: Coffee downtown

### Notes

Best friend from college.
## not a heading here

";

#[test]
fn parse_splits_title_name_and_sections() {
    let doc = WikiDocument::parse(PAGE, PEOPLE_SECTIONS);

    assert_eq!(doc.title.as_deref(), Some("People"));
    assert_eq!(doc.name.as_deref(), Some("Alice Smith"));
    assert_eq!(doc.sections.len(), 2);
    assert_eq!(doc.sections[0].header, "Appearances");
    assert_eq!(doc.sections[1].header, "Notes");
}

#[test]
fn text_trims_blank_lines_and_keeps_inner_headings() {
    let doc = WikiDocument::parse(PAGE, PEOPLE_SECTIONS);

    assert_eq!(
        doc.text("Notes").as_deref(),
        Some("Best friend from college.\n## not a heading here")
    );
}

#[test]
fn parse_keeps_unknown_headings_in_body() {
    let content = "# Themes\n\n## Grief\n\n### Description\nLoss.\n\n### Early years\nFirst funeral.\n\n### Entries\n- [[2024-01-15]]\n";
    let doc = WikiDocument::parse(content, &["Description", "Entries"]);

    assert_eq!(doc.sections.len(), 2);
    assert_eq!(
        doc.text("Description").as_deref(),
        Some("Loss.\n\n### Early years\nFirst funeral.")
    );
    assert_eq!(doc.text("Entries").as_deref(), Some("- [[2024-01-15]]"));
}

#[test]
fn text_of_missing_or_blank_section_is_none() {
    let doc = WikiDocument::parse(
        "# Themes\n\n## Grief\n\n### Description\n\n\n",
        &["Description", "Entries"],
    );

    assert_eq!(doc.text("Description"), None);
    assert_eq!(doc.text("Entries"), None);
}

#[test]
fn parse_without_name_heading() {
    let doc = WikiDocument::parse("# People\n\nJust some prose\n", PEOPLE_SECTIONS);

    assert_eq!(doc.title.as_deref(), Some("People"));
    assert!(doc.name.is_none());
    assert!(doc.sections.is_empty());
}

#[test]
fn builder_output_parses_back() {
    let lines = WikiBuilder::new("Events", "Winter Trip")
        .section_if_any("People", Vec::new())
        .section("Entries", vec!["- [[2024-01-15]]".to_string()])
        .text_section("Notes", Some("Cold.\nVery cold."))
        .build();

    let doc = WikiDocument::parse(&lines.join("\n"), &["People", "Entries", "Notes"]);

    assert!(doc.section("People").is_none());
    assert_eq!(doc.text("Entries").as_deref(), Some("- [[2024-01-15]]"));
    assert_eq!(doc.text("Notes").as_deref(), Some("Cold.\nVery cold."));
}

#[test]
fn text_section_header_is_always_emitted() {
    let lines = WikiBuilder::new("Cities", "Montreal")
        .text_section("Notes", None)
        .build();

    assert_eq!(lines.last().map(String::as_str), Some("### Notes"));
}

#[test]
fn slugify_rules() {
    assert_eq!(slugify("Alice Smith"), "alice_smith");
    assert_eq!(slugify("Cafe/Bar"), "cafe-bar");
    assert_eq!(slugify("bob"), "bob");
}

#[test]
fn links() {
    assert_eq!(wikilink("Alice Smith"), "[[alice_smith|Alice Smith]]");
    assert_eq!(wikilink("coffee"), "[[coffee]]");

    let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
    assert_eq!(date_link(&date), "[[2024-01-05]]");
    assert_eq!(date_list(&[date]), vec!["- [[2024-01-05]]"]);
    assert_eq!(
        name_list(&["Bob".to_string()]),
        vec!["- [[bob|Bob]]".to_string()]
    );
}
