//! Integration tests for the APA renderer.

use apadoc::{
    format_text, parse, render, Alignment, ApaRenderer, Element, FieldKind, InlineContent, Length,
    Paragraph, ReferenceOrder, RenderOptions, StyleConfig, StyledDocument, TextStyle,
    TitleMetadata,
};

/// Split the body into pages at hard page breaks.
fn pages(doc: &StyledDocument) -> Vec<Vec<&Paragraph>> {
    let mut pages = vec![Vec::new()];
    for element in &doc.body {
        match element {
            Element::Paragraph(p) => pages.last_mut().unwrap().push(p),
            Element::PageBreak => pages.push(Vec::new()),
        }
    }
    pages
}

fn full_metadata() -> TitleMetadata {
    TitleMetadata::new("The Impact of Technology in Modern Education")
        .with_author("Jane Doe")
        .with_institution("University of Technology")
        .with_course("EDU-601: Educational Technology")
        .with_instructor("Dr. Alan Turing")
        .with_date("October 16, 2025")
}

#[test]
fn test_three_pages_with_references() {
    let doc = format_text(&full_metadata(), "# Introduction\nBody.\n---\nA, A. (2000).");
    assert_eq!(doc.page_count(), 3);
    assert_eq!(pages(&doc).len(), 3);
}

#[test]
fn test_title_page_layout() {
    let doc = format_text(&full_metadata(), "Body.");
    let title_page = &pages(&doc)[0];

    assert!(title_page[..3].iter().all(|p| p.is_empty()));

    let title = title_page[3];
    assert_eq!(title.plain_text(), "The Impact of Technology in Modern Education");
    assert_eq!(title.format.alignment, Alignment::Center);
    assert!(title.runs().all(|r| r.style == TextStyle::BOLD));

    assert!(title_page[4].is_empty());

    let info: Vec<String> = title_page[5..].iter().map(|p| p.plain_text()).collect();
    assert_eq!(
        info,
        vec![
            "Jane Doe",
            "University of Technology",
            "EDU-601: Educational Technology",
            "Dr. Alan Turing",
            "October 16, 2025",
        ]
    );
    assert!(title_page[5..]
        .iter()
        .all(|p| p.format.alignment == Alignment::Center));
}

#[test]
fn test_title_page_field_omission() {
    let metadata = TitleMetadata::new("Paper")
        .with_author("Jane Doe")
        .with_institution("University of Technology")
        .with_course("EDU-601")
        .with_date("October 16, 2025");

    let doc = format_text(&metadata, "Body.");
    let title_page = &pages(&doc)[0];

    let info: Vec<String> = title_page[5..].iter().map(|p| p.plain_text()).collect();
    assert_eq!(
        info,
        vec![
            "Jane Doe",
            "University of Technology",
            "EDU-601",
            "October 16, 2025"
        ]
    );
    assert!(title_page[5..].iter().all(|p| !p.is_empty()));
}

#[test]
fn test_heading_levels_one_to_three() {
    let doc = format_text(&TitleMetadata::new("T"), "# One\n## Two\n### Three");
    let body = &pages(&doc)[1];

    assert_eq!(body[0].format.alignment, Alignment::Center);
    assert_eq!(body[0].runs().next().unwrap().style, TextStyle::BOLD);

    assert_eq!(body[1].format.alignment, Alignment::Left);
    assert_eq!(body[1].runs().next().unwrap().style, TextStyle::BOLD);

    assert_eq!(body[2].format.alignment, Alignment::Left);
    assert_eq!(body[2].runs().next().unwrap().style, TextStyle::BOLD_ITALIC);

    assert!(body.iter().all(|p| p.format.left_indent.is_none()));
}

#[test]
fn test_run_in_binding() {
    let parsed = parse("#### Notable Study.\nThe text follows.");
    let doc = render(&TitleMetadata::new("T"), &parsed.blocks, &parsed.references);
    let body = &pages(&doc)[1];

    assert_eq!(body.len(), 1);
    let paragraph = body[0];
    assert_eq!(paragraph.format.left_indent, Some(Length::inches(0.5)));

    let runs: Vec<_> = paragraph.runs().collect();
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].text, "Notable Study. ");
    assert_eq!(runs[0].style, TextStyle::BOLD);
    assert_eq!(runs[1].text, "The text follows.");
    assert!(!runs[1].style.has_styling());
}

#[test]
fn test_run_in_level_five_adds_period() {
    let doc = format_text(&TitleMetadata::new("T"), "##### Side Note\nDetails here.");
    let body = &pages(&doc)[1];

    let runs: Vec<_> = body[0].runs().collect();
    assert_eq!(runs[0].text, "Side Note. ");
    assert_eq!(runs[0].style, TextStyle::BOLD_ITALIC);
    assert_eq!(runs[1].text, "Details here.");
}

#[test]
fn test_run_in_degradation() {
    let doc = format_text(&TitleMetadata::new("T"), "#### Lonely Heading\n## Next Heading");
    let body = &pages(&doc)[1];

    assert_eq!(body.len(), 2);

    let lonely = body[0];
    assert_eq!(lonely.runs().count(), 1);
    assert_eq!(lonely.plain_text(), "Lonely Heading.");
    assert_eq!(lonely.runs().next().unwrap().style, TextStyle::BOLD);
    assert_eq!(lonely.format.left_indent, Some(Length::inches(0.5)));

    assert_eq!(body[1].plain_text(), "Next Heading");
}

#[test]
fn test_run_in_before_formula_degrades() {
    let doc = format_text(&TitleMetadata::new("T"), "##### Equation\n`x = 1`");
    let body = &pages(&doc)[1];

    assert_eq!(body.len(), 2);
    assert_eq!(body[0].plain_text(), "Equation.");
    assert_eq!(body[0].runs().count(), 1);
    assert_eq!(body[0].runs().next().unwrap().style, TextStyle::BOLD_ITALIC);
    assert_eq!(body[0].format.left_indent, Some(Length::inches(0.5)));
    assert_eq!(body[1].plain_text(), "x = 1");
}

#[test]
fn test_run_in_question_gets_period() {
    let doc = format_text(&TitleMetadata::new("T"), "#### Why?
Because.");
    let body = &pages(&doc)[1];

    let runs: Vec<_> = body[0].runs().collect();
    assert_eq!(runs[0].text, "Why?. ");
    assert_eq!(runs[1].text, "Because.");
}

#[test]
fn test_paragraph_and_formula_styles() {
    let doc = format_text(&TitleMetadata::new("T"), "Plain body.\n`E = mc^2`");
    let body = &pages(&doc)[1];

    assert_eq!(body[0].format.first_line_indent, Some(Length::inches(0.5)));
    assert_eq!(body[0].format.alignment, Alignment::Left);

    assert_eq!(body[1].format.alignment, Alignment::Center);
    let run = body[1].runs().next().unwrap();
    assert_eq!(run.text, "E = mc^2");
    assert_eq!(run.style, TextStyle::ITALIC);
}

#[test]
fn test_references_page() {
    let text = "Body.\n\nReferences\nZeta, Z. (2001). Last.\n\nAlpha, A. (1999). First.";
    let doc = format_text(&TitleMetadata::new("T"), text);
    let refs = &pages(&doc)[2];

    assert_eq!(refs[0].plain_text(), "References");
    assert_eq!(refs[0].format.alignment, Alignment::Center);
    assert_eq!(refs[0].runs().next().unwrap().style, TextStyle::BOLD);

    let entries: Vec<String> = refs[1..].iter().map(|p| p.plain_text()).collect();
    assert_eq!(entries, vec!["Zeta, Z. (2001). Last.", "Alpha, A. (1999). First."]);

    for entry in &refs[1..] {
        assert_eq!(entry.format.left_indent, Some(Length::inches(0.5)));
        assert_eq!(entry.format.first_line_indent, Some(Length::inches(-0.5)));
    }
}

#[test]
fn test_alphabetical_references() {
    let parsed = parse("---\nzeta, Z. (2001).\nAlpha, A. (1999).\nbeta, B. (2000).");
    let options = RenderOptions::default().with_reference_order(ReferenceOrder::Alphabetical);
    let renderer = ApaRenderer::new(options);
    let doc = renderer.render(&TitleMetadata::new("T"), &parsed.blocks, &parsed.references);

    let refs = &pages(&doc)[2];
    let entries: Vec<String> = refs[1..].iter().map(|p| p.plain_text()).collect();
    assert_eq!(
        entries,
        vec!["Alpha, A. (1999).", "beta, B. (2000).", "zeta, Z. (2001)."]
    );
}

#[test]
fn test_no_references_section_when_empty() {
    let doc = format_text(&TitleMetadata::new("T"), "# Intro\nBody.");

    let breaks = doc
        .body
        .iter()
        .filter(|e| matches!(e, Element::PageBreak))
        .count();
    assert_eq!(breaks, 2);
    assert_eq!(doc.page_count(), 3);
    assert!(pages(&doc)[2].is_empty());
    assert!(!doc.plain_text().contains("References"));
}

#[test]
fn test_page_number_header() {
    let doc = format_text(&TitleMetadata::new("T"), "Body.");
    let header = doc.header.as_ref().unwrap();

    assert_eq!(header.format.alignment, Alignment::Right);
    assert_eq!(
        header.content,
        vec![InlineContent::Field(FieldKind::PageNumber)]
    );
}

#[test]
fn test_page_numbers_disabled() {
    let options = RenderOptions::default().with_style(StyleConfig::apa().with_page_numbers(false));
    let doc = ApaRenderer::new(options).render(&TitleMetadata::new("T"), &[], &[]);
    assert!(doc.header.is_none());
}

#[test]
fn test_document_properties() {
    let doc = format_text(&full_metadata(), "Body.");
    assert_eq!(
        doc.properties.title.as_deref(),
        Some("The Impact of Technology in Modern Education")
    );
    assert_eq!(doc.properties.author.as_deref(), Some("Jane Doe"));
}

#[test]
fn test_empty_body() {
    let doc = format_text(&TitleMetadata::new("T"), "");
    let pages = pages(&doc);
    assert_eq!(pages.len(), 3);
    assert!(pages[1].is_empty());
    assert!(pages[2].is_empty());
}
