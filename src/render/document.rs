//! `word/document.xml` assembly.

use super::fragment::{self, Fragment};
use crate::docx::templates::{DOCUMENT_CLOSE, DOCUMENT_OPEN};
use crate::model::{Body, PageSetup};

/// Render every block of a body, in order.
pub fn body_fragments(body: &Body) -> Vec<Fragment> {
    body.blocks.iter().map(fragment::block).collect()
}

/// Render the final `w:sectPr`.
pub fn section_properties(page: &PageSetup) -> String {
    format!(
        concat!(
            "<w:sectPr>",
            r#"<w:pgSz w:w="{}" w:h="{}"/>"#,
            r#"<w:pgMar w:top="{}" w:right="{}" w:bottom="{}" w:left="{}" w:header="{}" w:footer="{}" w:gutter="{}"/>"#,
            r#"<w:cols w:space="{}"/>"#,
            r#"<w:docGrid w:type="lines" w:linePitch="{}"/>"#,
            "</w:sectPr>",
        ),
        page.width,
        page.height,
        page.margin_top,
        page.margin_right,
        page.margin_bottom,
        page.margin_left,
        page.header,
        page.footer,
        page.gutter,
        page.column_space,
        page.line_pitch,
    )
}

/// Join fragments and wrap them in the document template.
pub fn document_xml(fragments: &[Fragment], page: &PageSetup) -> String {
    let body_len: usize = fragments.iter().map(|f| f.len() + 5).sum();
    let mut xml = String::with_capacity(DOCUMENT_OPEN.len() + body_len + 512);

    xml.push_str(DOCUMENT_OPEN);
    for fragment in fragments {
        xml.push_str("    ");
        xml.push_str(fragment.as_str());
        xml.push('\n');
    }
    xml.push_str("    ");
    xml.push_str(&section_properties(page));
    xml.push('\n');
    xml.push_str(DOCUMENT_CLOSE);
    xml
}

/// Render a body straight to `word/document.xml`.
pub fn to_document_xml(body: &Body, page: &PageSetup) -> String {
    document_xml(&body_fragments(body), page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HeadingLevel, Paragraph};

    #[test]
    fn test_section_properties_default() {
        let xml = section_properties(&PageSetup::default());
        assert!(xml.contains(r#"<w:pgSz w:w="11906" w:h="16838"/>"#));
        assert!(xml.contains(r#"w:header="851" w:footer="992" w:gutter="0""#));
        assert!(xml.contains(r#"<w:cols w:space="425"/>"#));
        assert!(xml.contains(r#"w:linePitch="312""#));
    }

    #[test]
    fn test_document_wraps_body_in_order() {
        let mut body = Body::new();
        body.push(Paragraph::heading(HeadingLevel::H1, "First"));
        body.push(Paragraph::with_text("Second"));

        let xml = to_document_xml(&body, &PageSetup::default());
        assert!(xml.starts_with("<?xml"));
        assert!(xml.trim_end().ends_with("</w:document>"));

        let first = xml.find("First").unwrap();
        let second = xml.find("Second").unwrap();
        let sect = xml.find("<w:sectPr>").unwrap();
        assert!(first < second && second < sect);
    }

    #[test]
    fn test_empty_body() {
        let xml = to_document_xml(&Body::new(), &PageSetup::default());
        assert!(xml.contains("<w:body>"));
        assert!(xml.contains("<w:sectPr>"));
    }
}
