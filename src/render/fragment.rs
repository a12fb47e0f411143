//! Block-level WordprocessingML fragment generators.
//!
//! Every generator is a total function returning one fragment that is
//! well-formed on its own and valid as a direct child of `w:body`.

use std::fmt;

use crate::model::{Block, InlineImage, Paragraph, Table, TextRun};

const NS_WP: &str = "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing";
const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_PIC: &str = "http://schemas.openxmlformats.org/drawingml/2006/picture";
const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// One generated block-level XML snippet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fragment(String);

impl Fragment {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Escape XML special characters.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Render any block.
pub fn block(block: &Block) -> Fragment {
    match block {
        Block::Paragraph(para) => paragraph(para),
        Block::Table(t) => table(t),
        Block::Image(image) => inline_image(image),
    }
}

/// Render a paragraph: plain, heading, list item or mixed runs.
pub fn paragraph(para: &Paragraph) -> Fragment {
    let mut xml = String::new();
    write_paragraph(&mut xml, para);
    Fragment(xml)
}

/// Heading paragraph using the `HeadingN` style.
pub fn heading(level: crate::model::HeadingLevel, text: &str) -> Fragment {
    paragraph(&Paragraph::heading(level, text))
}

/// List paragraph referencing numbering instance `num_id` at `level`.
pub fn list_item(num_id: u32, level: u8, text: &str) -> Fragment {
    paragraph(&Paragraph::list_item(num_id, level, text))
}

/// Paragraph made of independently formatted runs.
pub fn mixed_runs(runs: &[TextRun]) -> Fragment {
    paragraph(&Paragraph::from_runs(runs.to_vec()))
}

fn write_paragraph(xml: &mut String, para: &Paragraph) {
    xml.push_str("<w:p>");

    let mut ppr = String::new();
    if let Some(level) = para.heading {
        ppr.push_str(&format!(r#"<w:pStyle w:val="{}"/>"#, level.style_id()));
    }
    if para.props.keep_next {
        ppr.push_str("<w:keepNext/>");
    }
    if para.props.keep_lines {
        ppr.push_str("<w:keepLines/>");
    }
    if para.props.page_break_before {
        ppr.push_str("<w:pageBreakBefore/>");
    }
    if let Some(list) = para.list_info {
        ppr.push_str(&format!(
            r#"<w:numPr><w:ilvl w:val="{}"/><w:numId w:val="{}"/></w:numPr>"#,
            list.level, list.num_id
        ));
    }
    if let Some(alignment) = para.props.alignment {
        ppr.push_str(&format!(r#"<w:jc w:val="{}"/>"#, alignment.as_str()));
    }
    if !ppr.is_empty() {
        xml.push_str("<w:pPr>");
        xml.push_str(&ppr);
        xml.push_str("</w:pPr>");
    }

    for run in &para.runs {
        write_run(xml, run);
    }

    xml.push_str("</w:p>");
}

fn write_run(xml: &mut String, run: &TextRun) {
    xml.push_str("<w:r>");

    let format = &run.format;
    if format.has_formatting() {
        xml.push_str("<w:rPr>");
        if format.bold {
            xml.push_str("<w:b/>");
        }
        if format.italic {
            xml.push_str("<w:i/>");
        }
        if format.strikethrough {
            xml.push_str("<w:strike/>");
        }
        if let Some(ref color) = format.color {
            xml.push_str(&format!(r#"<w:color w:val="{}"/>"#, escape_xml(color)));
        }
        if let Some(ref highlight) = format.highlight {
            xml.push_str(&format!(r#"<w:highlight w:val="{}"/>"#, escape_xml(highlight)));
        }
        if format.underline {
            xml.push_str(r#"<w:u w:val="single"/>"#);
        }
        if let Some(valign) = format.vertical_align {
            xml.push_str(&format!(r#"<w:vertAlign w:val="{}"/>"#, valign.as_str()));
        }
        xml.push_str("</w:rPr>");
    }

    if run.preserve_space {
        xml.push_str(r#"<w:t xml:space="preserve">"#);
    } else {
        xml.push_str("<w:t>");
    }
    xml.push_str(&escape_xml(&run.text));
    xml.push_str("</w:t></w:r>");
}

/// Paragraph holding one inline picture.
pub fn inline_image(image: &InlineImage) -> Fragment {
    let name = escape_xml(&image.name);
    let rel_id = escape_xml(&image.rel_id);
    let (id, cx, cy) = (image.doc_pr_id, image.width, image.height);

    Fragment(format!(
        concat!(
            r#"<w:p><w:r><w:drawing>"#,
            r#"<wp:inline distT="0" distB="0" distL="0" distR="0" xmlns:wp="{wp}" xmlns:a="{a}" xmlns:pic="{pic}">"#,
            r#"<wp:extent cx="{cx}" cy="{cy}"/>"#,
            r#"<wp:docPr id="{id}" name="{name}"/>"#,
            r#"<wp:cNvGraphicFramePr><a:graphicFrameLocks noChangeAspect="1"/></wp:cNvGraphicFramePr>"#,
            r#"<a:graphic><a:graphicData uri="{pic}"><pic:pic>"#,
            r#"<pic:nvPicPr><pic:cNvPr id="{id}" name="{name}"/><pic:cNvPicPr/></pic:nvPicPr>"#,
            r#"<pic:blipFill><a:blip xmlns:r="{r}" r:embed="{rel_id}"/><a:stretch><a:fillRect/></a:stretch></pic:blipFill>"#,
            r#"<pic:spPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></pic:spPr>"#,
            r#"</pic:pic></a:graphicData></a:graphic>"#,
            r#"</wp:inline></w:drawing></w:r></w:p>"#,
        ),
        wp = NS_WP,
        a = NS_A,
        pic = NS_PIC,
        r = NS_R,
        cx = cx,
        cy = cy,
        id = id,
        name = name,
        rel_id = rel_id,
    ))
}

/// Bordered table with a uniform grid.
pub fn table(table: &Table) -> Fragment {
    let mut xml = String::from("<w:tbl>");

    let (outer, inner) = (table.borders.outer, table.borders.inner);
    xml.push_str(r#"<w:tblPr><w:tblW w:w="0" w:type="auto"/><w:tblBorders>"#);
    for edge in ["top", "left", "bottom", "right"] {
        xml.push_str(&format!(r#"<w:{} w:val="single" w:sz="{}"/>"#, edge, outer));
    }
    for edge in ["insideH", "insideV"] {
        xml.push_str(&format!(r#"<w:{} w:val="single" w:sz="{}"/>"#, edge, inner));
    }
    xml.push_str("</w:tblBorders></w:tblPr>");

    xml.push_str("<w:tblGrid>");
    for width in &table.column_widths {
        xml.push_str(&format!(r#"<w:gridCol w:w="{}"/>"#, width));
    }
    xml.push_str("</w:tblGrid>");

    for row in &table.rows {
        xml.push_str("<w:tr>");
        for cell in &row.cells {
            xml.push_str(&format!(
                r#"<w:tc><w:tcPr><w:tcW w:w="{}" w:type="dxa"/></w:tcPr>"#,
                cell.width
            ));
            if cell.content.is_empty() {
                // A cell must end with a paragraph
                xml.push_str("<w:p/>");
            }
            for para in &cell.content {
                write_paragraph(&mut xml, para);
            }
            xml.push_str("</w:tc>");
        }
        xml.push_str("</w:tr>");
    }

    xml.push_str("</w:tbl>");
    Fragment(xml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HeadingLevel, RunFormat, TextAlignment};

    /// Parse a fragment and fail on any XML error.
    fn assert_well_formed(fragment: &Fragment) {
        let mut reader = quick_xml::Reader::from_str(fragment.as_str());
        let mut depth = 0i32;
        loop {
            match reader.read_event() {
                Ok(quick_xml::events::Event::Start(_)) => depth += 1,
                Ok(quick_xml::events::Event::End(_)) => depth -= 1,
                Ok(quick_xml::events::Event::Eof) => break,
                Ok(_) => {}
                Err(e) => panic!("malformed fragment: {}\n{}", e, fragment),
            }
        }
        assert_eq!(depth, 0, "unbalanced fragment: {}", fragment);
    }

    #[test]
    fn test_plain_paragraph() {
        let frag = paragraph(&Paragraph::with_text("Hello"));
        assert_eq!(
            frag.as_str(),
            r#"<w:p><w:r><w:t xml:space="preserve">Hello</w:t></w:r></w:p>"#
        );
    }

    #[test]
    fn test_paragraph_modifiers_follow_schema_order() {
        let para = Paragraph::with_text("x")
            .page_break_before(true)
            .keep_lines(true)
            .keep_next(true);
        let frag = paragraph(&para);
        assert!(frag
            .as_str()
            .starts_with("<w:p><w:pPr><w:keepNext/><w:keepLines/><w:pageBreakBefore/></w:pPr>"));
        assert_well_formed(&frag);
    }

    #[test]
    fn test_heading() {
        let frag = heading(HeadingLevel::H2, "Title");
        assert_eq!(
            frag.as_str(),
            r#"<w:p><w:pPr><w:pStyle w:val="Heading2"/></w:pPr><w:r><w:t>Title</w:t></w:r></w:p>"#
        );
    }

    #[test]
    fn test_list_item() {
        let frag = list_item(1, 2, "Item");
        assert!(frag
            .as_str()
            .contains(r#"<w:numPr><w:ilvl w:val="2"/><w:numId w:val="1"/></w:numPr>"#));
        assert_well_formed(&frag);
    }

    #[test]
    fn test_alignment() {
        let frag = paragraph(&Paragraph::from_runs(vec![TextRun::plain("date")]).aligned(TextAlignment::Right));
        assert_eq!(
            frag.as_str(),
            r#"<w:p><w:pPr><w:jc w:val="right"/></w:pPr><w:r><w:t>date</w:t></w:r></w:p>"#
        );
    }

    #[test]
    fn test_mixed_runs_carry_independent_formats() {
        let runs = vec![
            TextRun::plain("lead "),
            TextRun::formatted("red", RunFormat::new().bold().color("EE0000")),
            TextRun::formatted("mark", RunFormat::new().highlight("yellow")),
            TextRun::formatted("under", RunFormat::new().underline().color("00B050")),
            TextRun::formatted("2", RunFormat::new().superscript()),
        ];
        let frag = mixed_runs(&runs);
        let xml = frag.as_str();

        assert!(xml.contains(r#"<w:rPr><w:b/><w:color w:val="EE0000"/></w:rPr><w:t>red</w:t>"#));
        assert!(xml.contains(r#"<w:rPr><w:highlight w:val="yellow"/></w:rPr>"#));
        assert!(xml.contains(r#"<w:rPr><w:color w:val="00B050"/><w:u w:val="single"/></w:rPr>"#));
        assert!(xml.contains(r#"<w:vertAlign w:val="superscript"/>"#));
        assert_eq!(xml.matches("<w:r>").count(), 5);
        assert_eq!(xml.matches("<w:rPr>").count(), 4);
        assert_well_formed(&frag);
    }

    #[test]
    fn test_text_is_escaped() {
        let frag = paragraph(&Paragraph::with_text("a < b & \"c\""));
        assert!(frag.as_str().contains("a &lt; b &amp; &quot;c&quot;"));
        assert_well_formed(&frag);
    }

    #[test]
    fn test_inline_image() {
        let image = InlineImage::new("rId4", 1002, "medium-image", 2_743_200, 2_057_400);
        let frag = inline_image(&image);
        let xml = frag.as_str();

        assert!(xml.contains(r#"<wp:extent cx="2743200" cy="2057400"/>"#));
        assert!(xml.contains(r#"<a:ext cx="2743200" cy="2057400"/>"#));
        assert!(xml.contains(r#"<wp:docPr id="1002" name="medium-image"/>"#));
        assert!(xml.contains(r#"r:embed="rId4""#));
        assert_well_formed(&frag);
    }

    #[test]
    fn test_table() {
        let t = Table::uniform(6, 4, 2400, |r, c| format!("R{}C{}", r, c));
        let frag = table(&t);
        let xml = frag.as_str();

        assert_eq!(xml.matches("<w:gridCol ").count(), 4);
        assert_eq!(xml.matches("<w:tr>").count(), 6);
        assert_eq!(xml.matches("<w:tc>").count(), 24);
        assert!(xml.contains(r#"<w:top w:val="single" w:sz="8"/>"#));
        assert!(xml.contains(r#"<w:insideV w:val="single" w:sz="6"/>"#));
        assert!(xml.contains("<w:t>R6C4</w:t>"));
        assert_well_formed(&frag);
    }

    #[test]
    fn test_deterministic() {
        let t = Table::uniform(3, 3, 2400, |r, c| format!("{}-{}", r, c));
        assert_eq!(table(&t), table(&t));
    }
}
