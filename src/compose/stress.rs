//! Stress layout: numbered sections repeating every feature.

use super::options::{nth, MAX_PARAGRAPHS, MAX_SECTIONS};
use super::{interleave, style_samples, ComposedDocument, Composer, FixtureOptions};
use crate::docx::{ImageSize, BULLETED_LIST, NUMBERED_LIST};
use crate::model::{
    HeadingLevel, Paragraph, RunFormat, Table, TextRun, DEFAULT_COLUMN_WIDTH,
};

const BODY_TEXT: &str = "这是一段较长文本，用于测试行高、段间距、换行、标点与中英混排。Performance baseline and fidelity alignment are both required.";

/// Suffixes of the numbered items at levels 0, 1 and 2.
const NUMBERED_SUFFIXES: [&str; 3] = ["", ".a", ".a.i"];
const NUMBERED_LABELS: [&str; 3] = ["编号一级", "编号二级", "编号三级"];
const BULLETED_LABELS: [&str; 3] = ["项目符号一级", "项目符号二级", "项目符号三级"];

pub(crate) fn compose(options: &FixtureOptions) -> ComposedDocument {
    let mut doc = Composer::new(options.page_setup);

    doc.heading(HeadingLevel::H1, "Word 高保真渲染极限压力测试文档")
        .paragraph("本文件用于综合验证标题、段落、列表、图片、表格、分页与keep规则在长文档中的稳定性。");

    for section in 1..=options.sections.min(MAX_SECTIONS) {
        write_section(&mut doc, options, section);
    }

    doc.heading(HeadingLevel::H2, "结尾签名区")
        .paragraph("请验证尾部段落、日期对齐和图片后流式排版是否稳定。")
        .sign_off();

    doc.finish()
}

fn write_section(doc: &mut Composer, options: &FixtureOptions, section: u32) {
    let depth = usize::from(options.numbering.depth()).min(NUMBERED_LABELS.len());

    doc.heading(HeadingLevel::H2, format!("章节 {}: 长文本与格式混排", section))
        .push(Paragraph::with_text(format!("章节 {} 导语段。", section)).keep_next(true));

    for i in 1..=options.paragraphs_per_section.min(MAX_PARAGRAPHS) {
        let text = format!("章节 {} - 段落 {}: {}", section, i, BODY_TEXT);
        doc.push(Paragraph::with_text(text).keep_lines(nth(options.keep_lines_every, i)));
        if nth(options.mixed_runs_every, i) {
            doc.push(mixed_run_paragraph(section * 100 + i));
        }
    }

    doc.heading(HeadingLevel::H3, format!("章节 {}: 多级编号列表", section));
    for i in 1..=options.numbered_items {
        for level in 0..depth {
            let text = format!(
                "{} {}.{}{}",
                NUMBERED_LABELS[level], section, i, NUMBERED_SUFFIXES[level]
            );
            doc.list_item(NUMBERED_LIST, level as u8, text);
        }
    }

    doc.heading(HeadingLevel::H3, format!("章节 {}: 多级项目符号", section));
    for i in 1..=options.bulleted_items {
        for (level, label) in BULLETED_LABELS.iter().take(depth).enumerate() {
            doc.list_item(BULLETED_LIST, level as u8, format!("{} {}.{}", label, section, i));
        }
    }

    if options.has_table(section) {
        doc.heading(HeadingLevel::H3, format!("章节 {}: 表格块", section))
            .push(Table::uniform(
                options.table_rows,
                options.table_columns,
                DEFAULT_COLUMN_WIDTH,
                |r, c| format!("R{}C{} 表格单元格测试：长文本用于验证换行与padding。", r, c),
            ));
    }

    if options.has_images(section) {
        doc.heading(HeadingLevel::H3, format!("章节 {}: 图片块（小中大）", section));
        for (k, size) in (1..).zip(ImageSize::ALL) {
            let id = 2000 + section * 10 + k;
            doc.image(size, id, format!("img-{}", id));
        }
    }

    if options.has_page_break(section) {
        doc.push(
            Paragraph::with_text(format!("章节 {} 强制分页段（pageBreakBefore）。", section))
                .page_break_before(true),
        );
    }
}

/// Mixed-format paragraph labelled with `seed`, ending in super- and subscripts.
fn mixed_run_paragraph(seed: u32) -> Paragraph {
    let mut runs = vec![TextRun::plain(format!("混合样式段 {}: ", seed))];
    runs.extend(interleave(style_samples("高亮"), " / "));
    runs.extend([
        TextRun::plain(" / 上标x"),
        TextRun::formatted("2", RunFormat::new().superscript()),
        TextRun::plain(" 下标H"),
        TextRun::formatted("2", RunFormat::new().subscript()),
        TextRun::plain("O"),
    ]);
    Paragraph::from_runs(runs)
}
