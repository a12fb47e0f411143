//! Full-coverage layout: every feature once, in a short document.

use super::{interleave, style_samples, ComposedDocument, Composer, FixtureOptions};
use crate::docx::{ImageSize, BULLETED_LIST, NUMBERED_LIST};
use crate::model::{HeadingLevel, Paragraph, Table, TextRun, DEFAULT_COLUMN_WIDTH};

/// First drawing object id; the three images take consecutive ids.
const FIRST_IMAGE_ID: u32 = 1001;

pub(crate) fn compose(options: &FixtureOptions) -> ComposedDocument {
    let mut doc = Composer::new(options.page_setup);

    doc.heading(HeadingLevel::H1, "一级标题：Word 高保真渲染综合测试")
        .paragraph("这是一段普通正文，用于测试默认字体、字号、行距、段后间距和换行表现。")
        .paragraph(
            "第二段正文：系统需要兼容中文、English words、1234567890、全角标点（，。；：）与半角标点 (,.;:)。",
        );

    doc.heading(HeadingLevel::H2, "二级标题：列表能力验证")
        .list_item(NUMBERED_LIST, 0, "编号列表一级：需求分析与范围确认")
        .list_item(NUMBERED_LIST, 1, "编号列表二级：页面布局、文本渲染、交互编辑")
        .list_item(NUMBERED_LIST, 1, "编号列表二级：图片管线、字体回退、分页规则")
        .list_item(NUMBERED_LIST, 0, "编号列表一级：测试覆盖与回归门禁")
        .list_item(BULLETED_LIST, 0, "项目要点（项目符号一级）")
        .list_item(BULLETED_LIST, 1, "项目符号二级：支持粘贴 Word / WPS / Google Docs")
        .list_item(BULLETED_LIST, 1, "项目符号二级：支持 run 级样式与段落级样式");

    doc.heading(HeadingLevel::H3, "三级标题：段内样式验证")
        .push(inline_style_paragraph())
        .paragraph("同一段中继续测试上标x²、下标H₂O、以及不同字重与颜色组合。");

    doc.heading(HeadingLevel::H2, "二级标题：表格能力验证")
        .paragraph("下表用于验证表格网格、单元格宽度、内外边框粗细与单元格内换行。")
        .push(Table::uniform(
            options.table_rows,
            options.table_columns,
            DEFAULT_COLUMN_WIDTH,
            |r, c| format!("第 {} 行第 {} 列", r, c),
        ));

    doc.heading(HeadingLevel::H2, "二级标题：图片尺寸验证（小/中/大）")
        .paragraph("以下三张图片分别设置为小图、中图和大图，用于验证图片尺寸映射、缩放和版心约束。");
    for (id, size) in (FIRST_IMAGE_ID..).zip(ImageSize::ALL) {
        doc.image(size, id, size.label());
    }

    doc.heading(HeadingLevel::H2, "二级标题：结尾段落")
        .paragraph("最后一段用于验证尾部留白、日期段对齐和分页边界行为。")
        .sign_off();

    doc.finish()
}

/// Mixed-format paragraph listing each character style once.
fn inline_style_paragraph() -> Paragraph {
    let mut runs = vec![TextRun::plain("本段用于测试段内混合样式：")];
    runs.extend(interleave(style_samples("黄色高亮"), "、"));
    runs.push(TextRun::plain("。"));
    Paragraph::from_runs(runs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Block;

    #[test]
    fn test_heading_counts() {
        let doc = compose(&FixtureOptions::full_coverage());
        assert_eq!(doc.body.heading_count(HeadingLevel::H1), 1);
        assert_eq!(doc.body.heading_count(HeadingLevel::H2), 4);
        assert_eq!(doc.body.heading_count(HeadingLevel::H3), 1);
    }

    #[test]
    fn test_inline_style_paragraph() {
        let para = inline_style_paragraph();
        assert_eq!(para.runs.len(), 11);
        assert_eq!(para.formatted_run_count(), 5);
        assert_eq!(
            para.plain_text(),
            "本段用于测试段内混合样式：红色加粗、蓝色斜体、绿色下划线、黄色高亮、删除线。"
        );
    }

    #[test]
    fn test_images_have_distinct_sizes_and_ids() {
        let doc = compose(&FixtureOptions::full_coverage());
        let images: Vec<_> = doc.body.images().collect();
        assert_eq!(images.len(), 3);

        let ids: Vec<u32> = images.iter().map(|i| i.doc_pr_id).collect();
        assert_eq!(ids, vec![1001, 1002, 1003]);
        assert_eq!(images[0].name, "small-image");
        assert_eq!(images[2].rel_id, "rId5");
        assert!(images[0].width < images[1].width && images[1].width < images[2].width);
    }

    #[test]
    fn test_lists_cover_both_instances() {
        let doc = compose(&FixtureOptions::full_coverage());
        let items: Vec<_> = doc.body.paragraphs().filter_map(|p| p.list_info).collect();
        assert_eq!(items.len(), 7);
        assert_eq!(items.iter().filter(|i| i.num_id == NUMBERED_LIST).count(), 4);
        assert_eq!(items.iter().filter(|i| i.num_id == BULLETED_LIST).count(), 3);
        assert!(items.iter().all(|i| i.level <= 1));
    }

    #[test]
    fn test_table_section_and_closing_date() {
        let doc = compose(&FixtureOptions::full_coverage());
        let table = doc.body.tables().next().unwrap();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 3);

        match doc.body.blocks.last() {
            Some(Block::Paragraph(p)) => assert_eq!(p.plain_text(), crate::compose::SIGN_OFF_DATE),
            other => panic!("unexpected last block: {:?}", other),
        }
        assert!(doc.xml.contains("<w:t>2026 年 2 月 13 日</w:t>"));
    }

    #[test]
    fn test_loop_options_do_not_change_layout() {
        let base = compose(&FixtureOptions::full_coverage());
        let varied = compose(
            &FixtureOptions::full_coverage()
                .with_sections(5)
                .with_paragraphs(9)
                .with_page_breaks([1, 2]),
        );
        assert_eq!(base, varied);
    }
}
