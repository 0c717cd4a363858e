use crate::core::geometry::BBox;
use crate::core::model::SentenceSpan;

#[derive(Debug, Clone, PartialEq)]
pub struct LineOutline {
    pub line_number: usize,
    pub rect: BBox,
}

/// Collapses a span into one axis-aligned rectangle per distinct
/// `line_number`, grouped across the whole span in first-seen order.
pub fn line_outlines(span: &SentenceSpan) -> Vec<LineOutline> {
    let mut outlines: Vec<LineOutline> = Vec::new();

    for block in &span.blocks {
        match outlines
            .iter_mut()
            .find(|outline| outline.line_number == block.line_number)
        {
            Some(outline) => outline.rect = outline.rect.union(&block.bbox),
            None => outlines.push(LineOutline {
                line_number: block.line_number,
                rect: block.bbox,
            }),
        }
    }

    outlines
}

/// Renders the span's outlines as a path string: one closed rectangle per
/// line group, concatenated in encounter order. An empty span yields an
/// empty string.
pub fn outline_path(span: &SentenceSpan) -> String {
    line_outlines(span)
        .iter()
        .map(|outline| {
            let r = outline.rect;
            format!(
                "M {} {} L {} {} L {} {} L {} {} Z",
                r.x0, r.y0, r.x1, r.y0, r.x1, r.y1, r.x0, r.y1
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}
