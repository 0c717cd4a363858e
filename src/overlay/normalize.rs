use crate::core::model::WordBlock;

/// Unifies vertical extents per maximal contiguous run of blocks sharing the
/// same `(paragraph_number, line_number)` pair: every member of a run gets
/// the run's min `y0` and max `y1`. Grouping is by adjacency, not by value
/// equality across the document; separated runs that happen to repeat a pair
/// (the engine renumbers across blocks) stay independent bands.
pub fn normalize_line_bands(word_blocks: Vec<WordBlock>) -> Vec<WordBlock> {
    let mut result: Vec<WordBlock> = Vec::with_capacity(word_blocks.len());
    let mut run: Vec<WordBlock> = Vec::new();
    let mut run_key: Option<(usize, usize)> = None;
    let mut run_y0 = f32::INFINITY;
    let mut run_y1 = f32::NEG_INFINITY;

    for block in word_blocks {
        if run_key != Some(block.line_key()) {
            flush_run(&mut run, run_y0, run_y1, &mut result);
            run_y0 = f32::INFINITY;
            run_y1 = f32::NEG_INFINITY;
            run_key = Some(block.line_key());
        }

        run_y0 = run_y0.min(block.bbox.y0);
        run_y1 = run_y1.max(block.bbox.y1);
        run.push(block);
    }

    flush_run(&mut run, run_y0, run_y1, &mut result);
    result
}

fn flush_run(run: &mut Vec<WordBlock>, y0: f32, y1: f32, out: &mut Vec<WordBlock>) {
    for mut block in run.drain(..) {
        block.bbox.y0 = y0;
        block.bbox.y1 = y1;
        out.push(block);
    }
}
