use std::path::Path;

use anyhow::Context;
use canon6_common::chunks::{self, PieceCallback};
use canon6_common::success;
use indicatif::{ProgressBar, ProgressStyle};

use crate::terminal::print;

pub async fn chunk(file: &Path, chunk_size: u64, out_dir: Option<&Path>) -> anyhow::Result<()> {
    let total = tokio::fs::metadata(file)
        .await
        .with_context(|| format!("reading metadata of {}", file.display()))?
        .len();

    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::with_template("{spinner:.blue} [{bar:40.green}] {bytes}/{total_bytes}")
            .unwrap(),
    );

    let bar_ref = bar.clone();
    let on_piece_saved: PieceCallback = Box::new(move |piece| {
        bar_ref.inc(piece.len());
    });

    let chunks = chunks::chunk_file(file, chunk_size, out_dir, Some(on_piece_saved)).await?;
    bar.finish_and_clear();

    print::aligned_line("file", file.display());
    print::aligned_line("pieces", chunks.len());
    success!("saved {} chunks to disk", chunks.len());
    Ok(())
}
