//! End-to-end chunker behavior against a real filesystem.

use std::path::PathBuf;

use canon6_common::chunks;

async fn scratch_dir(name: &str) -> anyhow::Result<PathBuf> {
    let dir = std::env::temp_dir().join(format!("canon6-it-{name}"));
    let _ = tokio::fs::remove_dir_all(&dir).await;
    tokio::fs::create_dir_all(&dir).await?;
    Ok(dir)
}

#[tokio::test]
async fn chunk_and_reassemble() -> anyhow::Result<()> {
    let dir = scratch_dir("reassemble").await?;
    let source = dir.join("payload.bin");
    let payload: Vec<u8> = (0u16..2048).map(|n| (n % 251) as u8).collect();
    tokio::fs::write(&source, &payload).await?;

    let chunks = chunks::chunk_file(&source, 512, None, None).await?;
    assert_eq!(chunks.len(), 4);

    let mut rebuilt: Vec<u8> = Vec::new();
    for chunk in &chunks {
        rebuilt.extend(chunk.load().await?);
    }
    assert_eq!(rebuilt, payload);

    Ok(())
}

#[tokio::test]
async fn identical_pieces_share_a_checksum_but_not_a_name() -> anyhow::Result<()> {
    let dir = scratch_dir("names").await?;
    let source = dir.join("repeat.bin");
    tokio::fs::write(&source, [7u8; 1024]).await?;

    let chunks = chunks::chunk_file(&source, 512, None, None).await?;
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].checksum(), chunks[1].checksum());
    // The offset embedded in the name keeps equal-content pieces apart.
    assert_ne!(chunks[0].path(), chunks[1].path());

    Ok(())
}
