//! Splits a file into fixed-size pieces written to disk under
//! checksum-derived names.
//!
//! Each piece is named `{sha256}_{offset}_{source-name}`, so a re-run
//! over unchanged content finds its pieces already on disk and skips the
//! writes. Every file handle is scoped to a single call; nothing is held
//! across calls.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use sha2::{Digest, Sha256};
use tokio::fs::{self, File, OpenOptions};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::info;

pub const KILOBYTE: u64 = 1024;
pub const MEGABYTE: u64 = 1024 * KILOBYTE;
pub const GIGABYTE: u64 = 1024 * MEGABYTE;

/// Default piece size for [`chunk_file`].
pub const DEFAULT_CHUNK_SIZE: u64 = 69 * MEGABYTE;

/// Called after each piece reaches disk.
pub type PieceCallback = Box<dyn Fn(&Chunk) + Send + Sync>;

/// One piece of a chunked file, saved under its checksum-derived name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    path: PathBuf,
    offset: u64,
    len: u64,
    checksum: String,
}

impl Chunk {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Byte offset of this piece within the source file.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Hex SHA-256 of the piece's content.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// Writes the piece to its path. A piece already on disk is left
    /// alone: the name pins the content, so rewriting it buys nothing.
    pub async fn save(&self, buffer: &[u8]) -> anyhow::Result<()> {
        if fs::try_exists(&self.path).await? {
            info!("chunk file {} already exists", self.path.display());
            return Ok(());
        }

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .open(&self.path)
            .await
            .with_context(|| format!("creating chunk file {}", self.path.display()))?;
        file.write_all(buffer).await?;
        file.flush().await?;

        Ok(())
    }

    /// Reads the piece back from disk.
    pub async fn load(&self) -> anyhow::Result<Vec<u8>> {
        fs::read(&self.path)
            .await
            .with_context(|| format!("loading chunk file {}", self.path.display()))
    }
}

/// Splits the file at `path` into `chunk_size`-byte pieces and saves each
/// into `out_dir` (default: the source file's directory), named by its
/// checksum. The final piece holds whatever remains and may be shorter.
pub async fn chunk_file(
    path: &Path,
    chunk_size: u64,
    out_dir: Option<&Path>,
    on_piece_saved: Option<PieceCallback>,
) -> anyhow::Result<Vec<Chunk>> {
    if chunk_size == 0 {
        bail!("chunk size must be non-zero");
    }

    let source_name = path
        .file_name()
        .with_context(|| format!("{} has no file name", path.display()))?
        .to_string_lossy()
        .into_owned();
    let target_dir = match out_dir {
        Some(dir) => dir.to_path_buf(),
        None => path.parent().unwrap_or(Path::new(".")).to_path_buf(),
    };

    info!("chunking file {}...", path.display());
    let mut file = File::open(path)
        .await
        .with_context(|| format!("opening {}", path.display()))?;

    let mut chunks: Vec<Chunk> = Vec::new();
    let mut offset: u64 = 0;
    let mut buffer = vec![0u8; chunk_size as usize];

    loop {
        let read = read_up_to(&mut file, &mut buffer).await?;
        if read == 0 {
            // reached end of file
            break;
        }

        let piece = &buffer[..read];
        let checksum = hex::encode(Sha256::digest(piece));
        let chunk = Chunk {
            path: target_dir.join(format!("{checksum}_{offset}_{source_name}")),
            offset,
            len: read as u64,
            checksum,
        };

        chunk.save(piece).await?;
        if let Some(callback) = &on_piece_saved {
            callback(&chunk);
        }

        chunks.push(chunk);
        offset += read as u64;
    }

    info!("saved {} chunks to disk", chunks.len());
    Ok(chunks)
}

/// Fills as much of `buffer` as the file still has, so only the final
/// piece comes up short.
async fn read_up_to(file: &mut File, buffer: &mut [u8]) -> anyhow::Result<usize> {
    let mut filled = 0;
    while filled < buffer.len() {
        let read = file.read(&mut buffer[filled..]).await?;
        if read == 0 {
            break;
        }
        filled += read;
    }

    Ok(filled)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
