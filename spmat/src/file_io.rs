//! Loading and saving matrix text files
//!
//! The core codec is string-in/string-out; this module owns the files.
//! With the `mmap` feature the input is memory-mapped and parsed in place
//! instead of being copied into a `String` first.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{debug, info};
use spmat_core::{EntryOrder, Matrix};

use crate::{Error, Result};

/// Name of the output file written when none is given
pub const DEFAULT_OUTPUT: &str = "results.txt";

/// Options for [`write_matrix`]
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    /// Write entries in row-major order instead of insertion order
    pub sorted: bool,
}

impl WriteOptions {
    /// Set row-major entry order
    pub fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    fn order(&self) -> EntryOrder {
        if self.sorted {
            EntryOrder::Sorted
        } else {
            EntryOrder::Insertion
        }
    }
}

/// Read and parse a matrix text file
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<Matrix> {
    let path = path.as_ref();
    let start = Instant::now();

    let matrix = parse_file(path)?;

    info!(
        "Loaded {} ({}x{}, {} non-zero)",
        path.display(),
        matrix.rows(),
        matrix.cols(),
        matrix.nnz()
    );
    debug!("Parsed {} in {:.2?}", path.display(), start.elapsed());
    Ok(matrix)
}

#[cfg(feature = "mmap")]
fn parse_file(path: &Path) -> Result<Matrix> {
    use memmap2::MmapOptions;

    let file = fs::File::open(path).map_err(|source| read_error(path, source))?;
    let len = file
        .metadata()
        .map_err(|source| read_error(path, source))?
        .len();

    // Zero-length files cannot be mapped
    if len == 0 {
        return parse_text(path, "");
    }

    // SAFETY: read-only mapping; the bytes are validated as UTF-8 before use
    let mmap = unsafe {
        MmapOptions::new()
            .map(&file)
            .map_err(|source| read_error(path, source))?
    };
    let text = std::str::from_utf8(&mmap).map_err(|_| Error::Utf8 {
        path: path.to_path_buf(),
    })?;
    parse_text(path, text)
}

#[cfg(not(feature = "mmap"))]
fn parse_file(path: &Path) -> Result<Matrix> {
    let bytes = fs::read(path).map_err(|source| read_error(path, source))?;
    let text = std::str::from_utf8(&bytes).map_err(|_| Error::Utf8 {
        path: path.to_path_buf(),
    })?;
    parse_text(path, text)
}

fn parse_text(path: &Path, text: &str) -> Result<Matrix> {
    spmat_core::parse(text).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize `matrix` and write it to `path`, replacing any existing file
pub fn write_matrix<P: AsRef<Path>>(path: P, matrix: &Matrix, options: WriteOptions) -> Result<()> {
    write_text(path, &render(matrix, options))
}

/// Write already serialized matrix text to `path`
///
/// Lets a caller that needs the text itself (for a preview, say) render
/// the matrix once.
pub fn write_text<P: AsRef<Path>>(path: P, text: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, text).map_err(|source| write_error(path, source))?;
    info!("Results have been saved to {}", path.display());
    Ok(())
}

/// Load two matrix files in parallel
///
/// Each file is parsed on its own rayon task; the first failure (in
/// argument order) is returned.
pub fn load_pair<A, B>(first: A, second: B) -> Result<(Matrix, Matrix)>
where
    A: AsRef<Path> + Sync,
    B: AsRef<Path> + Sync,
{
    let (a, b) = rayon::join(|| read_matrix(&first), || read_matrix(&second));
    Ok((a?, b?))
}

/// Read and parse a matrix text file without blocking the runtime
#[cfg(feature = "async")]
pub async fn read_matrix_async<P: AsRef<Path>>(path: P) -> Result<Matrix> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| read_error(path, source))?;
    let text = std::str::from_utf8(&bytes).map_err(|_| Error::Utf8 {
        path: path.to_path_buf(),
    })?;
    let matrix = parse_text(path, text)?;
    info!("Loaded {} ({} non-zero)", path.display(), matrix.nnz());
    Ok(matrix)
}

/// Serialize `matrix` and write it to `path` without blocking the runtime
#[cfg(feature = "async")]
pub async fn write_matrix_async<P: AsRef<Path>>(
    path: P,
    matrix: &Matrix,
    options: WriteOptions,
) -> Result<()> {
    use tokio::io::AsyncWriteExt;

    let path = path.as_ref();
    let text = render(matrix, options);
    let mut file = tokio::fs::File::create(path)
        .await
        .map_err(|source| write_error(path, source))?;
    file.write_all(text.as_bytes())
        .await
        .map_err(|source| write_error(path, source))?;
    file.flush()
        .await
        .map_err(|source| write_error(path, source))?;
    info!("Results have been saved to {}", path.display());
    Ok(())
}

/// Serialize `matrix` in the entry order selected by `options`
pub fn render(matrix: &Matrix, options: WriteOptions) -> String {
    match options.order() {
        EntryOrder::Insertion => spmat_core::to_text(matrix),
        EntryOrder::Sorted => spmat_core::to_text_sorted(matrix),
    }
}

fn read_error(path: &Path, source: std::io::Error) -> Error {
    Error::Read {
        path: PathBuf::from(path),
        source,
    }
}

fn write_error(path: &Path, source: std::io::Error) -> Error {
    Error::Write {
        path: PathBuf::from(path),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spmat_core::{FormatError, FormatIssue, MatrixError};

    #[test]
    fn test_read_write_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.txt");
        let m = Matrix::from_entries(3, 3, [(2, 1, 7), (0, 0, -1)]);

        write_matrix(&path, &m, WriteOptions::default().with_sorted(true)).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "rows=3\ncols=3\n(0, 0, -1)\n(2, 1, 7)"
        );
        assert_eq!(read_matrix(&path).unwrap(), m);
    }

    #[test]
    fn test_write_text_matches_write_matrix() {
        let dir = tempfile::tempdir().unwrap();
        let direct = dir.path().join("direct.txt");
        let rendered = dir.path().join("rendered.txt");
        let m = Matrix::from_entries(4, 4, [(3, 0, 2), (1, 2, -6), (0, 3, 1)]);

        write_matrix(&direct, &m, WriteOptions::default()).unwrap();
        let text = render(&m, WriteOptions::default());
        assert_eq!(text, "rows=4\ncols=4\n(3, 0, 2)\n(1, 2, -6)\n(0, 3, 1)");
        write_text(&rendered, &text).unwrap();

        assert_eq!(
            fs::read_to_string(&direct).unwrap(),
            fs::read_to_string(&rendered).unwrap()
        );
    }

    #[test]
    fn test_empty_file_is_a_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        let err = read_matrix(&path).unwrap_err();
        assert_eq!(
            err.matrix_error(),
            Some(MatrixError::Format(FormatError::new(
                1,
                FormatIssue::MalformedHeader
            )))
        );
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_matrix(dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }

    #[test]
    fn test_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bin.txt");
        fs::write(&path, [b'r', b'o', 0xff, 0xfe]).unwrap();
        assert!(matches!(read_matrix(&path).unwrap_err(), Error::Utf8 { .. }));
    }

    #[test]
    fn test_load_pair_reports_failing_file() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.txt");
        let bad = dir.path().join("bad.txt");
        fs::write(&good, "rows=1\ncols=1\n(0, 0, 2)").unwrap();
        fs::write(&bad, "rows=1\ncols=1\n(0, 0)").unwrap();

        let (a, b) = load_pair(&good, &good).unwrap();
        assert_eq!(a, b);

        match load_pair(&good, &bad).unwrap_err() {
            Error::Parse { path, .. } => assert_eq!(path, bad),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn test_async_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("async.txt");
        let m = Matrix::from_entries(2, 4, [(1, 3, 9)]);

        write_matrix_async(&path, &m, WriteOptions::default())
            .await
            .unwrap();
        assert_eq!(read_matrix_async(&path).await.unwrap(), m);
    }
}
