use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::Path,
};

const WORD: usize = size_of::<i32>();

/// Error raised while reading or writing a sample file.
///
/// Every malformed layout is reported; a decoded block is never shorter
/// than its declared length.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum SampleFileError {
    #[display("I/O error: {source}")]
    Io { source: io::Error },
    #[display("sample file is too short to hold its length header ({available} bytes)")]
    TruncatedHeader { available: usize },
    #[display("sample file declares a negative length ({declared})")]
    NegativeLength { declared: i32 },
    #[display("sample file declares {declared} samples but holds only {available}")]
    Truncated { declared: usize, available: usize },
    #[display("sample file has {extra} unexpected bytes after its {declared} samples")]
    TrailingBytes { declared: usize, extra: usize },
    #[display("cannot store {len} samples, the length header is limited to {}", i32::MAX)]
    TooManySamples { len: usize },
}

impl From<io::Error> for SampleFileError {
    fn from(source: io::Error) -> Self {
        Self::Io { source }
    }
}

/// Writes `values` with their length header to `writer`.
pub fn write_samples<W>(mut writer: W, values: &[i32]) -> Result<(), SampleFileError>
where
    W: Write,
{
    let len = i32::try_from(values.len())
        .map_err(|_| SampleFileError::TooManySamples { len: values.len() })?;
    writer.write_all(&len.to_ne_bytes())?;
    for value in values {
        writer.write_all(&value.to_ne_bytes())?;
    }
    Ok(())
}

/// Reads a complete sample block from `reader`.
///
/// The whole input must be exactly one block: a length header followed by
/// that many values.
pub fn read_samples<R>(mut reader: R) -> Result<Vec<i32>, SampleFileError>
where
    R: Read,
{
    let mut bytes = vec![];
    reader.read_to_end(&mut bytes)?;
    decode_samples(&bytes)
}

/// Decodes a sample block from its byte representation.
///
/// # Examples
///
/// ```
/// use binalyzer_sample::{SampleFileError, decode_samples};
///
/// let mut bytes = 2_i32.to_ne_bytes().to_vec();
/// bytes.extend(7_i32.to_ne_bytes());
/// assert!(matches!(
///     decode_samples(&bytes),
///     Err(SampleFileError::Truncated { declared: 2, available: 1 })
/// ));
///
/// bytes.extend(9_i32.to_ne_bytes());
/// assert_eq!(decode_samples(&bytes).unwrap(), [7, 9]);
/// ```
pub fn decode_samples(bytes: &[u8]) -> Result<Vec<i32>, SampleFileError> {
    let Some((header, body)) = bytes.split_first_chunk::<WORD>() else {
        return Err(SampleFileError::TruncatedHeader {
            available: bytes.len(),
        });
    };
    let declared = i32::from_ne_bytes(*header);
    let declared =
        usize::try_from(declared).map_err(|_| SampleFileError::NegativeLength { declared })?;

    let available = body.len() / WORD;
    if available < declared {
        return Err(SampleFileError::Truncated {
            declared,
            available,
        });
    }
    let expected_bytes = declared * WORD;
    if body.len() > expected_bytes {
        return Err(SampleFileError::TrailingBytes {
            declared,
            extra: body.len() - expected_bytes,
        });
    }

    let values = body
        .chunks_exact(WORD)
        .map(|chunk| {
            let mut word = [0; WORD];
            word.copy_from_slice(chunk);
            i32::from_ne_bytes(word)
        })
        .collect();
    Ok(values)
}

/// Creates (or truncates) the file at `path` and writes `values` to it.
pub fn save<P>(path: P, values: &[i32]) -> Result<(), SampleFileError>
where
    P: AsRef<Path>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_samples(&mut writer, values)?;
    writer.flush()?;
    Ok(())
}

/// Loads the sample block stored at `path`.
pub fn load<P>(path: P) -> Result<Vec<i32>, SampleFileError>
where
    P: AsRef<Path>,
{
    let reader = BufReader::new(File::open(path)?);
    read_samples(reader)
}
