/// Serialization format options for basis configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SerializationFormat {
    /// bincode format - compact binary
    Bincode,
    /// bincode format with LZ4 compression
    #[default]
    BincodeLz4,
}

impl SerializationFormat {
    /// Returns true if this format uses LZ4 compression
    pub fn is_compressed(&self) -> bool {
        matches!(self, SerializationFormat::BincodeLz4)
    }
}

use crate::errors::SGError;
use serde::{de::DeserializeOwned, Serialize};

/// Serialize data to bytes using the specified format.
pub fn serialize<T: Serialize>(data: &T, format: SerializationFormat) -> Result<Vec<u8>, SGError> {
    let bytes = bincode::serde::encode_to_vec(data, bincode::config::standard())
        .map_err(|_| SGError::SerializationFailed)?;
    if format.is_compressed() {
        Ok(lz4_flex::compress_prepend_size(&bytes))
    } else {
        Ok(bytes)
    }
}

/// Deserialize data from bytes using the specified format.
pub fn deserialize<T: DeserializeOwned>(data: &[u8], format: SerializationFormat) -> Result<T, SGError> {
    let decompressed;
    let bytes = if format.is_compressed() {
        decompressed = lz4_flex::decompress_size_prepended(data).map_err(|_| SGError::LZ4DecompressionFailed)?;
        &decompressed[..]
    } else {
        data
    };
    let (value, _) = bincode::serde::decode_from_slice(bytes, bincode::config::standard())
        .map_err(|_| SGError::DeserializationFailed)?;
    Ok(value)
}

/// Write data to `path`.
pub fn write<T: Serialize>(data: &T, path: &str, format: SerializationFormat) -> Result<(), SGError> {
    let bytes = serialize(data, format)?;
    std::fs::write(path, bytes).map_err(|_| SGError::FileIOError)
}

/// Read data from `path`.
pub fn read<T: DeserializeOwned>(path: &str, format: SerializationFormat) -> Result<T, SGError> {
    let bytes = std::fs::read(path).map_err(|_| SGError::FileIOError)?;
    deserialize(&bytes, format)
}

#[test]
fn check_basis_round_trip()
{
    use crate::basis::bspline_clenshaw_curtis::BsplineClenshawCurtisBasis;
    for format in [SerializationFormat::Bincode, SerializationFormat::BincodeLz4]
    {
        let basis = BsplineClenshawCurtisBasis::new(5);
        let bytes = serialize(&basis, format).unwrap();
        let restored: BsplineClenshawCurtisBasis = deserialize(&bytes, format).unwrap();
        assert_eq!(restored.degree(), 5);
        assert_eq!(restored.eval(4_u32, 5_u32, 0.3), basis.eval(4_u32, 5_u32, 0.3));
    }
}

#[test]
fn check_invalid_degree_is_rejected()
{
    use crate::basis::bspline_clenshaw_curtis::{BsplineClenshawCurtisBasis, BsplineClenshawCurtisParameters};
    let bytes = serialize(&BsplineClenshawCurtisParameters { degree: 4 }, SerializationFormat::Bincode).unwrap();
    let restored = deserialize::<BsplineClenshawCurtisBasis>(&bytes, SerializationFormat::Bincode);
    assert_eq!(restored.unwrap_err(), SGError::DeserializationFailed);
}

#[test]
fn check_corrupt_compressed_data()
{
    use crate::basis::bspline_clenshaw_curtis::BsplineClenshawCurtisParameters;
    let result = deserialize::<BsplineClenshawCurtisParameters>(&[10, 0, 0, 0, 0xff, 0xff], SerializationFormat::BincodeLz4);
    assert_eq!(result.unwrap_err(), SGError::LZ4DecompressionFailed);
}

#[test]
fn check_write_and_read()
{
    use crate::basis::bspline_clenshaw_curtis::BsplineClenshawCurtisBasis;
    let path = std::env::temp_dir().join(format!("sgspline_basis_{}.bin", std::process::id()));
    let path = path.to_str().unwrap();
    write(&BsplineClenshawCurtisBasis::new(3), path, SerializationFormat::default()).unwrap();
    let restored: BsplineClenshawCurtisBasis = read(path, SerializationFormat::default()).unwrap();
    assert_eq!(restored.degree(), 3);
    std::fs::remove_file(path).unwrap();
    assert_eq!(read::<BsplineClenshawCurtisBasis>(path, SerializationFormat::default()).unwrap_err(), SGError::FileIOError);
}
