use std::fmt;

/// Size in bytes of the source fingerprint stored in the file header.
pub const SOURCE_HASH_SIZE: usize = 20;

/// Fingerprint of the source text a module was compiled from.
///
/// Computed by the front end (SHA-1 sized); the serializer copies it into
/// the file header verbatim and never interprets it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SourceHash([u8; SOURCE_HASH_SIZE]);

impl SourceHash {
    pub const fn new(bytes: [u8; SOURCE_HASH_SIZE]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; SOURCE_HASH_SIZE] {
        &self.0
    }
}

impl From<[u8; SOURCE_HASH_SIZE]> for SourceHash {
    fn from(bytes: [u8; SOURCE_HASH_SIZE]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for SourceHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
