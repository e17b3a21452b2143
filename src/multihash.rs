//! Self-describing hashes: a hash function id followed by the digest it produced.

use crate::{
    blob::VariableBlob,
    encoding::{constants::MAX_ZERO_WIDTH_ITEMS, De, Ser},
    errors::PackError,
};
use std::{cmp::Ordering, convert::TryFrom};

/// A single digest tagged with the id of the hash function that produced it.
///
/// Written as `[varint id][varint len][digest]`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Multihash {
    pub id: u64,
    pub digest: VariableBlob,
}

impl Multihash {
    pub fn new<D: Into<VariableBlob>>(id: u64, digest: D) -> Self {
        Multihash {
            id,
            digest: digest.into(),
        }
    }
}

/// Ordered by id, then by digest length, then by digest bytes.
impl Ord for Multihash {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id
            .cmp(&other.id)
            .then(self.digest.len().cmp(&other.digest.len()))
            .then_with(|| self.digest.as_slice().cmp(other.digest.as_slice()))
    }
}

impl PartialOrd for Multihash {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ser for Multihash {
    fn serialize<'a>(
        &self,
        target: &'a mut VariableBlob,
    ) -> Result<&'a mut VariableBlob, PackError> {
        target.cursor_mut().put_varint(self.id);
        self.digest.serialize(target)
    }
}

impl De for Multihash {
    fn deserialize(source: &mut VariableBlob) -> Result<Self, PackError> {
        source.cursor_mut().restoring(|cur| {
            let id = cur.read_varint()?;
            let digest = crate::blob::read_frame(cur)?.into();
            Ok(Multihash { id, digest })
        })
    }
}

/// Several digests from the same hash function, all of the same size.
///
/// Written as `[varint id][varint digest size][varint count]` followed by the digests
/// back to back, without per-digest length prefixes.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MultihashVector {
    pub id: u64,
    pub digests: Vec<VariableBlob>,
}

impl MultihashVector {
    pub fn new(id: u64, digests: Vec<VariableBlob>) -> Self { MultihashVector { id, digests } }

    /// The shared digest size, or `0` if there are no digests.
    ///
    /// # Errors
    ///
    /// * [`PackError::LengthMismatch`] if any digest differs in size from the first.
    pub fn digest_size(&self) -> Result<usize, PackError> {
        let expected = self.digests.first().map_or(0, VariableBlob::len);
        match self.digests.iter().find(|d| d.len() != expected) {
            Some(d) => Err(PackError::LengthMismatch {
                expected,
                found: d.len(),
            }),
            None => Ok(expected),
        }
    }
}

impl Ser for MultihashVector {
    fn serialize<'a>(
        &self,
        target: &'a mut VariableBlob,
    ) -> Result<&'a mut VariableBlob, PackError> {
        // nothing is written unless every digest fits
        let size = self.digest_size()?;

        let cur = target.cursor_mut();
        cur.put_varint(self.id);
        cur.put_varint(size as u64);
        cur.put_varint(self.digests.len() as u64);
        for digest in &self.digests {
            cur.put_slice(digest.as_slice());
        }
        Ok(target)
    }
}

impl De for MultihashVector {
    fn deserialize(source: &mut VariableBlob) -> Result<Self, PackError> {
        source.cursor_mut().restoring(|cur| {
            let id = cur.read_varint()?;
            let size = cur.read_varint()?;
            let count = cur.read_varint()?;

            let remaining = cur.remaining();
            let needed = size.saturating_mul(count);
            if needed > remaining as u64 {
                let needed = usize::try_from(needed).unwrap_or(usize::MAX);
                return Err(PackError::eof(needed, remaining));
            }
            // empty digests take no bytes, so the count alone has to be bounded
            if count > remaining as u64 && count > MAX_ZERO_WIDTH_ITEMS {
                return Err(PackError::TooManyItems { count, remaining });
            }

            let digests = (0..count)
                .map(|_| cur.read_many(size as usize).map(VariableBlob::from))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(MultihashVector { id, digests })
        })
    }
}
