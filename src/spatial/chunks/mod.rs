//! Chunk plan - fixed-size row bands used to split the terrain pass.
//!
//! A chunk is `CHUNK_ROWS` full rows, i.e. a contiguous range of the
//! row-major cell vector, so chunks can be handed out as disjoint
//! `&mut [Cell]` slices.

/// Rows per chunk
pub const CHUNK_ROWS: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkPlan {
    width: u32,
    height: u32,
    rows_per_chunk: u32,
}

impl ChunkPlan {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_rows(width, height, CHUNK_ROWS)
    }

    pub fn with_rows(width: u32, height: u32, rows_per_chunk: u32) -> Self {
        Self {
            width,
            height,
            rows_per_chunk: rows_per_chunk.max(1),
        }
    }

    /// Number of cells in a full chunk.
    #[inline]
    pub fn chunk_len(&self) -> usize {
        (self.width as usize) * (self.rows_per_chunk as usize)
    }

    #[inline]
    pub fn chunk_count(&self) -> usize {
        ((self.height + self.rows_per_chunk - 1) / self.rows_per_chunk) as usize
    }

    /// Rows covered by chunk `idx`. The last chunk may be short.
    #[cfg(test)]
    pub(crate) fn rows(&self, idx: usize) -> std::ops::Range<u32> {
        let start = (idx as u32 * self.rows_per_chunk).min(self.height);
        let end = (start + self.rows_per_chunk).min(self.height);
        start..end
    }
}
