//! Shape template - a boolean mask instantiated around an anchor at creation.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    rows: Vec<Vec<bool>>,
}

impl Template {
    /// One cell at the anchor.
    pub fn singleton() -> Self {
        Self { rows: vec![vec![true]] }
    }

    /// Rows of 0/1, top row first. `rows[dy][dx] != 0` puts a cell at
    /// `anchor + (dx, dy)`.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|row| row.as_ref().iter().map(|&v| v != 0).collect())
                .collect(),
        }
    }

    #[inline]
    pub fn is_singleton(&self) -> bool {
        self.rows.len() == 1 && self.rows[0] == [true]
    }

    pub fn width(&self) -> i32 {
        self.rows.iter().map(Vec::len).max().unwrap_or(0) as i32
    }

    pub fn height(&self) -> i32 {
        self.rows.len() as i32
    }

    /// Offset of the middle cell.
    pub fn center(&self) -> (i32, i32) {
        (self.width() / 2, self.height() / 2)
    }

    /// `(dx, dy)` of every set cell, row by row.
    pub fn offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.rows.iter().enumerate().flat_map(|(dy, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, &set)| set)
                .map(move |(dx, _)| (dx as i32, dy as i32))
        })
    }
}
