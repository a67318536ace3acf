//! The `ListingWriter` trait implemented by listing backends.

use crate::{ListingRow, OutputResult};

pub trait ListingWriter {
    /// Append a batch of rows.  Returns [`OutputError::Finished`] after
    /// [`finish`](Self::finish).
    ///
    /// [`OutputError::Finished`]: crate::OutputError::Finished
    fn write_rows(&mut self, rows: &[ListingRow]) -> OutputResult<()>;

    /// Flush and close the underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
