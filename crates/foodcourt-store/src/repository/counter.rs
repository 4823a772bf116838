//! # Counter Files
//!
//! A scalar value in a file of its own.
//!
//! `load` never changes anything in memory by itself: it returns what the
//! file holds and the caller decides. A missing file is `Ok(None)` (first
//! run), an unparsable one is `CorruptRecord`.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::debug;

use foodcourt_core::Money;

use super::{overwrite, read_optional};
use crate::error::{StoreError, StoreResult};

/// A value that can live in a counter file.
pub trait Scalar: Sized + Copy {
    fn parse_scalar(text: &str) -> Option<Self>;
    fn render_scalar(&self) -> String;
}

impl Scalar for u64 {
    fn parse_scalar(text: &str) -> Option<Self> {
        text.parse().ok()
    }

    fn render_scalar(&self) -> String {
        self.to_string()
    }
}

impl Scalar for Money {
    fn parse_scalar(text: &str) -> Option<Self> {
        Money::parse_amount(text)
    }

    fn render_scalar(&self) -> String {
        self.to_amount_string()
    }
}

/// One counter file.
#[derive(Debug, Clone)]
pub struct CounterFile<T> {
    path: PathBuf,
    _value: PhantomData<T>,
}

impl<T: Scalar> CounterFile<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CounterFile {
            path: path.into(),
            _value: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored value.
    pub fn load(&self) -> StoreResult<Option<T>> {
        let Some(text) = read_optional(&self.path)? else {
            debug!(path = %self.path.display(), "Counter file absent");
            return Ok(None);
        };

        let raw = text.trim();
        T::parse_scalar(raw)
            .map(Some)
            .ok_or_else(|| StoreError::corrupt(&self.path, format!("not a number: '{}'", raw)))
    }

    /// Overwrites the file with `value`.
    pub fn save(&self, value: T) -> StoreResult<()> {
        overwrite(&self.path, &value.render_scalar())?;
        debug!(path = %self.path.display(), value = %value.render_scalar(), "Counter saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_then_saved() {
        let dir = tempfile::tempdir().unwrap();
        let counter: CounterFile<u64> = CounterFile::new(dir.path().join("order_counter.txt"));

        assert_eq!(counter.load().unwrap(), None);
        counter.save(12).unwrap();
        assert_eq!(counter.load().unwrap(), Some(12));
        assert_eq!(std::fs::read_to_string(counter.path()).unwrap(), "12");
    }

    #[test]
    fn test_money_counter_accepts_float_writer_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("total_sales.txt");
        std::fs::write(&path, "1045.5\n").unwrap();

        let counter: CounterFile<Money> = CounterFile::new(&path);
        assert_eq!(counter.load().unwrap(), Some(Money::from_paise(104_550)));

        counter.save(Money::from_rupees(1100)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1100.00");
    }

    #[test]
    fn test_garbage_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("customer_counter.txt");
        std::fs::write(&path, "many").unwrap();

        let counter: CounterFile<u64> = CounterFile::new(&path);
        assert!(matches!(
            counter.load(),
            Err(StoreError::CorruptRecord { .. })
        ));
    }
}
