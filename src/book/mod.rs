//! The address book collection and its paginated traversal.

pub mod pages;

pub use pages::Pages;

use crate::error::{BookError, BookResult};
use crate::models::Record;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An ordered, append-only collection of records.
///
/// Records are kept in insertion order. The book imposes no uniqueness
/// or capacity constraint and lives entirely in memory.
///
/// # Example
///
/// ```
/// use rolodex::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// book.add_record(Record::new(Some("0935864755"), None)?);
///
/// for page in book.pages(10)? {
///     for record in page {
///         println!("{:?}", record.phone());
///     }
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the end of the book.
    pub fn add_record(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Traverse the book in pages of `page_size` records.
    ///
    /// Every page except possibly the last holds exactly `page_size`
    /// records; the last holds the remainder. Each call starts a fresh
    /// traversal from the first record.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidPageSize` if `page_size` is zero.
    pub fn pages(&self, page_size: usize) -> BookResult<Pages<'_>> {
        if page_size == 0 {
            return Err(BookError::InvalidPageSize(page_size));
        }

        debug!(page_size, records = self.records.len(), "starting paginated traversal");
        Ok(Pages::new(&self.records, page_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book(n: usize) -> AddressBook {
        let mut book = AddressBook::new();
        for i in 0..n {
            book.add_record(Record::new(Some(format!("09{:08}", i).as_str()), None).unwrap());
        }
        book
    }

    #[test]
    fn test_book_starts_empty() {
        let book = AddressBook::new();
        assert!(book.is_empty());
        assert_eq!(book.len(), 0);
    }

    #[test]
    fn test_add_record_appends_in_order() {
        let book = sample_book(3);
        assert_eq!(book.len(), 3);
        assert_eq!(book.records()[0].phone().unwrap().as_str(), "0900000000");
        assert_eq!(book.records()[2].phone().unwrap().as_str(), "0900000002");
    }

    #[test]
    fn test_pages_rejects_zero_page_size() {
        let book = sample_book(3);
        let result = book.pages(0);
        assert!(matches!(result, Err(BookError::InvalidPageSize(0))));
    }

    #[test]
    fn test_pages_two_records_page_size_two_is_one_page() {
        let book = sample_book(2);
        let pages: Vec<_> = book.pages(2).unwrap().collect();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].len(), 2);
    }

    #[test]
    fn test_pages_restartable() {
        let book = sample_book(5);

        let first: Vec<_> = book.pages(2).unwrap().flatten().cloned().collect();
        let second: Vec<_> = book.pages(2).unwrap().flatten().cloned().collect();

        assert_eq!(first, book.records());
        assert_eq!(second, book.records());
    }

    #[test]
    fn test_pages_on_empty_book() {
        let book = AddressBook::new();
        assert_eq!(book.pages(4).unwrap().count(), 0);
    }

    #[test]
    fn test_book_serde_roundtrip() {
        let book = sample_book(2);
        let json = serde_json::to_string(&book).unwrap();
        let restored: AddressBook = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, book);
    }
}
