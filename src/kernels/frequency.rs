//! The frequency counter: the first pass over the input.

use crate::error::HuffmanError;
use crate::traits::ByteSource;
use crate::types::FrequencyTable;

/// Reads `source` to exhaustion and counts every byte value, then adds the
/// END_OF_DATA entry with count exactly 1.
///
/// An empty source yields a table holding only END_OF_DATA.
pub fn count_frequencies<S>(source: &mut S) -> Result<FrequencyTable, HuffmanError>
where
    S: ByteSource + ?Sized,
{
    let mut table = FrequencyTable::new();
    while let Some(byte) = source.read_byte()? {
        table.record(byte);
    }
    table.mark_end_of_data();

    log_metric!(
        "event" = "count_frequencies",
        "original_len" = table.original_len(),
        "distinct_bytes" = table.distinct_bytes()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io_adapters::ByteReader;
    use crate::types::Symbol;
    use std::io::Cursor;

    #[test]
    fn test_counts_bytes_and_adds_end_of_data() {
        let mut source = ByteReader::new(Cursor::new(b"AAABBC".to_vec())).unwrap();
        let table = count_frequencies(&mut source).unwrap();

        let entries: Vec<(Symbol, u64)> = table.iter().collect();
        assert_eq!(
            entries,
            vec![
                (Symbol::Byte(b'A'), 3),
                (Symbol::Byte(b'B'), 2),
                (Symbol::Byte(b'C'), 1),
                (Symbol::EndOfData, 1),
            ]
        );
    }

    #[test]
    fn test_empty_input_yields_only_end_of_data() {
        let mut source = ByteReader::new(Cursor::new(Vec::new())).unwrap();
        let table = count_frequencies(&mut source).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(Symbol::EndOfData), Some(1));
        assert_eq!(table.total_weight(), 1);
    }

    #[test]
    fn test_every_byte_value_is_counted() {
        let data: Vec<u8> = (0..=255u8).chain(0..=255u8).collect();
        let mut source = ByteReader::new(Cursor::new(data)).unwrap();
        let table = count_frequencies(&mut source).unwrap();
        assert_eq!(table.len(), 257);
        assert!(table
            .iter()
            .filter(|(s, _)| !s.is_end_of_data())
            .all(|(_, count)| count == 2));
    }
}
