//! # Ingest Pipeline
//!
//! Turns the data file into an [`Inventory`]: valid cars in a
//! [`RecordStore`], everything else in a [`RejectSink`].
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Ingest Pipeline                                  │
//! │                                                                         │
//! │  Data.txt                                                              │
//! │     │  zero bytes? ──────────────────────────► IngestError::EmptyInput │
//! │     ▼                                                                   │
//! │  for each non-blank line                                               │
//! │     │                                                                   │
//! │     ├── store full? ──► count as discarded, don't parse                │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  RawRecord::from_line ──► validate_record                              │
//! │                              │                                          │
//! │               ┌──────────────┴──────────────┐                          │
//! │               ▼                             ▼                          │
//! │        Ok(Car) → store.push        Err(Rejection) → sink.write         │
//! │                                                                         │
//! │  discarded > 0 ──► one "capacity exceeded" warning                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};

use carlot_core::{validate_record, Car, RawRecord, RecordStore, SortField};
use tracing::{debug, info, warn};

use crate::config::IngestConfig;
use crate::error::{IngestError, IngestResult};
use crate::sink::{FileSink, RejectSink, SinkLines};

/// Counts from one ingest run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Non-blank lines that were validated.
    pub lines_read: usize,

    /// Lines stored as valid cars.
    pub accepted: usize,

    /// Lines written to the reject sink.
    pub rejected: usize,

    /// Non-blank lines left unread because the store was full.
    pub discarded: usize,

    /// The store's capacity ceiling.
    pub capacity: usize,
}

impl IngestReport {
    /// Whether input remained after the store filled up.
    pub fn capacity_exceeded(&self) -> bool {
        self.discarded > 0
    }
}

/// Valid cars plus the rejects from the same run.
///
/// This is the whole surface the menu works against.
#[derive(Debug)]
pub struct Inventory<S> {
    store: RecordStore,
    sink: S,
    report: IngestReport,
}

impl Inventory<FileSink> {
    /// Loads the data file named in `config`, writing rejects to its error
    /// file.
    ///
    /// The data file is checked for content before the error file is
    /// created, so an empty data file leaves any previous error file alone.
    ///
    /// ## Errors
    /// Every error is fatal: missing or empty data file, error file that
    /// can't be created, I/O failure partway through.
    pub fn load(config: &IngestConfig) -> IngestResult<Self> {
        config.validate()?;

        let file = File::open(&config.data_path)
            .map_err(|source| IngestError::input_unavailable(&config.data_path, source))?;
        let mut reader = BufReader::new(file);
        ensure_not_empty(&mut reader, &config.data_path.display().to_string())?;

        info!(
            data = %config.data_path.display(),
            errors = %config.error_path.display(),
            capacity = config.capacity,
            "Loading inventory"
        );

        let sink = FileSink::create(&config.error_path)?;
        Inventory::from_reader(reader, sink, config.capacity)
    }
}

impl<S: RejectSink> Inventory<S> {
    /// Ingests every line of `reader`.
    ///
    /// ## Example
    /// ```rust
    /// use carlot_ingest::{Inventory, MemorySink};
    ///
    /// let data = "AB12MP349 Fusion5 20 17000.00\nAB12MP34 RX5 1 17000.00\n";
    /// let inventory = Inventory::from_reader(data.as_bytes(), MemorySink::new(), 80).unwrap();
    ///
    /// assert_eq!(inventory.count_valid(), 1);
    /// assert_eq!(inventory.report().rejected, 1);
    /// ```
    pub fn from_reader<R: BufRead>(mut reader: R, mut sink: S, capacity: usize) -> IngestResult<Self> {
        ensure_not_empty(&mut reader, "input")?;

        let mut store = RecordStore::with_capacity(capacity);
        let mut report = IngestReport {
            capacity,
            ..IngestReport::default()
        };

        // Lines are read as bytes: a line that isn't valid UTF-8 is a bad
        // record, not a failed run, and lines past the ceiling are never
        // decoded at all.
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| IngestError::InputRead {
                    line: line_no + 1,
                    source,
                })?;
            if read == 0 {
                break;
            }
            line_no += 1;

            if buf.iter().all(u8::is_ascii_whitespace) {
                continue;
            }

            if store.is_full() {
                report.discarded += 1;
                continue;
            }

            report.lines_read += 1;
            let line = String::from_utf8_lossy(&buf);
            let raw = RawRecord::from_line(&line);

            match validate_record(&raw) {
                Ok(car) => {
                    debug!(line = line_no, id = car.id(), "Record accepted");
                    store.push(car)?;
                    report.accepted += 1;
                }
                Err(rejection) => {
                    debug!(line = line_no, %rejection, "Record rejected");
                    sink.write(&raw, &rejection)?;
                    report.rejected += 1;
                }
            }
        }

        sink.finish()?;

        if report.capacity_exceeded() {
            warn!(
                capacity,
                discarded = report.discarded,
                "Record limit reached; remaining records were discarded"
            );
        }

        info!(
            accepted = report.accepted,
            rejected = report.rejected,
            discarded = report.discarded,
            "Ingest complete"
        );

        Ok(Inventory {
            store,
            sink,
            report,
        })
    }

    /// Valid cars in current display order.
    pub fn list_valid(&self) -> Vec<&Car> {
        self.store.list()
    }

    /// Sorts the display order, descending by `field`.
    pub fn sort_by(&mut self, field: SortField) {
        debug!(%field, "Sorting inventory");
        self.store.sort_by(field);
    }

    /// Number of valid cars.
    pub fn count_valid(&self) -> usize {
        self.store.len()
    }

    /// Rejected lines, read back from the start of the sink.
    pub fn error_lines(&self) -> IngestResult<SinkLines<'_>> {
        self.sink.lines()
    }

    /// Valid cars whose ID or model contains `query`, ignoring case.
    pub fn search_text(&self, query: &str) -> Vec<&Car> {
        self.store.search_text(query)
    }

    /// Valid cars priced within ±15% of `target`.
    pub fn search_price(&self, target: f64) -> Vec<&Car> {
        self.store.search_price(target)
    }

    /// Counts from the ingest run.
    pub fn report(&self) -> &IngestReport {
        &self.report
    }

    /// The underlying record store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// The reject sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

/// Fails with [`IngestError::EmptyInput`] when `reader` has no bytes at all.
fn ensure_not_empty<R: BufRead>(reader: &mut R, name: &str) -> IngestResult<()> {
    let buffered = reader
        .fill_buf()
        .map_err(|source| IngestError::InputRead { line: 1, source })?;

    if buffered.is_empty() {
        return Err(IngestError::EmptyInput {
            name: name.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use carlot_core::MAX_RECORDS;

    const SAMPLE: &str = "\
AB12MP349 Fusion5 20 17000.00
35KMOP324 Civic 7 11999.00
AB12MP34 RX5 1 17000.00
XY34LK678 Mustang7 15 21500.00
KL67NM123 accord3 8 9800.00

PQ78RS901 Camry9 0 7500.00
JK90AB234 RX510 -3 7500.00
ZZ99YY123 CorvetteZ06 25 102000.00
EF45AB678 LongModelName 10 5000.01
OP67UV890 Sedan123 20 5000.00
";

    fn load(data: &str, capacity: usize) -> Inventory<MemorySink> {
        Inventory::from_reader(data.as_bytes(), MemorySink::new(), capacity).unwrap()
    }

    fn error_lines(inventory: &Inventory<MemorySink>) -> Vec<String> {
        inventory
            .error_lines()
            .unwrap()
            .collect::<IngestResult<Vec<_>>>()
            .unwrap()
    }

    fn valid_line(i: usize) -> String {
        format!("AB12MP{:03} Model{} {} {}", i % 1000, i, i, 6000 + i)
    }

    #[test]
    fn test_partitions_valid_and_invalid() {
        let inventory = load(SAMPLE, MAX_RECORDS);

        let ids: Vec<&str> = inventory.list_valid().iter().map(|car| car.id()).collect();
        assert_eq!(
            ids,
            ["AB12MP349", "XY34LK678", "PQ78RS901", "ZZ99YY123", "EF45AB678"]
        );

        let report = inventory.report();
        assert_eq!(report.lines_read, 10);
        assert_eq!(report.accepted, 5);
        assert_eq!(report.rejected, 5);
        assert!(!report.capacity_exceeded());

        let errors = error_lines(&inventory);
        assert_eq!(errors.len(), 5);
        assert!(errors[0].starts_with("35KMOP324"));
        assert!(errors[4].starts_with("OP67UV890"));
        assert!(errors[4].contains("Invalid ID:"));
        assert!(errors[4].contains("Invalid Price:"));
    }

    #[test]
    fn test_stored_cars_are_uppercased() {
        let inventory = load("AB12MP349 Fusion5 1 6000\n", MAX_RECORDS);
        let car = inventory.list_valid()[0];
        assert_eq!(car.id(), "AB12MP349");
        assert_eq!(car.model(), "FUSION5");
    }

    #[test]
    fn test_every_stored_car_passes_validation() {
        let inventory = load(SAMPLE, MAX_RECORDS);
        for car in inventory.list_valid() {
            assert!(carlot_core::validate_fields(car.id(), car.model(), car.quantity(), car.price()).is_ok());
        }
    }

    #[test]
    fn test_malformed_line_keeps_raw_tokens() {
        let inventory = load("AB12MP349 gwaggon 17000.00\n", MAX_RECORDS);
        assert_eq!(inventory.count_valid(), 0);

        let errors = error_lines(&inventory);
        assert!(errors[0].starts_with("AB12MP349      gwaggon            17000.00"));
        assert!(errors[0].contains("Invalid Line:  [ Record must have exactly 4 fields, found 3 ]"));
    }

    #[test]
    fn test_capacity_ceiling() {
        let data: String = (0..MAX_RECORDS + 5)
            .map(|i| valid_line(i) + "\n")
            .collect();

        let inventory = load(&data, MAX_RECORDS);

        assert_eq!(inventory.count_valid(), MAX_RECORDS);
        assert!(inventory.report().capacity_exceeded());
        assert_eq!(inventory.report().discarded, 5);
        assert_eq!(error_lines(&inventory).len(), 0);

        // The last five never made it anywhere
        let last_kept = inventory.list_valid()[MAX_RECORDS - 1].model().to_string();
        assert_eq!(last_kept, format!("MODEL{}", MAX_RECORDS - 1));
    }

    #[test]
    fn test_capacity_counts_only_valid_records() {
        let data = "\
AB12MP349 Fusion5 20 17000.00
AB12MP34 RX5 1 17000.00
XY34LK678 Mustang7 15 21500.00
ZZ99YY123 CorvetteZ06 25 102000.00
";
        let inventory = load(data, 2);

        assert_eq!(inventory.count_valid(), 2);
        assert_eq!(inventory.report().rejected, 1);
        assert_eq!(inventory.report().discarded, 1);
    }

    #[test]
    fn test_exactly_full_is_not_exceeded() {
        let data = "AB12MP349 Fusion5 20 17000.00\nXY34LK678 Mustang7 15 21500.00\n\n";
        let inventory = load(data, 2);
        assert_eq!(inventory.count_valid(), 2);
        assert!(!inventory.report().capacity_exceeded());
    }

    #[test]
    fn test_non_utf8_line_is_rejected_not_fatal() {
        let data: &[u8] = b"AB12MP349 Fusion5 20 17000.00\n\
AB12MP350 Citro\xEBn 3 9000.00\n\
XY34LK678 Mustang7 15 21500.00\n";
        let inventory = Inventory::from_reader(data, MemorySink::new(), MAX_RECORDS).unwrap();

        assert_eq!(inventory.count_valid(), 2);
        assert_eq!(inventory.report().rejected, 1);

        let errors = error_lines(&inventory);
        assert!(errors[0].starts_with("AB12MP350"));
        assert!(errors[0].contains("Invalid Model:"));
    }

    #[test]
    fn test_lines_past_ceiling_are_not_decoded() {
        let data: &[u8] = b"AB12MP349 Fusion5 20 17000.00\njunk \xff\n";
        let inventory = Inventory::from_reader(data, MemorySink::new(), 1).unwrap();

        assert_eq!(inventory.count_valid(), 1);
        assert_eq!(inventory.report().discarded, 1);
        assert!(error_lines(&inventory).is_empty());
    }

    #[test]
    fn test_huge_capacity_does_not_preallocate() {
        let inventory = load(SAMPLE, usize::MAX);
        assert_eq!(inventory.count_valid(), 5);
        assert_eq!(inventory.report().capacity, usize::MAX);
    }

    #[test]
    fn test_empty_input_is_fatal() {
        let result = Inventory::from_reader("".as_bytes(), MemorySink::new(), MAX_RECORDS);
        assert!(matches!(result, Err(IngestError::EmptyInput { .. })));
    }

    #[test]
    fn test_blank_only_input_yields_empty_inventory() {
        let inventory = load("\n   \n", MAX_RECORDS);
        assert_eq!(inventory.count_valid(), 0);
        assert_eq!(inventory.report().lines_read, 0);
    }

    #[test]
    fn test_sort_through_inventory() {
        let mut inventory = load(SAMPLE, MAX_RECORDS);
        inventory.sort_by(SortField::Price);

        let prices: Vec<f64> = inventory.list_valid().iter().map(|car| car.price()).collect();
        assert_eq!(prices, [102000.0, 21500.0, 17000.0, 7500.0, 5000.01]);
    }

    #[test]
    fn test_load_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let data_path = dir.path().join("Data.txt");
        let error_path = dir.path().join("ErrorFile.txt");
        std::fs::write(&data_path, SAMPLE).unwrap();

        let config = IngestConfig::new(&data_path).error_path(&error_path);
        let inventory = Inventory::load(&config).unwrap();

        assert_eq!(inventory.count_valid(), 5);
        let on_disk = std::fs::read_to_string(&error_path).unwrap();
        assert_eq!(on_disk.lines().count(), 5);
        assert_eq!(inventory.error_lines().unwrap().count(), 5);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = IngestConfig::new(dir.path().join("nope.txt"))
            .error_path(dir.path().join("ErrorFile.txt"));

        assert!(matches!(
            Inventory::load(&config),
            Err(IngestError::InputUnavailable { .. })
        ));
    }

    #[test]
    fn test_load_empty_file_leaves_error_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        let data_path = dir.path().join("Data.txt");
        let error_path = dir.path().join("ErrorFile.txt");
        std::fs::write(&data_path, "").unwrap();
        std::fs::write(&error_path, "previous\n").unwrap();

        let config = IngestConfig::new(&data_path).error_path(&error_path);
        assert!(matches!(
            Inventory::load(&config),
            Err(IngestError::EmptyInput { .. })
        ));
        assert_eq!(std::fs::read_to_string(&error_path).unwrap(), "previous\n");
    }
}
