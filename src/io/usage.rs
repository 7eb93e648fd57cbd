use std::io;
use std::fs;
use std::path::Path;
use std::convert::AsRef;

use crate::error::{Error, Result};
use crate::seq::Codon;
use crate::usage::CodonUsage;

/// A codon usage table reader.
///
/// Input is tab-delimited with a header row and two columns: codon and frequency.
/// Lines starting with `#` are ignored.
pub struct Reader<R: io::Read> {
    inner: csv::Reader<R>,
}

impl Reader<fs::File> {
    /// Read from a given file path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        fs::File::open(path).map(Reader::new)
    }
}

impl<R: io::Read> Reader<R> {
    /// Read from a given reader.
    pub fn new(reader: R) -> Self {
        Reader {
            inner: csv::ReaderBuilder::new()
                .delimiter(b'\t')
                .comment(Some(b'#'))
                .has_headers(true)
                .trim(csv::Trim::All)
                .from_reader(reader),
        }
    }

    /// Iterate over records.
    pub fn records(&mut self) -> Records<'_, R> {
        Records { inner: self.inner.records() }
    }

    /// Read all records into a codon usage table.
    /// Stop at the first problematic record.
    pub fn read_usage(&mut self) -> Result<CodonUsage> {
        let mut usage = CodonUsage::new();
        for r in self.records() {
            let record = r?;
            usage.insert(record.codon, record.frequency)?;
        }
        Ok(usage)
    }
}

pub struct Records<'r, R: 'r + io::Read> {
    inner: csv::StringRecordsIter<'r, R>,
}

impl<'r, R: io::Read> Iterator for Records<'r, R> {
    type Item = Result<Record>;

    /// Get next record.
    fn next(&mut self) -> Option<Result<Record>> {
        self.inner.next().map(|res| -> Result<Record> {
            let record = res?;

            let codon = record.get(0)
                .ok_or_else(|| Error::MissingField("codon".to_owned()))?;
            let frequency = record.get(1)
                .ok_or_else(|| Error::MissingField("frequency".to_owned()))?;

            Ok(Record {
                codon: codon.parse()?,
                frequency: frequency.parse().map_err(|e| Error::ParseFloat {
                    codon: codon.to_owned(),
                    source: e,
                })?,
            })
        })
    }
}

/// A codon usage record.
#[derive(Debug, PartialEq)]
pub struct Record {
    pub codon: Codon,
    /// Usage frequency, typically per thousand codons
    pub frequency: f64,
}
