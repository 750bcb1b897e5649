//! Double precision Array File (DAF) container.
//!
//! A DAF is a sequence of 1024-byte records. Record 1 is the file record
//! (`LOCIDW`, `ND`, `NI`, `FWARD`, ...). Summary records form a doubly
//! linked list starting at `FWARD`; each holds `next`, `prev` and `count`
//! followed by packed summaries of `ND` doubles and `NI` 32-bit integers.
//! Array addresses are 1-based 8-byte word indices into the whole file.
//!
//! Reference: NAIF DAF Required Reading.

use crate::error::KernelError;

pub(crate) const RECORD_BYTES: usize = 1024;

/// FTP validation string embedded at bytes 699..727 of the file record.
pub(crate) const FTPSTR: &[u8; 28] = b"FTPSTR:\r:\n:\r\n:\r\x00:\x81:\x10\xce:ENDFTP";
const FTP_OFFSET: usize = 699;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Little,
    Big,
}

impl Endian {
    pub(crate) fn f64_at(self, bytes: &[u8], offset: usize) -> Result<f64, KernelError> {
        let raw = take::<8>(bytes, offset)?;
        Ok(match self {
            Self::Little => f64::from_le_bytes(raw),
            Self::Big => f64::from_be_bytes(raw),
        })
    }

    pub(crate) fn i32_at(self, bytes: &[u8], offset: usize) -> Result<i32, KernelError> {
        let raw = take::<4>(bytes, offset)?;
        Ok(match self {
            Self::Little => i32::from_le_bytes(raw),
            Self::Big => i32::from_be_bytes(raw),
        })
    }
}

fn take<const N: usize>(bytes: &[u8], offset: usize) -> Result<[u8; N], KernelError> {
    bytes
        .get(offset..offset + N)
        .and_then(|s| s.try_into().ok())
        .ok_or_else(|| KernelError::InvalidData(format!("read of {N} bytes past end at {offset}")))
}

/// Parsed DAF file record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DafHeader {
    pub endian: Endian,
    pub nd: usize,
    pub ni: usize,
    pub fward: usize,
}

impl DafHeader {
    /// Summary size in 8-byte words.
    pub fn summary_words(&self) -> usize {
        self.nd + self.ni.div_ceil(2)
    }
}

/// One array summary: `ND` doubles and `NI` integers.
#[derive(Debug, Clone, PartialEq)]
pub struct DafSummary {
    pub doubles: Vec<f64>,
    pub ints: Vec<i32>,
}

pub(crate) fn read_header(bytes: &[u8]) -> Result<DafHeader, KernelError> {
    if bytes.len() < RECORD_BYTES {
        return Err(KernelError::InvalidFormat("file shorter than one DAF record".into()));
    }
    if !bytes.starts_with(b"DAF/") {
        return Err(KernelError::InvalidFormat(format!(
            "bad id word {:?}",
            String::from_utf8_lossy(&bytes[..8])
        )));
    }

    let endian = if (1..=124).contains(&Endian::Little.i32_at(bytes, 8)?) {
        Endian::Little
    } else if (1..=124).contains(&Endian::Big.i32_at(bytes, 8)?) {
        Endian::Big
    } else {
        return Err(KernelError::InvalidFormat("cannot determine byte order".into()));
    };

    let nd = endian.i32_at(bytes, 8)?;
    let ni = endian.i32_at(bytes, 12)?;
    let fward = endian.i32_at(bytes, 76)?;
    if !(2..=250).contains(&ni) || fward < 2 {
        return Err(KernelError::InvalidFormat(format!(
            "implausible file record (ni={ni}, fward={fward})"
        )));
    }

    // Files transferred in ASCII mode carry a mangled FTP string.
    let ftp = &bytes[FTP_OFFSET..FTP_OFFSET + FTPSTR.len()];
    if ftp.starts_with(b"FTPSTR") && ftp != FTPSTR {
        return Err(KernelError::InvalidFormat("FTP validation string corrupted".into()));
    }

    Ok(DafHeader {
        endian,
        nd: nd as usize,
        ni: ni as usize,
        fward: fward as usize,
    })
}

/// Walk the summary record list and collect every array summary.
pub(crate) fn read_summaries(
    bytes: &[u8],
    header: &DafHeader,
) -> Result<Vec<DafSummary>, KernelError> {
    let endian = header.endian;
    let summary_bytes = header.summary_words() * 8;
    let max_records = bytes.len() / RECORD_BYTES;

    let mut summaries = Vec::new();
    let mut record = header.fward;
    let mut visited = 0;

    while record != 0 {
        visited += 1;
        if visited > max_records {
            return Err(KernelError::InvalidData("summary record list loops".into()));
        }
        let base = (record - 1) * RECORD_BYTES;
        if base + RECORD_BYTES > bytes.len() {
            return Err(KernelError::InvalidData(format!(
                "summary record {record} beyond end of file"
            )));
        }

        let next = endian.f64_at(bytes, base)? as usize;
        let count = endian.f64_at(bytes, base + 16)? as usize;
        if 24 + count * summary_bytes > RECORD_BYTES {
            return Err(KernelError::InvalidData(format!(
                "summary record {record} claims {count} summaries"
            )));
        }

        for i in 0..count {
            let start = base + 24 + i * summary_bytes;
            let doubles = (0..header.nd)
                .map(|d| endian.f64_at(bytes, start + d * 8))
                .collect::<Result<Vec<_>, _>>()?;
            let int_start = start + header.nd * 8;
            let ints = (0..header.ni)
                .map(|n| endian.i32_at(bytes, int_start + n * 4))
                .collect::<Result<Vec<_>, _>>()?;
            summaries.push(DafSummary { doubles, ints });
        }

        record = next;
    }

    Ok(summaries)
}

/// Read `count` doubles starting at 1-based word address `start_word`.
pub(crate) fn read_words(
    bytes: &[u8],
    endian: Endian,
    start_word: usize,
    count: usize,
) -> Result<Vec<f64>, KernelError> {
    if start_word == 0 {
        return Err(KernelError::InvalidData("word addresses are 1-based".into()));
    }
    let first = (start_word - 1) * 8;
    if first + count * 8 > bytes.len() {
        return Err(KernelError::InvalidData(format!(
            "words {start_word}..{} beyond end of file",
            start_word + count
        )));
    }
    (0..count).map(|i| endian.f64_at(bytes, first + i * 8)).collect()
}
