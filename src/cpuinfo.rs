// src/cpuinfo.rs

//! Parser for the Linux per-processor descriptor table (`/proc/cpuinfo`).
//!
//! Kept free of any OS calls so it can be exercised with synthetic tables on
//! every platform.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    constants::{CPUINFO_CORE_ID, CPUINFO_PHYSICAL_ID},
    errors::DetectionError,
};

/// Highest `physical id` and `core id` seen across all processor entries.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CpuTopology {
    pub max_physical_id: Option<usize>,
    pub max_core_id: Option<usize>,
}

impl CpuTopology {
    /// Scans a descriptor table line by line. Bytes that are not valid
    /// UTF-8 are replaced rather than rejected.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DetectionError> {
        let mut topology = Self::default();
        for line in reader.split(b'\n') {
            topology.observe_line(&String::from_utf8_lossy(&line?));
        }
        Ok(topology)
    }

    /// Opens and scans the descriptor table at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DetectionError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Folds a single `key : value` line into the running maxima. Lines
    /// without a numeric value for a tracked key are ignored.
    fn observe_line(&mut self, line: &str) {
        let Some((key, value)) = line.split_once(':') else {
            return;
        };
        let slot = match key.trim() {
            CPUINFO_PHYSICAL_ID => &mut self.max_physical_id,
            CPUINFO_CORE_ID => &mut self.max_core_id,
            _ => return,
        };
        if let Ok(id) = value.trim().parse::<usize>() {
            *slot = Some(slot.map_or(id, |max| max.max(id)));
        }
    }

    /// Physical core estimate: `(max_core_id + 1) * (max_physical_id + 1)`.
    ///
    /// Assumes every package exposes the same contiguous core-id range, so
    /// asymmetric multi-socket machines can be overcounted. A field that was
    /// never seen counts as id 0.
    pub fn physical_cores(&self) -> Result<usize, DetectionError> {
        if self.max_core_id.is_none() && self.max_physical_id.is_none() {
            return Err(DetectionError::NoTopologyFields);
        }
        let cores_per_package = self.max_core_id.unwrap_or(0).saturating_add(1);
        let packages = self.max_physical_id.unwrap_or(0).saturating_add(1);
        Ok(cores_per_package.saturating_mul(packages))
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use super::*;

    fn parse(table: &str) -> CpuTopology {
        CpuTopology::from_reader(Cursor::new(table)).unwrap()
    }

    #[test]
    fn test_single_package_two_cores() {
        let table = "\
processor\t: 0
vendor_id\t: GenuineIntel
physical id\t: 0
core id\t\t: 0

processor\t: 1
vendor_id\t: GenuineIntel
physical id\t: 0
core id\t\t: 1
";
        let topology = parse(table);
        assert_eq!(topology.max_physical_id, Some(0));
        assert_eq!(topology.max_core_id, Some(1));
        assert_eq!(topology.physical_cores().unwrap(), 2);
    }

    #[test]
    fn test_two_packages_two_cores_each() {
        let table = "\
processor\t: 0
physical id\t: 0
core id\t\t: 0

processor\t: 1
physical id\t: 0
core id\t\t: 1

processor\t: 2
physical id\t: 1
core id\t\t: 0

processor\t: 3
physical id\t: 1
core id\t\t: 1
";
        assert_eq!(parse(table).physical_cores().unwrap(), 4);
    }

    #[test]
    fn test_hyperthreads_share_core_ids() {
        // 2 cores with 2 threads each
        let table = "\
processor\t: 0
physical id\t: 0
core id\t\t: 0
processor\t: 1
physical id\t: 0
core id\t\t: 1
processor\t: 2
physical id\t: 0
core id\t\t: 0
processor\t: 3
physical id\t: 0
core id\t\t: 1
";
        assert_eq!(parse(table).physical_cores().unwrap(), 2);
    }

    #[test]
    fn test_no_topology_fields() {
        // Typical of some ARM and virtualized kernels.
        let table = "\
processor\t: 0
BogoMIPS\t: 48.00
Features\t: fp asimd evtstrm

processor\t: 1
BogoMIPS\t: 48.00
";
        let topology = parse(table);
        assert_eq!(topology, CpuTopology::default());
        assert!(matches!(
            topology.physical_cores(),
            Err(DetectionError::NoTopologyFields)
        ));
    }

    #[test]
    fn test_only_physical_id_present() {
        let topology = parse("physical id : 1\nphysical id : 0\n");
        assert_eq!(topology.max_core_id, None);
        assert_eq!(topology.physical_cores().unwrap(), 2);
    }

    #[test]
    fn test_asymmetric_packages_use_maxima() {
        // Package 0 has cores 0..=3, package 1 only core 0; the estimate still
        // assumes four cores per package.
        let table = "\
physical id : 0
core id : 3
physical id : 1
core id : 0
";
        assert_eq!(parse(table).physical_cores().unwrap(), 8);
    }

    #[test]
    fn test_ignores_unparsable_and_similar_keys() {
        let table = "\
core id : not-a-number
core ids : 9
cpu cores : 16
core id :
no separator here
core id : 2
";
        let topology = parse(table);
        assert_eq!(topology.max_core_id, Some(2));
        assert_eq!(topology.max_physical_id, None);
        assert_eq!(topology.physical_cores().unwrap(), 3);
    }

    #[test]
    fn test_invalid_utf8_in_other_fields() {
        let table: &[u8] = b"\
processor\t: 0
model name\t: Foo \xff CPU
physical id\t: 0
core id\t\t: 0

processor\t: 1
model name\t: Foo \xff CPU
physical id\t: 0
core id\t\t: 1
";
        let topology = CpuTopology::from_reader(Cursor::new(table)).unwrap();
        assert_eq!(topology.physical_cores().unwrap(), 2);
    }

    #[test]
    fn test_crlf_line_endings() {
        let topology = parse("physical id\t: 1\r\ncore id\t\t: 3\r\n");
        assert_eq!(topology.physical_cores().unwrap(), 8);
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "physical id\t: 0\ncore id\t\t: 5\n").unwrap();
        file.flush().unwrap();

        let topology = CpuTopology::from_path(file.path()).unwrap();
        assert_eq!(topology.physical_cores().unwrap(), 6);
    }

    #[test]
    fn test_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = CpuTopology::from_path(dir.path().join("cpuinfo"));
        assert!(matches!(result, Err(DetectionError::Io(_))));
    }
}
