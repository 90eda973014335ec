// src/relationship.rs

use crate::errors::DetectionError;

/// Relationship kind of one record in the Windows logical processor
/// information table. Discriminants follow `LOGICAL_PROCESSOR_RELATIONSHIP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessorRelationship {
    /// The logical processors in the record's mask share one physical core.
    ProcessorCore,
    NumaNode,
    Cache,
    ProcessorPackage,
    Group,
    Other(i32),
}

impl ProcessorRelationship {
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => ProcessorRelationship::ProcessorCore,
            1 => ProcessorRelationship::NumaNode,
            2 => ProcessorRelationship::Cache,
            3 => ProcessorRelationship::ProcessorPackage,
            4 => ProcessorRelationship::Group,
            other => ProcessorRelationship::Other(other),
        }
    }
}

/// Counts the physical core records in a processor relationship table.
///
/// An empty count is an error so the caller falls back instead of
/// reporting zero cores.
pub fn count_physical_cores<I>(records: I) -> Result<usize, DetectionError>
where
    I: IntoIterator<Item = ProcessorRelationship>,
{
    let cores = records
        .into_iter()
        .filter(|r| *r == ProcessorRelationship::ProcessorCore)
        .count();

    if cores == 0 {
        return Err(DetectionError::NoCoreRecords);
    }
    Ok(cores)
}

#[cfg(test)]
mod tests {
    use super::{ProcessorRelationship::*, *};

    #[test]
    fn test_counts_only_core_records() {
        // 4 cores, 1 package, 1 NUMA node and a few caches
        let table = [
            ProcessorCore,
            Cache,
            Cache,
            ProcessorCore,
            Cache,
            ProcessorCore,
            ProcessorPackage,
            ProcessorCore,
            NumaNode,
            Cache,
        ];
        assert_eq!(count_physical_cores(table).unwrap(), 4);
    }

    #[test]
    fn test_zero_core_records_is_error() {
        let table = [ProcessorPackage, NumaNode, Cache];
        assert!(matches!(
            count_physical_cores(table),
            Err(DetectionError::NoCoreRecords)
        ));
        assert!(matches!(
            count_physical_cores(std::iter::empty()),
            Err(DetectionError::NoCoreRecords)
        ));
    }

    #[test]
    fn test_from_raw() {
        assert_eq!(ProcessorRelationship::from_raw(0), ProcessorCore);
        assert_eq!(ProcessorRelationship::from_raw(3), ProcessorPackage);
        assert_eq!(ProcessorRelationship::from_raw(7), Other(7));
        assert_eq!(ProcessorRelationship::from_raw(0xffff), Other(0xffff));
    }
}
