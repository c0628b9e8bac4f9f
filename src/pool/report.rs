use std::fmt;

/// Usage of one size class at the moment of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassReport {
    /// Physical size of every block in this class, in bytes.
    pub block_size: usize,
    /// Blocks currently checked out.
    pub in_use: usize,
    /// Blocks ever allocated for this class.
    pub total: usize,
}

/// Snapshot of pool usage across all size classes.
///
/// Only classes with at least one block in use appear in `classes`; the
/// grand totals count every block the pool has ever allocated. The
/// `Display` form is the human-readable rundown, one line per active class
/// followed by the totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolReport {
    /// Per-class usage, ascending by block size, active classes only.
    pub classes: Vec<ClassReport>,
    /// Bytes currently checked out (class size times in-use count).
    pub used_bytes: usize,
    /// Bytes ever allocated (class size times total count).
    pub allocated_bytes: usize,
}

impl fmt::Display for PoolReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for class in &self.classes {
            writeln!(
                f,
                "{} bytes: {}/{} blocks in use.",
                class.block_size, class.in_use, class.total
            )?;
        }
        writeln!(
            f,
            "Total memory used/allocated: {}/{}",
            self.used_bytes, self.allocated_bytes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_active_classes_then_totals() {
        let report = PoolReport {
            classes: vec![
                ClassReport {
                    block_size: 1024,
                    in_use: 2,
                    total: 3,
                },
                ClassReport {
                    block_size: 8192,
                    in_use: 1,
                    total: 1,
                },
            ],
            used_bytes: 2 * 1024 + 8192,
            allocated_bytes: 3 * 1024 + 8192,
        };
        assert_eq!(
            report.to_string(),
            "1024 bytes: 2/3 blocks in use.\n\
             8192 bytes: 1/1 blocks in use.\n\
             Total memory used/allocated: 10240/11264\n"
        );
    }

    #[test]
    fn display_of_idle_pool_is_totals_only() {
        let report = PoolReport {
            classes: Vec::new(),
            used_bytes: 0,
            allocated_bytes: 4096,
        };
        assert_eq!(report.to_string(), "Total memory used/allocated: 0/4096\n");
    }
}
