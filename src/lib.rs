//! Single-machine batch planning.
//!
//! Packs discrete jobs into sequential machine batches bounded by a
//! maximum batch volume and a maximum item count. Jobs are ordered by
//! priority tier and packed greedily; every batch runs its jobs together
//! and finishes with its slowest member.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, `MachineConstraints`,
//!   `PlannedBatch`, `BatchPlan`, `ScheduleResult`
//! - **`validation`**: Input feasibility checks (limits, volumes, priorities)
//! - **`planner`**: Greedy batch planner and plan KPIs
//! - **`stats`**: Divide-and-conquer min/max helper
//!
//! # Example
//!
//! ```
//! use batch_plan::models::{Job, MachineConstraints};
//! use batch_plan::planner::BatchPlanner;
//!
//! let jobs = vec![
//!     Job::new("M1", 250.0, 1, 180.0),
//!     Job::new("M2", 200.0, 1, 150.0),
//!     Job::new("M3", 180.0, 2, 120.0),
//! ];
//! let planner = BatchPlanner::new(MachineConstraints::new(300.0, 2));
//! let result = planner.plan(&jobs).unwrap();
//!
//! assert_eq!(result.print_order, vec!["M1", "M2", "M3"]);
//! assert_eq!(result.total_time, 450.0);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 8 (Batch Processing)
//! - Coffman et al. (1996), "Approximation Algorithms for Bin Packing: A Survey"

pub mod models;
pub mod planner;
pub mod stats;
pub mod validation;
