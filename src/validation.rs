//! Input validation for batch planning.
//!
//! Checks that the machine constraints and every job are feasible
//! before any batch is formed. Detects:
//! - Non-positive machine limits
//! - Non-positive job volume or duration
//! - Priority outside the supported tiers
//! - Jobs that cannot fit on the machine even alone
//!
//! Validation stops at the first failure; a request is either fully
//! valid or rejected as a whole.

use thiserror::Error;
use tracing::warn;

use crate::models::{Job, MachineConstraints};

/// Validation result.
pub type ValidationResult = Result<(), ValidationError>;

/// A validation failure, carrying the offending values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// Machine `max_volume` or `max_items` is not strictly positive.
    #[error("Invalid machine constraints: max_volume={max_volume}, max_items={max_items}")]
    InvalidConstraints {
        /// Offending volume limit.
        max_volume: f64,
        /// Offending item limit.
        max_items: i64,
    },

    /// A job's volume or duration is not strictly positive.
    #[error("Job '{job_id}' has invalid volume or duration (volume={volume}, duration={duration})")]
    InvalidJob {
        /// Offending job.
        job_id: String,
        /// Job volume.
        volume: f64,
        /// Job duration.
        duration: f64,
    },

    /// A job's priority is outside `1..=3`.
    #[error("Job '{job_id}' has invalid priority {priority} (expected 1..=3)")]
    InvalidPriority {
        /// Offending job.
        job_id: String,
        /// Job priority.
        priority: i64,
    },

    /// A job's volume alone exceeds the machine volume limit.
    #[error("Job '{job_id}' volume {volume} exceeds machine capacity {max_volume}")]
    CapacityExceeded {
        /// Offending job.
        job_id: String,
        /// Job volume.
        volume: f64,
        /// Machine volume limit.
        max_volume: f64,
    },
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Machine limits are non-positive.
    InvalidConstraints,
    /// Job volume or duration is non-positive.
    InvalidJob,
    /// Job priority is out of range.
    InvalidPriority,
    /// Job does not fit on the machine.
    CapacityExceeded,
}

impl ValidationError {
    /// Error category.
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::InvalidConstraints { .. } => ValidationErrorKind::InvalidConstraints,
            Self::InvalidJob { .. } => ValidationErrorKind::InvalidJob,
            Self::InvalidPriority { .. } => ValidationErrorKind::InvalidPriority,
            Self::CapacityExceeded { .. } => ValidationErrorKind::CapacityExceeded,
        }
    }

    /// ID of the job that triggered the error, if the error is job-specific.
    pub fn job_id(&self) -> Option<&str> {
        match self {
            Self::InvalidConstraints { .. } => None,
            Self::InvalidJob { job_id, .. }
            | Self::InvalidPriority { job_id, .. }
            | Self::CapacityExceeded { job_id, .. } => Some(job_id),
        }
    }
}

/// Validates the input of a batch planning request.
///
/// Checks, stopping at the first failure:
/// 1. `max_volume > 0` and `max_items > 0`
/// 2. Per job, in input order: `volume > 0` and `duration > 0`
/// 3. Per job: `priority` in `1..=3`
/// 4. Per job: `volume <= max_volume`
///
/// NaN values fail the positivity checks.
///
/// # Example
/// ```
/// use batch_plan::models::{Job, MachineConstraints};
/// use batch_plan::validation::{validate_input, ValidationErrorKind};
///
/// let limits = MachineConstraints::new(300.0, 2);
/// let jobs = vec![Job::new("M1", 400.0, 1, 60.0)];
///
/// let err = validate_input(&jobs, &limits).unwrap_err();
/// assert_eq!(err.kind(), ValidationErrorKind::CapacityExceeded);
/// assert_eq!(err.job_id(), Some("M1"));
/// ```
pub fn validate_input(jobs: &[Job], constraints: &MachineConstraints) -> ValidationResult {
    let result = check_constraints(constraints)
        .and_then(|()| jobs.iter().try_for_each(|job| check_job(job, constraints)));

    if let Err(ref err) = result {
        warn!(kind = ?err.kind(), job_id = err.job_id(), "planning request rejected: {err}");
    }
    result
}

fn check_constraints(constraints: &MachineConstraints) -> ValidationResult {
    if constraints.is_valid() {
        Ok(())
    } else {
        Err(ValidationError::InvalidConstraints {
            max_volume: constraints.max_volume,
            max_items: constraints.max_items,
        })
    }
}

fn check_job(job: &Job, constraints: &MachineConstraints) -> ValidationResult {
    if !is_positive(job.volume) || !is_positive(job.duration) {
        return Err(ValidationError::InvalidJob {
            job_id: job.id.clone(),
            volume: job.volume,
            duration: job.duration,
        });
    }

    if !job.has_valid_priority() {
        return Err(ValidationError::InvalidPriority {
            job_id: job.id.clone(),
            priority: job.priority,
        });
    }

    if job.volume > constraints.max_volume {
        return Err(ValidationError::CapacityExceeded {
            job_id: job.id.clone(),
            volume: job.volume,
            max_volume: constraints.max_volume,
        });
    }

    Ok(())
}

/// `false` for NaN.
#[inline]
fn is_positive(value: f64) -> bool {
    value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> MachineConstraints {
        MachineConstraints::new(300.0, 2)
    }

    fn sample_jobs() -> Vec<Job> {
        vec![
            Job::new("M1", 100.0, 1, 120.0),
            Job::new("M2", 150.0, 2, 90.0),
            Job::new("M3", 120.0, 3, 150.0),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_jobs(), &limits()).is_ok());
    }

    #[test]
    fn test_empty_jobs_valid() {
        assert!(validate_input(&[], &limits()).is_ok());
    }

    #[test]
    fn test_invalid_constraints() {
        for bad in [
            MachineConstraints::new(0.0, 2),
            MachineConstraints::new(-5.0, 2),
            MachineConstraints::new(300.0, 0),
            MachineConstraints::new(300.0, -1),
        ] {
            let err = validate_input(&sample_jobs(), &bad).unwrap_err();
            assert_eq!(err.kind(), ValidationErrorKind::InvalidConstraints);
            assert_eq!(err.job_id(), None);
        }
    }

    #[test]
    fn test_constraints_checked_before_jobs() {
        let jobs = vec![Job::new("bad", -1.0, 9, 0.0)];
        let err = validate_input(&jobs, &MachineConstraints::new(0.0, 0)).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::InvalidConstraints);
    }

    #[test]
    fn test_invalid_volume() {
        let jobs = vec![Job::new("M1", 0.0, 1, 120.0)];
        let err = validate_input(&jobs, &limits()).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::InvalidJob);
        assert_eq!(err.job_id(), Some("M1"));
    }

    #[test]
    fn test_invalid_duration() {
        let jobs = vec![Job::new("M1", 10.0, 1, -3.0)];
        let err = validate_input(&jobs, &limits()).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::InvalidJob);
    }

    #[test]
    fn test_nan_volume_rejected() {
        let jobs = vec![Job::new("M1", f64::NAN, 1, 10.0)];
        let err = validate_input(&jobs, &limits()).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::InvalidJob);
    }

    #[test]
    fn test_invalid_priority() {
        for p in [0, 4, -1] {
            let jobs = vec![Job::new("M1", 10.0, p, 10.0)];
            let err = validate_input(&jobs, &limits()).unwrap_err();
            assert_eq!(err.kind(), ValidationErrorKind::InvalidPriority);
            assert_eq!(err.job_id(), Some("M1"));
        }
    }

    #[test]
    fn test_priority_beyond_i32_rejected() {
        let jobs = vec![Job::new("wide", 10.0, 5_000_000_000, 10.0)];
        let err = validate_input(&jobs, &limits()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidPriority {
                job_id: "wide".into(),
                priority: 5_000_000_000,
            }
        );
    }

    #[test]
    fn test_capacity_exceeded() {
        let jobs = vec![Job::new("big", 300.5, 1, 10.0)];
        let err = validate_input(&jobs, &limits()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::CapacityExceeded {
                job_id: "big".into(),
                volume: 300.5,
                max_volume: 300.0,
            }
        );
    }

    #[test]
    fn test_volume_equal_to_limit_is_valid() {
        let jobs = vec![Job::new("exact", 300.0, 1, 10.0)];
        assert!(validate_input(&jobs, &limits()).is_ok());
    }

    #[test]
    fn test_volume_checked_before_priority_within_job() {
        let jobs = vec![Job::new("M1", -1.0, 7, 10.0)];
        let err = validate_input(&jobs, &limits()).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::InvalidJob);
    }

    #[test]
    fn test_first_failing_job_reported() {
        let jobs = vec![
            Job::new("ok", 10.0, 1, 10.0),
            Job::new("prio", 10.0, 5, 10.0),
            Job::new("big", 999.0, 1, 10.0),
        ];
        let err = validate_input(&jobs, &limits()).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::InvalidPriority);
        assert_eq!(err.job_id(), Some("prio"));
    }

    #[test]
    fn test_error_messages() {
        let err = ValidationError::InvalidPriority {
            job_id: "M7".into(),
            priority: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("M7"));
        assert!(msg.contains("1..=3"));

        let err = ValidationError::CapacityExceeded {
            job_id: "M8".into(),
            volume: 400.0,
            max_volume: 300.0,
        };
        assert!(err.to_string().contains("exceeds machine capacity 300"));
    }
}
