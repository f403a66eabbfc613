//! Small statistics toolkit over `f64` samples.
//!
//! - [`descriptive`]: min, max, mean, median and spread of a sample
//! - [`percentiles`]: nearest-rank percentiles
//!
//! # Examples
//!
//! ```
//! use hoopgrid_stats::{descriptive::DescriptiveStats, percentiles::Percentiles};
//!
//! let prominence = [0.5, 2.0, 8.0, 1.0, 3.5];
//! let stats = DescriptiveStats::new(prominence).unwrap();
//! assert_eq!(stats.median, 2.0);
//!
//! let percentiles = Percentiles::new(&prominence, &[50.0, 90.0]);
//! assert_eq!(percentiles.get(90.0), Some(8.0));
//! ```

pub mod descriptive;
pub mod percentiles;
