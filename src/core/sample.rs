use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64, ensure_finite};
use crate::error::{ChartError, ChartResult};

/// Number of leading fields every sample row must carry:
/// `position, min, q1, median, q3, max`.
pub const CORE_FIELD_COUNT: usize = 6;

/// Outlier storage; most categories carry only a handful.
pub type Outliers = SmallVec<[f64; 4]>;

/// One category's five-number summary plus optional outliers.
///
/// Serializes as the flat row `[position, min, q1, median, q3, max, outliers...]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Sample {
    pub position: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub outliers: Outliers,
}

impl Sample {
    /// Builds a sample without outliers.
    ///
    /// All values must be finite. Ordering (`min <= q1 <= median <= q3 <= max`)
    /// is not enforced; see [`Sample::is_ordered`].
    pub fn new(
        position: f64,
        min: f64,
        q1: f64,
        median: f64,
        q3: f64,
        max: f64,
    ) -> ChartResult<Self> {
        Ok(Self {
            position: ensure_finite(position, "sample position")?,
            min: ensure_finite(min, "sample min")?,
            q1: ensure_finite(q1, "sample q1")?,
            median: ensure_finite(median, "sample median")?,
            q3: ensure_finite(q3, "sample q3")?,
            max: ensure_finite(max, "sample max")?,
            outliers: Outliers::new(),
        })
    }

    /// Appends outlier values. Outliers may lie outside `[min, max]`.
    pub fn with_outliers<I>(mut self, outliers: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        for value in outliers {
            self.outliers.push(ensure_finite(value, "sample outlier")?);
        }
        Ok(self)
    }

    /// Parses a flat row `[position, min, q1, median, q3, max, outliers...]`.
    pub fn from_row(row: &[f64]) -> ChartResult<Self> {
        if row.len() < CORE_FIELD_COUNT {
            return Err(ChartError::MalformedSample { len: row.len() });
        }

        Self::new(row[0], row[1], row[2], row[3], row[4], row[5])?
            .with_outliers(row[CORE_FIELD_COUNT..].iter().copied())
    }

    /// Builds a time-categorised sample from decimal statistics.
    pub fn from_decimal_time(
        time: DateTime<Utc>,
        min: Decimal,
        q1: Decimal,
        median: Decimal,
        q3: Decimal,
        max: Decimal,
    ) -> ChartResult<Self> {
        Self::new(
            datetime_to_unix_seconds(time),
            decimal_to_f64(min, "min")?,
            decimal_to_f64(q1, "q1")?,
            decimal_to_f64(median, "median")?,
            decimal_to_f64(q3, "q3")?,
            decimal_to_f64(max, "max")?,
        )
    }

    /// Returns `[min, q1, median, q3, max]`.
    #[must_use]
    pub fn five_numbers(&self) -> [f64; 5] {
        [self.min, self.q1, self.median, self.q3, self.max]
    }

    /// Returns `true` when `min <= q1 <= median <= q3 <= max`.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.five_numbers()
            .windows(2)
            .all(|pair| pair[0] <= pair[1])
    }

    #[must_use]
    pub fn to_row(&self) -> Vec<f64> {
        let mut row = Vec::with_capacity(CORE_FIELD_COUNT + self.outliers.len());
        row.push(self.position);
        row.extend_from_slice(&self.five_numbers());
        row.extend(self.outliers.iter().copied());
        row
    }
}

impl TryFrom<Vec<f64>> for Sample {
    type Error = ChartError;

    fn try_from(row: Vec<f64>) -> ChartResult<Self> {
        Self::from_row(&row)
    }
}

impl From<Sample> for Vec<f64> {
    fn from(sample: Sample) -> Self {
        sample.to_row()
    }
}

/// Parses every row, failing on the first malformed one.
pub fn samples_from_rows<R>(rows: &[R]) -> ChartResult<Vec<Sample>>
where
    R: AsRef<[f64]>,
{
    rows.iter().map(|row| Sample::from_row(row.as_ref())).collect()
}
