use crate::data_point::DataPoint;
use std::ops::Deref;
use std::sync::Arc;

/// An immutable, cheaply cloneable sequence of data points.
///
/// Clones share the same allocation. Equality is handle identity, not
/// content: a freshly loaded dataset is a new value even if its rows match
/// the previous one, which is what decides whether the chart must redraw.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    points: Arc<Vec<DataPoint>>,
}

impl Dataset {
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self {
            points: Arc::new(points),
        }
    }

    /// True when both handles point at the same loaded data.
    pub fn is_same(&self, other: &Dataset) -> bool {
        Arc::ptr_eq(&self.points, &other.points)
    }
}

impl PartialEq for Dataset {
    fn eq(&self, other: &Self) -> bool {
        self.is_same(other)
    }
}

impl Deref for Dataset {
    type Target = [DataPoint];

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> Vec<DataPoint> {
        let date = NaiveDate::from_ymd_opt(2023, 11, 1).unwrap();
        vec![DataPoint::new(date, "Apple", 150.0, 152.0)]
    }

    #[test]
    fn clones_share_identity() {
        let a = Dataset::new(sample());
        let b = a.clone();
        assert!(a.is_same(&b));
        assert_eq!(a, b);
    }

    #[test]
    fn equal_content_is_a_different_dataset() {
        let a = Dataset::new(sample());
        let b = Dataset::new(sample());
        assert_eq!(a[..], b[..]);
        assert_ne!(a, b);
    }

    #[test]
    fn derefs_to_slice() {
        let data = Dataset::new(sample());
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].company, "Apple");
        assert!(Dataset::default().is_empty());
    }
}
