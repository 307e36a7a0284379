use crate::calendar::month_name;
use crate::data_point::DataPoint;
use crate::dataset::Dataset;
use crate::selection::Selection;

/// Whether a single point belongs to the selection.
pub fn matches(point: &DataPoint, selection: &Selection) -> bool {
    point.company == selection.company && month_name(&point.date) == selection.selected_month
}

/// Keep the points of `dataset` matching both the selected company and month,
/// in their original order.
///
/// A missing dataset filters to nothing.
pub fn filter_points(dataset: Option<&Dataset>, selection: &Selection) -> Vec<DataPoint> {
    let Some(dataset) = dataset else {
        return Vec::new();
    };
    dataset
        .iter()
        .filter(|point| matches(point, selection))
        .cloned()
        .collect()
}
