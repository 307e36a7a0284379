use crate::calendar::{DEFAULT_COMPANY, DEFAULT_MONTH};
use serde::{Deserialize, Serialize};

/// The company and month currently chosen in the chart controls.
///
/// Values are not validated against any dataset: a company or month with
/// no rows simply filters down to nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub company: String,
    pub selected_month: String,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            company: DEFAULT_COMPANY.to_string(),
            selected_month: DEFAULT_MONTH.to_string(),
        }
    }
}

impl Selection {
    pub fn new(company: impl Into<String>, selected_month: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            selected_month: selected_month.into(),
        }
    }

    /// Handle a "company chosen" event. Returns whether the value changed.
    pub fn set_company(&mut self, company: impl Into<String>) -> bool {
        let company = company.into();
        if self.company == company {
            return false;
        }
        self.company = company;
        true
    }

    /// Handle a "month chosen" event. Returns whether the value changed.
    pub fn set_month(&mut self, month: impl Into<String>) -> bool {
        let month = month.into();
        if self.selected_month == month {
            return false;
        }
        self.selected_month = month;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection() {
        let selection = Selection::default();
        assert_eq!(selection.company, "Apple");
        assert_eq!(selection.selected_month, "November");
    }

    #[test]
    fn test_set_company_touches_one_field() {
        let mut selection = Selection::default();
        assert!(selection.set_company("Meta"));
        assert_eq!(selection, Selection::new("Meta", "November"));
        assert!(!selection.set_company("Meta"));
    }

    #[test]
    fn test_set_month_accepts_anything() {
        let mut selection = Selection::default();
        assert!(selection.set_month("Smarch"));
        assert_eq!(selection.selected_month, "Smarch");
        assert_eq!(selection.company, "Apple");
    }
}
