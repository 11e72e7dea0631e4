//! Ephemeral filter criteria for the book screens

use std::sync::{Arc, PoisonError, RwLock};

use validator::Validate;

use crate::{
    error::AppResult,
    models::criteria::{CriteriaUpdate, FilterCriteria},
};

/// Criteria currently applied to the catalog; reset on restart
#[derive(Clone, Default)]
pub struct CriteriaService {
    current: Arc<RwLock<FilterCriteria>>,
}

impl CriteriaService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> FilterCriteria {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Validate and merge a partial update; returns the resulting criteria
    pub fn update(&self, update: CriteriaUpdate) -> AppResult<FilterCriteria> {
        update.validate()?;
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        current.merge(update);
        tracing::debug!("Criteria now {:?}", *current);
        Ok(current.clone())
    }

    pub fn reset(&self) -> FilterCriteria {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = FilterCriteria::default();
        current.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::AppError, models::Category};

    #[test]
    fn test_update_and_reset() {
        let criteria = CriteriaService::new();
        assert_eq!(criteria.current(), FilterCriteria::default());

        let updated = criteria
            .update(CriteriaUpdate {
                category: Some("fantasy".to_string()),
                year: Some("1937".to_string()),
                ..CriteriaUpdate::default()
            })
            .unwrap();
        assert_eq!(updated.category, Category::Named("fantasy".to_string()));
        assert_eq!(criteria.current().year(), Some("1937"));

        assert_eq!(criteria.reset(), FilterCriteria::default());
        assert_eq!(criteria.current().category, Category::All);
    }

    #[test]
    fn test_invalid_update_leaves_criteria_untouched() {
        let criteria = CriteriaService::new();
        let result = criteria.update(CriteriaUpdate {
            genre: Some("g".repeat(101)),
            ..CriteriaUpdate::default()
        });
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(criteria.current(), FilterCriteria::default());
    }
}
