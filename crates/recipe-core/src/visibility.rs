//! Optimistic visibility toggle
//!
//! The control flips first, then the backend is asked. If the backend refuses
//! or is unreachable the control is flipped back and the user is told. Nothing
//! is retried.

use crate::api::{ApiError, RecipeApi};
use crate::recipe::RecipeId;

/// The on-page switch reflecting a recipe's public flag
pub trait VisibilityControl {
    fn set_public(&self, is_public: bool);

    /// Show a non-blocking failure notice
    fn notify_failure(&self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisibilityOutcome {
    /// Backend accepted; the control already shows this value
    Committed(bool),
    /// Control restored to its previous value
    RolledBack(ApiError),
}

pub fn failure_notice(error: &ApiError) -> &'static str {
    match error {
        ApiError::Forbidden => "Only the owner can change visibility",
        ApiError::Unauthorized => "Please sign in again",
        ApiError::Network(_) => "Server error",
        _ => "Failed to change visibility",
    }
}

pub async fn toggle_visibility<A, C>(
    api: &A,
    control: &C,
    recipe_id: RecipeId,
    previous: bool,
    requested: bool,
) -> VisibilityOutcome
where
    A: RecipeApi + ?Sized,
    C: VisibilityControl + ?Sized,
{
    control.set_public(requested);

    match api.set_visibility(recipe_id, requested).await {
        Ok(_) => {
            log::info!("[VISIBILITY] Recipe {} is_public={}", recipe_id, requested);
            VisibilityOutcome::Committed(requested)
        }
        Err(err) => {
            log::warn!("[VISIBILITY] Recipe {} rollback: {}", recipe_id, err);
            control.set_public(previous);
            control.notify_failure(failure_notice(&err));
            VisibilityOutcome::RolledBack(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use async_trait::async_trait;

    use super::*;
    use crate::api::{ApiResult, ImageRef};
    use crate::ingredient::EssentialMap;
    use crate::recipe::{Recipe, RecipeDraft};

    type Journal = Rc<RefCell<Vec<String>>>;

    struct FakeApi {
        journal: Journal,
        reject_with: Option<ApiError>,
    }

    struct FakeControl {
        journal: Journal,
    }

    impl VisibilityControl for FakeControl {
        fn set_public(&self, is_public: bool) {
            self.journal.borrow_mut().push(format!("control={}", is_public));
        }

        fn notify_failure(&self, message: &str) {
            self.journal.borrow_mut().push(format!("notice={}", message));
        }
    }

    fn make_recipe(id: RecipeId, is_public: bool) -> Recipe {
        Recipe {
            id,
            name: "Soup".to_string(),
            description: String::new(),
            ingredients: String::new(),
            instructions: String::new(),
            image: None,
            is_public,
            is_owner: true,
        }
    }

    #[async_trait(?Send)]
    impl RecipeApi for FakeApi {
        async fn list_recipes(&self) -> ApiResult<Vec<Recipe>> {
            Ok(Vec::new())
        }

        async fn get_recipe(&self, _id: RecipeId) -> ApiResult<Recipe> {
            Err(ApiError::NotFound)
        }

        async fn essential_map(&self) -> ApiResult<EssentialMap> {
            Ok(EssentialMap::default())
        }

        async fn create_recipe(&self, _draft: &RecipeDraft) -> ApiResult<Recipe> {
            Err(ApiError::NotFound)
        }

        async fn update_recipe(&self, _id: RecipeId, _draft: &RecipeDraft) -> ApiResult<Recipe> {
            Err(ApiError::NotFound)
        }

        async fn delete_recipe(&self, _id: RecipeId) -> ApiResult<()> {
            Ok(())
        }

        async fn set_visibility(&self, id: RecipeId, is_public: bool) -> ApiResult<Recipe> {
            self.journal.borrow_mut().push(format!("patch {} {}", id, is_public));
            match &self.reject_with {
                Some(err) => Err(err.clone()),
                None => Ok(make_recipe(id, is_public)),
            }
        }

        async fn upload_image(
            &self,
            _id: RecipeId,
            _file_name: &str,
            _mime: &str,
            _bytes: Vec<u8>,
        ) -> ApiResult<ImageRef> {
            Err(ApiError::NotFound)
        }

        async fn delete_image(&self, _id: RecipeId) -> ApiResult<()> {
            Ok(())
        }
    }

    fn setup(reject_with: Option<ApiError>) -> (FakeApi, FakeControl, Journal) {
        let journal: Journal = Rc::default();
        let api = FakeApi { journal: journal.clone(), reject_with };
        let control = FakeControl { journal: journal.clone() };
        (api, control, journal)
    }

    #[tokio::test]
    async fn test_success_applies_before_call_and_keeps_value() {
        let (api, control, journal) = setup(None);
        let outcome = toggle_visibility(&api, &control, 7, false, true).await;

        assert_eq!(outcome, VisibilityOutcome::Committed(true));
        assert_eq!(*journal.borrow(), vec!["control=true", "patch 7 true"]);
    }

    #[tokio::test]
    async fn test_forbidden_reverts_and_notifies() {
        let (api, control, journal) = setup(Some(ApiError::Forbidden));
        let outcome = toggle_visibility(&api, &control, 7, false, true).await;

        assert_eq!(outcome, VisibilityOutcome::RolledBack(ApiError::Forbidden));
        assert_eq!(
            *journal.borrow(),
            vec![
                "control=true",
                "patch 7 true",
                "control=false",
                "notice=Only the owner can change visibility",
            ]
        );
    }

    #[tokio::test]
    async fn test_network_failure_is_not_retried() {
        let (api, control, journal) = setup(Some(ApiError::Network("offline".to_string())));
        let outcome = toggle_visibility(&api, &control, 3, true, false).await;

        assert!(matches!(outcome, VisibilityOutcome::RolledBack(ApiError::Network(_))));
        let patches = journal.borrow().iter().filter(|e| e.starts_with("patch")).count();
        assert_eq!(patches, 1);
        assert_eq!(journal.borrow().last().unwrap(), "notice=Server error");
    }
}
