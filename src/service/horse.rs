//! Horse business rules on top of a `HorseStore`.

use super::RequestValidator;
use crate::error::AppError;
use crate::model::{AvailabilityFilter, Horse, HorseInput};
use crate::store::HorseStore;

pub struct HorseService;

impl HorseService {
    pub async fn list(store: &dyn HorseStore, filter: AvailabilityFilter) -> Result<Vec<Horse>, AppError> {
        store.list(filter).await
    }

    pub async fn get(store: &dyn HorseStore, id: i32) -> Result<Horse, AppError> {
        store.get(id).await?.ok_or_else(|| not_found(id))
    }

    pub async fn create(store: &dyn HorseStore, input: &HorseInput) -> Result<Horse, AppError> {
        RequestValidator::validate(input)?;
        let horse = store.insert(input).await?;
        tracing::info!(id = horse.id, breed = %horse.breed, "horse created");
        Ok(horse)
    }

    /// Apply age and availability. The breed in `input` must equal the stored one.
    pub async fn update(store: &dyn HorseStore, id: i32, input: &HorseInput) -> Result<Horse, AppError> {
        RequestValidator::validate(input)?;
        let existing = store.get(id).await?.ok_or_else(|| not_found(id))?;
        if existing.breed != input.breed {
            tracing::warn!(id, stored = %existing.breed, requested = %input.breed, "breed change rejected");
            return Err(AppError::BadRequest("breed cannot be changed".into()));
        }
        let horse = store
            .update(id, input.age, input.available_for_riding)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!(id, age = horse.age, available = horse.available_for_riding, "horse updated");
        Ok(horse)
    }

    /// Only horses available for riding may be removed.
    pub async fn delete(store: &dyn HorseStore, id: i32) -> Result<(), AppError> {
        let existing = store.get(id).await?.ok_or_else(|| not_found(id))?;
        if !existing.available_for_riding {
            tracing::warn!(id, "delete of unavailable horse rejected");
            return Err(AppError::BadRequest(
                "cannot delete a horse that is not available for riding".into(),
            ));
        }
        if !store.delete(id).await? {
            return Err(not_found(id));
        }
        tracing::info!(id, "horse deleted");
        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("horse {}", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryHorseStore;

    fn input(breed: &str, age: i32, available: bool) -> HorseInput {
        HorseInput {
            breed: breed.into(),
            age,
            available_for_riding: available,
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_same_fields() {
        let store = MemoryHorseStore::new();
        let created = HorseService::create(&store, &input("Fryz", 8, true)).await.unwrap();
        let fetched = HorseService::get(&store, created.id).await.unwrap();
        assert_eq!(created, fetched);
        assert_eq!(fetched.breed, "Fryz");
        assert_eq!(fetched.age, 8);
        assert!(fetched.available_for_riding);
    }

    #[tokio::test]
    async fn update_rejects_breed_change() {
        let store = MemoryHorseStore::new();
        let h = HorseService::create(&store, &input("Arab", 4, true)).await.unwrap();
        let err = HorseService::update(&store, h.id, &input("Hucul", 5, false)).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        let unchanged = HorseService::get(&store, h.id).await.unwrap();
        assert_eq!(unchanged, h);
    }

    #[tokio::test]
    async fn update_persists_age_and_availability() {
        let store = MemoryHorseStore::new();
        let h = HorseService::create(&store, &input("Arab", 4, true)).await.unwrap();
        let updated = HorseService::update(&store, h.id, &input("Arab", 5, false)).await.unwrap();
        assert_eq!(updated.age, 5);
        assert!(!updated.available_for_riding);
        assert_eq!(HorseService::get(&store, h.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn update_missing_horse_is_not_found() {
        let store = MemoryHorseStore::new();
        let err = HorseService::update(&store, 42, &input("Arab", 1, true)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_is_gated_on_availability() {
        let store = MemoryHorseStore::new();
        let busy = HorseService::create(&store, &input("Konik", 10, false)).await.unwrap();
        let free = HorseService::create(&store, &input("Konik", 11, true)).await.unwrap();

        let err = HorseService::delete(&store, busy.id).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert!(HorseService::get(&store, busy.id).await.is_ok());

        HorseService::delete(&store, free.id).await.unwrap();
        let err = HorseService::get(&store, free.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn create_validates_input() {
        let store = MemoryHorseStore::new();
        let err = HorseService::create(&store, &input("", 3, true)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(HorseService::list(&store, AvailabilityFilter::All).await.unwrap().is_empty());
    }
}
