//! In-process store used when no DATABASE_URL is configured, and by tests.

use super::HorseStore;
use crate::error::AppError;
use crate::model::{AvailabilityFilter, Horse, HorseInput};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i32, Horse>,
    last_id: i32,
}

#[derive(Default)]
pub struct MemoryHorseStore {
    inner: Mutex<Inner>,
}

impl MemoryHorseStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panic while holding the lock cannot leave a half-written row.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl HorseStore for MemoryHorseStore {
    async fn list(&self, filter: AvailabilityFilter) -> Result<Vec<Horse>, AppError> {
        Ok(self.lock().rows.values().filter(|h| filter.matches(h)).cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Horse>, AppError> {
        Ok(self.lock().rows.get(&id).cloned())
    }

    async fn insert(&self, input: &HorseInput) -> Result<Horse, AppError> {
        let mut inner = self.lock();
        inner.last_id += 1;
        let horse = Horse {
            id: inner.last_id,
            breed: input.breed.clone(),
            age: input.age,
            available_for_riding: input.available_for_riding,
        };
        inner.rows.insert(horse.id, horse.clone());
        Ok(horse)
    }

    async fn update(&self, id: i32, age: i32, available_for_riding: bool) -> Result<Option<Horse>, AppError> {
        let mut inner = self.lock();
        Ok(inner.rows.get_mut(&id).map(|h| {
            h.age = age;
            h.available_for_riding = available_for_riding;
            h.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(self.lock().rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
