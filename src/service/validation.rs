//! Request body validation for horse payloads.

use crate::error::AppError;
use crate::model::{HorseInput, BREED_MAX_LEN};

pub struct RequestValidator;

impl RequestValidator {
    /// Breed must be non-blank and fit the column; age must not be negative.
    pub fn validate(input: &HorseInput) -> Result<(), AppError> {
        if input.breed.trim().is_empty() {
            return Err(AppError::Validation("rasa is required".into()));
        }
        if input.breed.chars().count() > BREED_MAX_LEN {
            return Err(AppError::Validation(format!(
                "rasa must be at most {} characters",
                BREED_MAX_LEN
            )));
        }
        if input.age < 0 {
            return Err(AppError::Validation("wiek must be at least 0".into()));
        }
        Ok(())
    }
}
