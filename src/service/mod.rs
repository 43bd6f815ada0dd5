//! HorseService: business rules over a HorseStore.

mod horse;
mod validation;
pub use horse::HorseService;
pub use validation::RequestValidator;
