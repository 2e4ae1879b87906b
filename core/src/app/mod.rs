//! Application layer
//!
//! Contains the use cases. Each use case has a single `execute` entry point and
//! coordinates the domain ports it was built with.

pub mod authenticate;
pub mod register_new_pet;

pub use authenticate::{AuthenticateRequest, AuthenticateResponse, AuthenticateUseCase};
pub use register_new_pet::{RegisterNewPetRequest, RegisterNewPetResponse, RegisterNewPetUseCase};
