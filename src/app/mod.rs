// Application layer - Use case interactors

pub mod container;
pub mod wizard_interactor;

// Re-export interactors
pub use container::{AppContainer, DefaultAppContainer};
pub use wizard_interactor::ClipWizard;
