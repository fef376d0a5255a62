pub mod button;
pub mod loading_spinner;

pub use button::{Button, ButtonVariant};
pub use loading_spinner::{LoadingSpinner, SpinnerSize};
