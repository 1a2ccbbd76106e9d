use thiserror::Error;

pub type Result<T> = std::result::Result<T, ModelError>;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("{model} has not been fitted; call fit before predicting or inspecting the model")]
    NotFitted { model: &'static str },
}
