use thiserror::Error;

pub type MockResult<T> = Result<T, MockError>;

#[derive(Error, Debug)]
pub enum MockError {
    #[error("Failed to start runtime: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("Failed to bind mock service: {message}")]
    Bind { message: String },

    #[error("Mock service thread exited before reporting its address")]
    ThreadExited,
}
