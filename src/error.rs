use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid {name}: {value:?}")]
    Config { name: &'static str, value: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("bind failed: {0}")]
    Bind(std::io::Error),
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}
