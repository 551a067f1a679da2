mod template;
mod writer;

pub use template::TemplateRenderer;
pub use writer::FileWriter;

#[derive(Debug, thiserror::Error)]
pub enum FilesError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("file error: {0}")]
    Internal(String),
}
