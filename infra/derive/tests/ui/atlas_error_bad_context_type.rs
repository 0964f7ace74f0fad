use atlas_derive::atlas_error;

#[atlas_error]
pub enum DemoError {
    #[error("IO error: {source}")]
    Io { source: std::io::Error, context: String },
}

fn main() {}
