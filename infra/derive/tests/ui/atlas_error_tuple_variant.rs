use atlas_derive::atlas_error;

#[atlas_error]
pub enum DemoError {
    Io(std::io::Error),
}

fn main() {}
