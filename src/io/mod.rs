mod compiler;
mod ops;

pub use compiler::compile_iconset;
pub use ops::{count_pngs, ensure_dir, file_size, remove_dir, write_file};
