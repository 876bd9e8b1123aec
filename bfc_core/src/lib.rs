pub mod batch;
pub mod codec;
pub mod error;
pub mod ops;
pub mod registry;
pub mod report;
pub mod result;

pub use batch::{compress_folder, decompress_folder};
pub use codec::{Codec, LevelRange};
pub use error::Error;
pub use ops::{
    compress_file, decompress_file, decompress_file_to_folder, CompressOptions, DecompressOptions,
};
pub use registry::Registry;
pub use result::{BatchResult, FileResult, Outcome};
