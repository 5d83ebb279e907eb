pub mod builder;
pub mod demuxer;
pub mod errors;
pub mod framed;
pub mod header;
pub mod tag;
mod test;
