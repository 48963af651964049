mod catalog;
mod error;
mod segmenter;
mod upload;
