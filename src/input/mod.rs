//! Input processing module
//! Handles the skill catalog, the PDF guard and text extraction

pub mod catalog;
pub mod file_detector;
pub mod text_extractor;
pub mod manager;
