pub mod capture;
pub mod clipboard;
pub mod config;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod normalize;
pub mod notify;
pub mod ocr;
pub mod overlay;
pub mod selection;
pub mod session;
pub mod tools;
pub mod transform;
pub mod word;
