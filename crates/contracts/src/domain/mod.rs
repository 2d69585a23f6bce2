pub mod a001_client;
pub mod a002_service;
pub mod a003_inquiry;
pub mod common;
