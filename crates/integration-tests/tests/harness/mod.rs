#![allow(dead_code)]

pub mod config;
pub mod mock_iam;
pub mod mock_inference;
pub mod server;
