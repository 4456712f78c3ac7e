#![allow(dead_code)]

pub mod redis_container;
pub mod stub_processor;
pub mod tcp_processor;
