#![allow(dead_code)]

pub mod assertions;
pub mod http;
pub mod statsd;
