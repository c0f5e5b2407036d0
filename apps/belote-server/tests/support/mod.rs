#![allow(dead_code)]

pub mod bots;
