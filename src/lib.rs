#[macro_use]
extern crate diesel;

pub mod assembler;
pub mod config;
pub mod controllers;
pub mod db;
pub mod error;
