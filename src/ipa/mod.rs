//! Main module for ipa library functionality

pub mod building;
pub mod config;
pub mod error;
pub mod expansion;
pub mod mapping;
pub mod normalization;
pub mod parser;
pub mod parsing;
pub mod symbol;
pub mod transforms;
pub mod units;
