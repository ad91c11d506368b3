//! Homework Bot Core
//!
//! Core types and pure logic shared by the homework review bot.
//!
//! This crate contains:
//! - Domain types: review statuses and submissions
//! - Extraction: validating API responses and turning them into messages
//! - DTOs: wire payloads for the review API and the Telegram Bot API

pub mod domain;
pub mod dto;
pub mod error;
pub mod extract;

pub use error::{ResponseError, Result};
