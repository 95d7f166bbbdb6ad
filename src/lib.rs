//! # Healmate
//!
//! A rural-healthcare Telegram bot. It runs a short survey (name, age,
//! gender, symptoms), stores each user's answers as a JSON file, replies with a
//! rule-based health tip and can ask a hosted language model for more
//! detailed advice. A companion dashboard counts common symptom keywords
//! across all stored records.

pub mod advice;
pub mod advisor;
pub mod advisor_errors;
pub mod bot;
pub mod config;
pub mod conversation;
pub mod dashboard;
pub mod dialogue;
pub mod localization;
pub mod store;
