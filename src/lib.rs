//! Payroll Engine
//!
//! This crate validates and stores per-employee timesheets, converts worked
//! spans into paid minutes, classifies hours into normal time and overtime,
//! applies a progressive tax schedule, and aggregates payslips into payruns.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
