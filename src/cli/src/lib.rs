//! ASG CLI - inspect application security groups on a Cloud Controller.

pub mod commands;
pub mod output;
