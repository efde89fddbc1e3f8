//! Dashboard CLI over normalized ECMO case-report exports.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod pipeline;
