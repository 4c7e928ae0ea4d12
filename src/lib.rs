//! Operating-room and nurse scheduling model.
//!
//! Scores full surgery schedules (room, start/end times, nurse lists) for
//! an external search driver, and samples random starting schedules.
//! The score is the makespan plus weighted penalties for every violated
//! constraint, so any violation outranks any makespan improvement.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Instance`, `Surgery`, `NurseShift`,
//!   `TimeWindow`, `SurgerySchedule`, `Evaluation`, `Violation`
//! - **`parser`**: Instance file loader (hours converted to minutes)
//! - **`validation`**: Advisory instance integrity checks
//! - **`config`**: Penalty weight and empty-schedule sentinel
//! - **`evaluation`**: Penalty-based schedule scoring
//! - **`generator`**: Random structurally valid schedules
//! - **`problem`**: `Problem` trait and `SurgeryProblem` for search drivers
//!
//! # Architecture
//!
//! This crate defines the surgery scheduling domain only. Search
//! algorithms (local search, SA, GA) live in the driver that consumes
//! [`problem::Problem`].
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Cardoen, Demeulemeester, Beliën (2010), "Operating room planning and
//!   scheduling: A literature review"

pub mod config;
pub mod error;
pub mod evaluation;
pub mod generator;
pub mod models;
pub mod parser;
pub mod problem;
pub mod validation;
