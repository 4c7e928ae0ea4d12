//! Surgery scheduling domain models.
//!
//! Provides the static instance data (rooms, nurses, surgeries) and the
//! candidate-solution and scoring types exchanged with a search driver.
//!
//! # Domain Mappings
//!
//! | u-surgery | Generic scheduling |
//! |-----------|--------------------|
//! | Surgery | Activity with release time and deadline |
//! | Operating room | Primary (disjunctive) resource |
//! | Nurse | Human resource with a shift calendar |
//! | SurgerySchedule | Schedule |

mod instance;
mod nurse;
mod schedule;
mod surgery;
mod window;

pub use instance::Instance;
pub use nurse::NurseShift;
pub use schedule::{Evaluation, SurgerySchedule, Violation, ViolationKind};
pub use surgery::Surgery;
pub use window::{excess, TimeWindow};
