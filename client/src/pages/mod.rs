//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page mounts its own navbar with the matching active menu entry and
//! leaves the page body to the expense-tracker screens.

pub mod menu;
