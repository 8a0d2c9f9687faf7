//! Workspace root for feeder patrol tooling.
//!
//! Holds the pre-commit hook configuration; the planner lives in
//! `feederpatrol-lib` and the command-line front end in `feederpatrol-cli`.
