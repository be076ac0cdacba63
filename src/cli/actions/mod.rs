//! Quick actions that run instead of the interactive editor

pub mod print;
