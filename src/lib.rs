// Known tasks and their target names
pub mod catalog;

// Configuration
pub mod config;

// Shared task directory and the !task chat command
pub mod directory;

// Game client events
pub mod event;

// Target name rules and NPC classification
pub mod matcher;

// Per-profile persistence
pub mod profile;

// Game enum lookups
pub mod resolver;

// Task state machine
pub mod state;

// Chat text helpers
pub mod text;
