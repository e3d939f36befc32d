//! Hercules Finance AI flow library
//!
//! Six generative-AI flows for a personal-finance assistant aimed at
//! gig-economy workers in India, plus a message-catalog translation
//! layer and the mock dashboard data the screens render. Each flow
//! validates its typed input, renders a fixed prompt template, and asks
//! the generation backend for output conforming to the flow's declared
//! schema. The presentation layer and authentication gate live outside
//! this crate.

// Environment-based configuration
pub mod config;

// Flow modules (one per feature)
pub mod flows;

// Message catalog and translate-flow fallback
pub mod i18n;

// Dashboard domain models and mock data
pub mod models;
