//! Service layer modules for external integrations.
//!
//! Contains the client that forwards captured leads to the CRM.

pub mod lead_capture;

pub use lead_capture::LeadCaptureClient;
