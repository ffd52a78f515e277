//! Switchboard Cloud Orchestration
//!
//! This crate sequences the external provisioning tool (terraform) through
//! the deploy and teardown lifecycles, and defines the provider abstraction
//! used to resolve cloud credentials before provisioning starts.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                Switchboard CLI                   │
//! │             (swb deploy/teardown)                │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │              switchboard-cloud                   │
//! │  ┌──────────────────────────────────────────┐   │
//! │  │         Provider Abstraction              │   │
//! │  │  trait CloudProvider { ... }              │   │
//! │  └──────────────────────────────────────────┘   │
//! │  ┌──────────────┐  ┌──────────────────────┐    │
//! │  │  Terraform   │  │  Deploy / Teardown   │    │
//! │  │   wrapper    │  │     sequencing       │    │
//! │  └──────────────┘  └──────────────────────┘    │
//! └───────┬─────────────────────────────────────────┘
//!         │
//! ┌───────▼───────┐
//! │     aws       │
//! │   provider    │
//! └───────────────┘
//! ```

pub mod deploy;
pub mod error;
pub mod provider;
pub mod terraform;

pub use deploy::{deploy_workflow, teardown_workflow, verify_packaged};
pub use error::{CloudError, Result};
pub use provider::{CloudProvider, NoCredentialProvider};
pub use terraform::{TERRAFORM_DIR, Terraform};
