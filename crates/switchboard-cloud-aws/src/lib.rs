//! AWS provider for Switchboard
//!
//! This crate implements the CloudProvider trait for AWS, resolving the
//! deployment role ARN that the terraform configuration consumes.
//!
//! # Requirements
//!
//! - The `aws` CLI must be installed and configured
//! - The `switchboard-role` IAM role must exist in the target account
//!
//! # Example
//!
//! ```ignore
//! use switchboard_cloud::CloudProvider;
//! use switchboard_cloud_aws::AwsProvider;
//! use switchboard_core::{OsLauncher, Progress};
//!
//! let (progress, rx) = Progress::channel();
//! let provider = AwsProvider::new();
//!
//! let credentials = provider.resolve_credentials(&OsLauncher, &progress).await?;
//! // credentials == [("TF_VAR_switchboard_role_arn", "arn:aws:iam::...")]
//! ```

pub mod error;
pub mod iam;
pub mod provider;

pub use error::{AwsError, Result};
pub use iam::{AwsCli, ROLE_NAME};
pub use provider::{AwsProvider, ROLE_ARN_VAR};
