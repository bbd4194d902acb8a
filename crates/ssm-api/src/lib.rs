//! SSM API - the client surface for a remote instance-management service
//!
//! [`SsmApi`] is the set of operations higher-level orchestration code needs:
//! interactive sessions, command submission and status, and the managed
//! instance inventory. Production clients and test doubles implement the same
//! trait, and callers pick one at their composition root:
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use ssm_api::SsmApi;
//!
//! struct Fleet {
//!     ssm: Arc<dyn SsmApi>,
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(rustdoc::bare_urls)]

use std::sync::Arc;

pub mod commands;
pub mod error;
pub mod inventory;
pub mod pagination;
pub mod sessions;

pub use error::{ErrorCode, PartialOutputError, SsmError};
pub use pagination::InstanceInformationPages;

use self::commands::{
    GetCommandInvocationInput, GetCommandInvocationOutput, SendCommandInput, SendCommandOutput,
};
use self::inventory::{DescribeInstanceInformationInput, DescribeInstanceInformationOutput};
use self::sessions::{
    StartSessionInput, StartSessionOutput, TerminateSessionInput, TerminateSessionOutput,
};

/// Operations of the instance-management service.
///
/// Every method is synchronous and takes its request by reference.
pub trait SsmApi: Send + Sync {
    /// Open an interactive session on `input.target`.
    fn start_session(&self, input: &StartSessionInput) -> Result<StartSessionOutput, SsmError>;

    /// Close a session.
    ///
    /// A failed termination may still carry an output, see [`PartialOutputError`].
    fn terminate_session(
        &self,
        input: &TerminateSessionInput,
    ) -> Result<TerminateSessionOutput, PartialOutputError<TerminateSessionOutput>>;

    /// Status of one command on one instance.
    fn get_command_invocation(
        &self,
        input: &GetCommandInvocationInput,
    ) -> Result<GetCommandInvocationOutput, SsmError>;

    /// Submit a command document for execution.
    fn send_command(&self, input: &SendCommandInput) -> Result<SendCommandOutput, SsmError>;

    /// Fetch one page of the managed-instance inventory.
    fn describe_instance_information(
        &self,
        input: &DescribeInstanceInformationInput,
    ) -> Result<DescribeInstanceInformationOutput, SsmError>;

    /// Walk the whole inventory, handing each page to `visit` together with
    /// an "is last page" flag. Returning `false` from `visit` stops the walk.
    ///
    /// `input` is not modified; each call starts from the token it carries.
    fn describe_instance_information_pages(
        &self,
        input: &DescribeInstanceInformationInput,
        visit: &mut dyn FnMut(&DescribeInstanceInformationOutput, bool) -> bool,
    ) -> Result<(), SsmError> {
        pagination::for_each_instance_information_page(self, input, visit)
    }

    /// Lazy iterator over the inventory pages, starting from `input`.
    fn instance_information_pages(
        &self,
        input: &DescribeInstanceInformationInput,
    ) -> InstanceInformationPages<'_, Self>
    where
        Self: Sized,
    {
        InstanceInformationPages::new(self, input)
    }
}

macro_rules! forward_ssm_api {
    () => {
        fn start_session(&self, input: &StartSessionInput) -> Result<StartSessionOutput, SsmError> {
            (**self).start_session(input)
        }

        fn terminate_session(
            &self,
            input: &TerminateSessionInput,
        ) -> Result<TerminateSessionOutput, PartialOutputError<TerminateSessionOutput>> {
            (**self).terminate_session(input)
        }

        fn get_command_invocation(
            &self,
            input: &GetCommandInvocationInput,
        ) -> Result<GetCommandInvocationOutput, SsmError> {
            (**self).get_command_invocation(input)
        }

        fn send_command(&self, input: &SendCommandInput) -> Result<SendCommandOutput, SsmError> {
            (**self).send_command(input)
        }

        fn describe_instance_information(
            &self,
            input: &DescribeInstanceInformationInput,
        ) -> Result<DescribeInstanceInformationOutput, SsmError> {
            (**self).describe_instance_information(input)
        }

        fn describe_instance_information_pages(
            &self,
            input: &DescribeInstanceInformationInput,
            visit: &mut dyn FnMut(&DescribeInstanceInformationOutput, bool) -> bool,
        ) -> Result<(), SsmError> {
            (**self).describe_instance_information_pages(input, visit)
        }
    };
}

impl<T: SsmApi + ?Sized> SsmApi for Arc<T> {
    forward_ssm_api!();
}

impl<T: SsmApi + ?Sized> SsmApi for &T {
    forward_ssm_api!();
}

impl<T: SsmApi + ?Sized> SsmApi for Box<T> {
    forward_ssm_api!();
}
