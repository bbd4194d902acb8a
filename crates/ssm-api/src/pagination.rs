//! Inventory pagination
//!
//! [`InstanceInformationPages`] walks an inventory listing page by page,
//! following continuation tokens until a page arrives without one. The
//! caller's request is copied, so the same request can be walked again.

use std::iter::FusedIterator;

use crate::SsmApi;
use crate::error::SsmError;
use crate::inventory::{DescribeInstanceInformationInput, DescribeInstanceInformationOutput};

/// Lazy iterator over inventory pages.
///
/// Ends after the first page without a continuation token, or right after
/// yielding the first error.
#[derive(Debug)]
pub struct InstanceInformationPages<'a, C: ?Sized> {
    client: &'a C,
    input: DescribeInstanceInformationInput,
    finished: bool,
}

impl<'a, C> InstanceInformationPages<'a, C>
where
    C: SsmApi + ?Sized,
{
    /// Start a walk at the page `input` points to
    pub fn new(client: &'a C, input: &DescribeInstanceInformationInput) -> Self {
        Self {
            client,
            input: input.clone(),
            finished: false,
        }
    }
}

impl<C> Iterator for InstanceInformationPages<'_, C>
where
    C: SsmApi + ?Sized,
{
    type Item = Result<DescribeInstanceInformationOutput, SsmError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.client.describe_instance_information(&self.input) {
            Ok(page) => {
                if page.has_more_pages() {
                    self.input.next_token = page.next_token.clone();
                } else {
                    self.finished = true;
                }
                Some(Ok(page))
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl<C> FusedIterator for InstanceInformationPages<'_, C> where C: SsmApi + ?Sized {}

/// Feed every page to `visit` as `(page, is_last_page)`.
///
/// Stops early when `visit` returns `false`. The first fetch error is
/// returned as-is.
pub fn for_each_instance_information_page<C>(
    client: &C,
    input: &DescribeInstanceInformationInput,
    visit: &mut dyn FnMut(&DescribeInstanceInformationOutput, bool) -> bool,
) -> Result<(), SsmError>
where
    C: SsmApi + ?Sized,
{
    for page in InstanceInformationPages::new(client, input) {
        let page = page?;
        let last_page = !page.has_more_pages();
        if !visit(&page, last_page) || last_page {
            break;
        }
    }
    Ok(())
}
