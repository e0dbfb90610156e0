//! Builder discipline
//!
//! A builder is the only way a node comes into existence. It stages field
//! values with no checks, and `build()` runs the type's validation rules over
//! the staged state before freezing a new node. A failed `build()` leaves the
//! builder untouched, so it can be corrected and built again.

use crate::error::Result;
use crate::node::Node;

/// Staging object for one node type
pub trait Builder {
    type Output: Node;

    /// Validate the staged fields and allocate a new node
    fn build(&self) -> Result<Self::Output>;
}

/// Copy-and-override entrypoint
pub trait ToBuilder: Node + Sized {
    type Builder: Builder<Output = Self>;

    /// A builder whose staged state mirrors this node's field values
    fn to_builder(&self) -> Self::Builder;
}

/// Log and pass through the outcome of a build
pub(crate) fn finish<T>(type_name: &'static str, result: Result<T>) -> Result<T> {
    if let Err(error) = &result {
        tracing::debug!(type_name, %error, "build rejected");
    }
    result
}

/// Wire a node type to its builder: [`Builder`], [`ToBuilder`] and
/// `From<&Node>` all delegate to the inherent `build()` / `to_builder()`.
macro_rules! impl_builder {
    ($node:ty, $builder:ty) => {
        impl $crate::builder::Builder for $builder {
            type Output = $node;

            fn build(&self) -> $crate::error::Result<$node> {
                <$builder>::build(self)
            }
        }

        impl $crate::builder::ToBuilder for $node {
            type Builder = $builder;

            fn to_builder(&self) -> $builder {
                <$node>::to_builder(self)
            }
        }

        impl From<&$node> for $builder {
            fn from(node: &$node) -> Self {
                node.to_builder()
            }
        }
    };
}

pub(crate) use impl_builder;
