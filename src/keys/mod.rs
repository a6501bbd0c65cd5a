//! Identity key accessors: the descriptor they share, the typed accessor
//! bound to a property, and the degenerate accessor for types without a key.

use std::any::Any;
use std::sync::Arc;

use crate::traits::IdentityKey;

pub mod descriptor;
pub mod missing;
pub mod typed;

pub use descriptor::KeyDescriptor;
pub use missing::MissingIdentityKey;
pub use typed::TypedIdentityKey;

/// One typed accessor viewed both as `dyn IdentityKey<T>` and as an erased
/// handle that can be downcast back to `TypedIdentityKey<T, IK>`.
pub(crate) struct BoundKey<T: ?Sized + 'static> {
    untyped: Arc<dyn IdentityKey<T>>,
    typed: Arc<dyn Any + Send + Sync>,
}

impl<T: ?Sized + 'static> BoundKey<T> {
    pub(crate) fn new<IK: 'static>(accessor: Arc<TypedIdentityKey<T, IK>>) -> Self {
        Self {
            untyped: accessor.clone(),
            typed: accessor,
        }
    }

    pub(crate) fn untyped(&self) -> Arc<dyn IdentityKey<T>> {
        Arc::clone(&self.untyped)
    }

    pub(crate) fn typed<IK: 'static>(&self) -> Option<Arc<TypedIdentityKey<T, IK>>> {
        Arc::clone(&self.typed).downcast::<TypedIdentityKey<T, IK>>().ok()
    }
}

impl<T: ?Sized + 'static> Clone for BoundKey<T> {
    fn clone(&self) -> Self {
        Self {
            untyped: Arc::clone(&self.untyped),
            typed: Arc::clone(&self.typed),
        }
    }
}
