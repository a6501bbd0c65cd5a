use std::fmt;
use std::sync::Arc;

/// A shareable borrow projection from an owner `O` to one of its ancestors `A`.
///
/// Ancestors are either embedded base structs or interface trait objects; the
/// projection is how inherited properties stay readable from the owner.
pub struct Projection<O: ?Sized + 'static, A: ?Sized + 'static> {
    project: Arc<dyn for<'a> Fn(&'a O) -> &'a A + Send + Sync>,
}

impl<O: ?Sized + 'static> Projection<O, O> {
    pub fn identity() -> Self {
        Self::new(|owner: &O| owner)
    }
}

impl<O: ?Sized + 'static, A: ?Sized + 'static> Projection<O, A> {
    pub fn new<F>(project: F) -> Self
    where
        F: for<'a> Fn(&'a O) -> &'a A + Send + Sync + 'static,
    {
        Self {
            project: Arc::new(project),
        }
    }

    pub fn get<'a>(&self, owner: &'a O) -> &'a A {
        (self.project)(owner)
    }

    /// Extends the projection one level further up the hierarchy.
    pub fn then<B: ?Sized + 'static>(&self, step: fn(&A) -> &B) -> Projection<O, B> {
        let inner = Arc::clone(&self.project);
        Projection::new(move |owner: &O| step(inner(owner)))
    }
}

impl<O: ?Sized + 'static, A: ?Sized + 'static> Clone for Projection<O, A> {
    fn clone(&self) -> Self {
        Self {
            project: Arc::clone(&self.project),
        }
    }
}

impl<O: ?Sized + 'static, A: ?Sized + 'static> fmt::Debug for Projection<O, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Projection<{}, {}>",
            std::any::type_name::<O>(),
            std::any::type_name::<A>()
        )
    }
}
