use crate::metadata::{Projection, PropertyInfo};

/// Publishes a type's readable properties and its ancestors' properties.
///
/// Implemented by `#[derive(Reflect)]` for structs and by
/// `#[identity_interface]` for `dyn Trait` interface types. Implementations
/// list their own properties first, followed by each ancestor's properties
/// in declaration order.
pub trait Reflect: 'static {
    /// Lists the properties of `Self` made readable from an owner `O`
    /// through `project`.
    fn properties_via<O: ?Sized + 'static>(project: Projection<O, Self>) -> Vec<PropertyInfo<O>>;

    fn properties() -> Vec<PropertyInfo<Self>> {
        Self::properties_via(Projection::identity())
    }

    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}
