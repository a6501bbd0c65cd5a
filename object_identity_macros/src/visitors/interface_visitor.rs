use syn::{
    Ident, ItemTrait, Path, TraitItem, TypeParamBound,
    visit::Visit,
    visit_mut::{self, VisitMut},
};

use crate::{
    errors::{InterfaceError, MacroError, combine},
    item_info::reflect_interface::InterfaceMethodInfo,
    util::is_identity_key,
};

pub struct InterfaceVisitor<'ast> {
    pub name: Option<&'ast Ident>,
    pub methods: Vec<InterfaceMethodInfo<'ast>>,
    pub extends: Vec<Path>,
    pub errors: Vec<syn::Error>,
}

impl InterfaceVisitor<'_> {
    pub fn new(extends: Vec<Path>) -> Self {
        Self {
            name: None,
            methods: Vec::new(),
            extends,
            errors: Vec::new(),
        }
    }
}

impl<'a> Visit<'a> for InterfaceVisitor<'a> {
    fn visit_item_trait(&mut self, i: &'a ItemTrait) {
        self.name = Some(&i.ident);
        if !i.generics.params.is_empty() {
            self.errors
                .push(MacroError::from(InterfaceError::GenericTrait).spanned(&i.generics));
        }

        for parent in &self.extends {
            if !is_supertrait(i, parent) {
                let name = parent
                    .segments
                    .last()
                    .map(|s| s.ident.to_string())
                    .unwrap_or_default();
                self.errors
                    .push(MacroError::from(InterfaceError::NotASupertrait(name)).spanned(parent));
            }
        }

        for item in &i.items {
            if let TraitItem::Fn(method) = item {
                match InterfaceMethodInfo::from_method(method) {
                    Ok(Some(info)) => {
                        if info.identity_key && self.methods.iter().any(|m| m.identity_key) {
                            self.errors.push(
                                MacroError::from(InterfaceError::MultipleIdentityKeys)
                                    .at(info.ident.span()),
                            );
                        }
                        self.methods.push(info);
                    }
                    Ok(None) => {}
                    Err(e) => self.errors.push(e),
                }
            }
        }
    }
}

impl InterfaceVisitor<'_> {
    pub fn validate(&mut self) -> syn::Result<()> {
        match combine(std::mem::take(&mut self.errors)) {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

fn is_supertrait(item: &ItemTrait, parent: &Path) -> bool {
    let Some(wanted) = parent.segments.last() else {
        return false;
    };
    item.supertraits.iter().any(|bound| match bound {
        TypeParamBound::Trait(t) => t
            .path
            .segments
            .last()
            .is_some_and(|s| s.ident == wanted.ident),
        _ => false,
    })
}

/// Removes `#[identity_key]` markers so the emitted trait compiles.
pub struct MarkerStripper;

impl VisitMut for MarkerStripper {
    fn visit_trait_item_fn_mut(&mut self, i: &mut syn::TraitItemFn) {
        i.attrs.retain(|a| !is_identity_key(a));
        visit_mut::visit_trait_item_fn_mut(self, i);
    }
}
