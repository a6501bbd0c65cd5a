// Common test models and helpers

#![allow(dead_code)]

use object_identity::{Reflect, identity_interface};

/// Route `log` output through the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Key declared directly on the struct.
#[derive(Reflect, Clone, Debug, PartialEq)]
pub struct My {
    pub name: String,
    #[identity_key]
    pub tag: String,
}

/// No key anywhere in the hierarchy.
#[derive(Reflect, Clone, Debug, Default)]
pub struct NoKey {}

#[identity_interface]
pub trait IMy: Send + Sync {
    fn name(&self) -> String;
    #[identity_key]
    fn tag(&self) -> String;
    fn rename(&mut self, name: String);
}

#[identity_interface(extends(IMy))]
pub trait IDerived: IMy {
    fn description(&self) -> String;
}

#[derive(Reflect, Clone, Debug, Default)]
#[reflect(implements(IMy))]
pub struct MyRecord {
    pub name: String,
    pub tag: String,
}

impl IMy for MyRecord {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn tag(&self) -> String {
        self.tag.clone()
    }

    fn rename(&mut self, name: String) {
        self.name = name;
    }
}

#[derive(Reflect, Clone, Debug, Default)]
#[reflect(implements(IDerived))]
pub struct DerivedRecord {
    pub name: String,
    pub tag: String,
    pub description: String,
}

impl IMy for DerivedRecord {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn tag(&self) -> String {
        self.tag.clone()
    }

    fn rename(&mut self, name: String) {
        self.name = name;
    }
}

impl IDerived for DerivedRecord {
    fn description(&self) -> String {
        self.description.clone()
    }
}

/// Key inherited from an embedded base struct.
#[derive(Reflect, Clone, Debug)]
pub struct Person {
    #[identity_key]
    pub id: u64,
    pub display_name: String,
}

#[derive(Reflect, Clone, Debug)]
pub struct Employee {
    pub department: String,
    #[reflect(base)]
    pub person: Person,
    #[reflect(skip)]
    pub badge: std::sync::Arc<std::sync::Mutex<u32>>,
}

/// Marks its own `id` and implements an interface marking `tag`.
#[derive(Reflect, Clone, Debug, Default)]
#[reflect(implements(IMy))]
pub struct Conflicted {
    #[identity_key]
    pub id: u32,
    pub name: String,
    pub tag: String,
}

impl IMy for Conflicted {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn tag(&self) -> String {
        self.tag.clone()
    }

    fn rename(&mut self, name: String) {
        self.name = name;
    }
}

/// Re-declares the interface's key under the same name.
#[derive(Reflect, Clone, Debug, Default)]
#[reflect(implements(IMy))]
pub struct Redeclared {
    pub name: String,
    #[identity_key]
    pub tag: String,
}

impl IMy for Redeclared {
    fn name(&self) -> String {
        format!("redeclared {}", self.name)
    }

    fn tag(&self) -> String {
        format!("interface {}", self.tag)
    }

    fn rename(&mut self, name: String) {
        self.name = name;
    }
}
