//! The model aggregate.
//!
//! `Model` is the empty owning context a build phase populates: it never
//! triggers materialization itself. The build phase materializes each
//! deferred builder against the model and installs the returned container
//! here under a name. Rules running later in the same build phase can read
//! already-installed components, so installation order is the caller's
//! ordering policy.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

/// A name-keyed registry of built components, in installation order.
///
/// # Example
///
/// ```
/// use modelkit_kernel::{Model, Variable};
///
/// let mut model = Model::new();
/// model.install("x", Variable::new(Some(0.0), Some(1.0), None));
///
/// let x = model.component::<Variable>("x").unwrap();
/// assert_eq!(x.bounds(), (Some(0.0), Some(1.0)));
/// assert!(model.component::<Variable>("y").is_none());
/// ```
#[derive(Default)]
pub struct Model {
    order: Vec<String>,
    components: HashMap<String, Box<dyn Any + Send + Sync>>,
}

impl Model {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a component under a name.
    ///
    /// Re-installing an existing name replaces the component without
    /// changing its position in installation order.
    pub fn install<T: Any + Send + Sync>(&mut self, name: impl Into<String>, component: T) {
        let name = name.into();
        tracing::debug!(component = %name, "installing model component");
        if self
            .components
            .insert(name.clone(), Box::new(component))
            .is_none()
        {
            self.order.push(name);
        }
    }

    /// Returns a component by name, downcast to its concrete type.
    ///
    /// Returns `None` if the name is unknown or the type does not match.
    pub fn component<T: Any>(&self, name: &str) -> Option<&T> {
        self.components
            .get(name)
            .and_then(|component| component.downcast_ref::<T>())
    }

    /// Returns whether a component name is installed.
    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Iterates component names in installation order.
    pub fn component_names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Returns the number of installed components.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns whether no components are installed.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("components", &self.order)
            .finish()
    }
}
