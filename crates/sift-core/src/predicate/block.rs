use crate::value::Value;
use std::{any::Any, collections::BTreeMap, fmt, sync::Arc};

/// Substitution bindings handed to a block callback at evaluation time.
pub type Bindings = BTreeMap<String, Value>;

type BlockFn = dyn Fn(&dyn Any, &Bindings) -> bool + Send + Sync;

///
/// Block
///
/// Opaque deferred predicate callback. Captured by value at construction,
/// invoked later (once per evaluation request) by the evaluation engine on
/// whatever thread and schedule it chooses; the core is a pass-through.
///
/// The typed constructor downcasts the evaluated object without a recovery
/// path: handing the engine an object of the wrong shape panics, per host
/// convention for an unchecked cast.
///

#[derive(Clone)]
pub struct Block {
    callback: Arc<BlockFn>,
}

impl Block {
    pub fn new<T, F>(callback: F) -> Self
    where
        T: Any,
        F: Fn(&T, &Bindings) -> bool + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(move |object: &dyn Any, bindings: &Bindings| {
                let object = object.downcast_ref::<T>().unwrap_or_else(|| {
                    panic!(
                        "block predicate evaluated against an object that is not a {}",
                        std::any::type_name::<T>()
                    )
                });
                callback(object, bindings)
            }),
        }
    }

    /// Invoke the captured callback. Called by the evaluation engine, never
    /// by the core.
    #[must_use]
    pub fn invoke(&self, object: &dyn Any, bindings: &Bindings) -> bool {
        (self.callback)(object, bindings)
    }
}

impl fmt::Debug for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Block(..)")
    }
}

// Capture identity: two blocks compare equal only when they share the same
// captured callback.
impl PartialEq for Block {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.callback, &other.callback)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invokes_the_typed_callback() {
        let block = Block::new(|object: &i64, _bindings: &Bindings| *object > 10);

        assert!(block.invoke(&42_i64, &Bindings::new()));
        assert!(!block.invoke(&5_i64, &Bindings::new()));
    }

    #[test]
    fn reads_bindings() {
        let block = Block::new(|object: &String, bindings: &Bindings| {
            bindings.get("needle") == Some(&Value::Text(object.clone()))
        });

        let mut bindings = Bindings::new();
        bindings.insert("needle".to_string(), Value::Text("x".to_string()));
        assert!(block.invoke(&"x".to_string(), &bindings));
    }

    #[test]
    #[should_panic(expected = "block predicate evaluated against an object that is not a")]
    fn panics_on_object_shape_mismatch() {
        let block = Block::new(|object: &i64, _bindings: &Bindings| *object > 0);
        block.invoke(&"not an i64", &Bindings::new());
    }

    #[test]
    fn equality_is_capture_identity() {
        let a = Block::new(|_: &i64, _: &Bindings| true);
        let b = Block::new(|_: &i64, _: &Bindings| true);

        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
