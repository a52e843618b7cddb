//! Lexical environments.
//!
//! An [`Environment`] is a shared handle to a [`Scope`]: a frame of
//! bindings plus a link to the enclosing frame. A call creates a fresh
//! scope whose parent is the *defining* environment of the function, so
//! closures see the bindings that were live where they were written.
//!
//! Assignment always writes to the innermost frame; lookup walks outward.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::{FunctionValue, Value};

/// A single-threaded shared cell.
///
/// All scope allocations go through [`LocalScope::new`].
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Whether both handles point at the same scope.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Scopes can be reachable from the values they hold (a named function
/// captures the scope it is bound in), so only the local names are shown.
impl fmt::Debug for LocalScope<Scope> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(scope) => {
                let mut names: Vec<&str> = scope.bindings.keys().map(String::as_str).collect();
                names.sort_unstable();
                f.debug_struct("Scope")
                    .field("names", &names)
                    .field("has_parent", &scope.parent.is_some())
                    .finish()
            }
            Err(_) => f.write_str("Scope(<borrowed>)"),
        }
    }
}

pub type Environment = LocalScope<Scope>;

/// One frame of bindings.
#[derive(Clone, Default)]
pub struct Scope {
    bindings: FxHashMap<String, Value>,
    parent: Option<Environment>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parent(parent: Environment) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Bind `name` in this frame, replacing any existing binding here.
    #[inline]
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Look `name` up in this frame, then in each enclosing one.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        let mut next = self.parent.clone();
        while let Some(env) = next {
            let scope = env.borrow();
            if let Some(value) = scope.bindings.get(name) {
                return Some(value.clone());
            }
            next = scope.parent.clone();
        }
        None
    }
}

impl Environment {
    /// Drop this frame's bindings when nothing but its own functions can
    /// still reach it.
    ///
    /// A named function is bound in the frame it captures, so the two keep
    /// each other alive. Call this on a finished call frame while holding
    /// the only outside handle. A function that escaped (returned, stored
    /// elsewhere, or captured by another live frame) keeps the frame intact.
    /// Functions reachable only through a list in the frame are not
    /// traced, and such a frame is kept.
    pub(crate) fn release_if_unreachable(&self) {
        let Ok(mut scope) = self.0.try_borrow_mut() else {
            return;
        };

        let mut captured: Vec<(&Rc<FunctionValue>, usize)> = Vec::new();
        for value in scope.bindings.values() {
            let Value::Function(func) = value else {
                continue;
            };
            if !func.env.ptr_eq(self) {
                continue;
            }
            match captured.iter_mut().find(|(f, _)| Rc::ptr_eq(*f, func)) {
                Some((_, bound)) => *bound += 1,
                None => captured.push((func, 1)),
            }
        }
        if captured
            .iter()
            .any(|(func, bound)| Rc::strong_count(func) != *bound)
        {
            return;
        }
        if Rc::strong_count(&self.0) != 1 + captured.len() {
            return;
        }

        let bindings = std::mem::take(&mut scope.bindings);
        drop(scope);
        drop(bindings);
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
