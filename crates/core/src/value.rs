//! Write a field as a plain value or as a function of the [`Activation`].
use crate::Activation;

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

/// A function producing a value from the [`Activation`] of a menu.
pub type Factory<D, T> = Rc<dyn Fn(&Activation<D>) -> T>;

/// A configurable field of a menu.
///
/// Any field can be given either as a [`Value::Literal`] or as a closure
/// that is evaluated every time a menu opens:
///
/// ```
/// use icy_popup_core::Value;
///
/// let fixed: Value<u32, String> = "Delete".into();
/// let computed: Value<u32, String> =
///     Value::computed(|activation| format!("Delete #{}", activation.data()));
/// # let _ = (fixed, computed);
/// ```
pub enum Value<D, T> {
    /// A fixed value.
    Literal(T),

    /// A value computed when the menu is resolved.
    Computed(Factory<D, T>),
}

impl<D, T> Value<D, T> {
    /// Creates a [`Value`] computed by the given closure.
    pub fn computed(f: impl Fn(&Activation<D>) -> T + 'static) -> Self {
        Self::Computed(Rc::new(f))
    }

    /// Resolves the [`Value`] for the given [`Activation`].
    pub fn resolve(&self, activation: &Activation<D>) -> T
    where
        T: Clone,
    {
        match self {
            Value::Literal(value) => value.clone(),
            Value::Computed(factory) => factory(activation),
        }
    }

    /// Resolves the [`Value`], borrowing it when it is a literal.
    pub fn resolve_ref(&self, activation: &Activation<D>) -> Cow<'_, T>
    where
        T: Clone,
    {
        match self {
            Value::Literal(value) => Cow::Borrowed(value),
            Value::Computed(factory) => Cow::Owned(factory(activation)),
        }
    }

    /// Turns the [`Value`] into a [`Factory`].
    ///
    /// A computed value is returned as is; a literal becomes a factory that
    /// ignores its argument.
    pub fn into_factory(self) -> Factory<D, T>
    where
        D: 'static,
        T: Clone + 'static,
    {
        match self {
            Value::Literal(value) => Rc::new(move |_: &Activation<D>| value.clone()),
            Value::Computed(factory) => factory,
        }
    }
}

/// Turns an optional [`Value`] into a [`Factory`], producing `fallback`
/// when no value was given.
pub fn to_factory<D, T>(value: Option<Value<D, T>>, fallback: T) -> Factory<D, T>
where
    D: 'static,
    T: Clone + 'static,
{
    value.unwrap_or(Value::Literal(fallback)).into_factory()
}

impl<D, T: Clone> Clone for Value<D, T> {
    fn clone(&self) -> Self {
        match self {
            Value::Literal(value) => Value::Literal(value.clone()),
            Value::Computed(factory) => Value::Computed(Rc::clone(factory)),
        }
    }
}

impl<D, T: fmt::Debug> fmt::Debug for Value<D, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Value::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl<D, T: Default> Default for Value<D, T> {
    fn default() -> Self {
        Value::Literal(T::default())
    }
}

impl<D, T> From<T> for Value<D, T> {
    fn from(value: T) -> Self {
        Value::Literal(value)
    }
}

impl<D> From<&str> for Value<D, String> {
    fn from(value: &str) -> Self {
        Value::Literal(value.to_owned())
    }
}
