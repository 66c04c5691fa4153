//!
//! Serde support. Secrets serialize to their value, except inside [`masked_serialize`].
//!

use std::cell::Cell;

use erased_serde::Serialize as ErasedSerialize;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::{PeekInterface, Secret, Strategy, StrongSecret, ZeroizableSecret};

/// Opt-in marker for types whose secrets may be serialized.
///
/// `Secret<T>` and `StrongSecret<T>` only implement [`Serialize`] when `T` carries this marker.
pub trait SerializableSecret: Serialize {}

impl SerializableSecret for String {}
impl SerializableSecret for u8 {}
impl SerializableSecret for u16 {}

thread_local! {
    static MASKING: Cell<bool> = const { Cell::new(false) };
}

/// Serialization with masking switched on for the current thread. Dropping it restores the
/// previous mode, also when the serializer panics.
struct MaskedScope(bool);

impl MaskedScope {
    fn enter() -> Self {
        Self(MASKING.with(|masking| masking.replace(true)))
    }
}

impl Drop for MaskedScope {
    fn drop(&mut self) {
        MASKING.with(|masking| masking.set(self.0));
    }
}

fn serialize_secret<W, T, S>(secret: &W, serializer: S) -> Result<S::Ok, S::Error>
where
    W: PeekInterface<T> + std::fmt::Debug,
    T: Serialize,
    S: Serializer,
{
    if MASKING.with(Cell::get) {
        serializer.collect_str(&format_args!("{secret:?}"))
    } else {
        secret.peek().serialize(serializer)
    }
}

impl<T, M> Serialize for Secret<T, M>
where
    T: SerializableSecret,
    M: Strategy<T>,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_secret(self, serializer)
    }
}

impl<T, M> Serialize for StrongSecret<T, M>
where
    T: SerializableSecret + ZeroizableSecret,
    M: Strategy<T>,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_secret(self, serializer)
    }
}

impl<'de, T, M> Deserialize<'de> for Secret<T, M>
where
    T: DeserializeOwned,
    M: Strategy<T>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::new)
    }
}

impl<'de, T, M> Deserialize<'de> for StrongSecret<T, M>
where
    T: DeserializeOwned + ZeroizableSecret,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::new)
    }
}

/// `value` as JSON, with every secret replaced by its `Debug` output. This is the form request
/// bodies take in logs.
pub fn masked_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Value, serde_json::Error> {
    let _scope = MaskedScope::enter();
    serde_json::to_value(value)
}

/// Object safe counterpart of [`Serialize`] for request bodies, which are boxed before they
/// are encoded and logged.
pub trait ErasedMaskSerialize: ErasedSerialize {
    /// See [`masked_serialize`].
    fn masked_serialize(&self) -> Result<Value, serde_json::Error>;
}

impl<T: Serialize> ErasedMaskSerialize for T {
    fn masked_serialize(&self) -> Result<Value, serde_json::Error> {
        masked_serialize(self)
    }
}

impl Serialize for dyn ErasedMaskSerialize + Send + '_ {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        erased_serde::serialize(self, serializer)
    }
}
