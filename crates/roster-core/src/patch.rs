//! [`Patch`] — the tri-state field wrapper for partial updates.
//!
//! An update payload must distinguish "field absent from the body" (leave
//! the stored value alone) from "field present" (overwrite). A plain
//! `Option` collapses the two once the body is deserialized, so update
//! structs wrap every field in `Patch` instead. Nullable columns use
//! `Patch<Option<T>>`, where a present JSON `null` means "clear".

use serde::{Deserialize, Deserializer};

/// One field of a partial-update payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Patch<T> {
  /// The field was not in the payload; keep the stored value.
  #[default]
  Keep,
  /// The field was in the payload; overwrite with this value.
  Set(T),
}

impl<T> Patch<T> {
  pub fn is_set(&self) -> bool { matches!(self, Patch::Set(_)) }

  pub fn as_set(&self) -> Option<&T> {
    match self {
      Patch::Set(value) => Some(value),
      Patch::Keep => None,
    }
  }

  /// Overwrite `slot` if the field was supplied.
  pub fn apply_to(self, slot: &mut T) {
    if let Patch::Set(value) = self {
      *slot = value;
    }
  }
}

// A present field deserializes through `T`; an absent field never reaches
// serde at all, so update structs mark every field `#[serde(default)]`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    T::deserialize(deserializer).map(Patch::Set)
  }
}

#[cfg(test)]
mod tests {
  use serde::Deserialize;

  use super::Patch;

  #[derive(Debug, Default, Deserialize)]
  struct Probe {
    #[serde(default)]
    name:  Patch<String>,
    #[serde(default)]
    phone: Patch<Option<String>>,
  }

  #[test]
  fn absent_fields_are_keep() {
    let probe: Probe = serde_json::from_str("{}").unwrap();
    assert_eq!(probe.name, Patch::Keep);
    assert_eq!(probe.phone, Patch::Keep);
  }

  #[test]
  fn present_fields_are_set() {
    let probe: Probe =
      serde_json::from_str(r#"{"name":"Ann","phone":"555-0100"}"#).unwrap();
    assert_eq!(probe.name, Patch::Set("Ann".into()));
    assert_eq!(probe.phone, Patch::Set(Some("555-0100".into())));
  }

  #[test]
  fn present_null_clears_a_nullable_field() {
    let probe: Probe = serde_json::from_str(r#"{"phone":null}"#).unwrap();
    assert_eq!(probe.name, Patch::Keep);
    assert_eq!(probe.phone, Patch::Set(None));
  }

  #[test]
  fn null_for_a_required_field_is_rejected() {
    assert!(serde_json::from_str::<Probe>(r#"{"name":null}"#).is_err());
  }

  #[test]
  fn apply_to_overwrites_only_when_set() {
    let mut name = "Ann".to_string();
    Patch::Keep.apply_to(&mut name);
    assert_eq!(name, "Ann");
    Patch::Set("Lee".to_string()).apply_to(&mut name);
    assert_eq!(name, "Lee");
  }
}
