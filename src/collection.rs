// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Groups and locations: lights sharing a collection identity.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use crate::client::LifxClient;
use crate::command::Command;
use crate::error::Result;
use crate::light::{CollectionSpec, Light};
use crate::response::ApiResults;
use crate::target::LightTarget;
use crate::types::Selector;

mod sealed {
    pub trait Sealed {}
}

/// Which collection record of a light a [`LightCollection`] is keyed by.
pub trait CollectionKind: sealed::Sealed {
    /// Returns the collection record of `light`.
    fn spec(light: &Light) -> &CollectionSpec;

    /// Returns the selector addressing the collection with `id`.
    fn selector(id: &str) -> Selector;
}

/// Keys collections by group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {}

/// Keys collections by location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationKind {}

impl sealed::Sealed for GroupKind {}
impl sealed::Sealed for LocationKind {}

impl CollectionKind for GroupKind {
    fn spec(light: &Light) -> &CollectionSpec {
        light.group()
    }

    fn selector(id: &str) -> Selector {
        Selector::GroupId(id.to_string())
    }
}

impl CollectionKind for LocationKind {
    fn spec(light: &Light) -> &CollectionSpec {
        light.location()
    }

    fn selector(id: &str) -> Selector {
        Selector::LocationId(id.to_string())
    }
}

/// Lights sharing one group or location.
///
/// Commands sent to a collection address it by id, so lights added to it
/// after listing are included. A collection built from lights that carry no
/// client sends nothing and answers every command with empty results.
pub struct LightCollection<K> {
    spec: CollectionSpec,
    lights: Vec<Light>,
    client: Option<LifxClient>,
    kind: PhantomData<K>,
}

/// Lights sharing a group.
pub type Group = LightCollection<GroupKind>;

/// Lights sharing a location.
pub type Location = LightCollection<LocationKind>;

impl<K: CollectionKind> LightCollection<K> {
    /// Partitions lights by collection identity.
    ///
    /// Collections appear in the order their first member appears, and
    /// members keep their relative order.
    #[must_use]
    pub fn partition(lights: impl IntoIterator<Item = Light>) -> Vec<Self> {
        let mut collections: Vec<Self> = Vec::new();
        let mut index: HashMap<CollectionSpec, usize> = HashMap::new();

        for light in lights {
            let spec = K::spec(&light);
            if let Some(&i) = index.get(spec) {
                collections[i].lights.push(light);
            } else {
                index.insert(spec.clone(), collections.len());
                collections.push(Self {
                    spec: spec.clone(),
                    client: light.client().cloned(),
                    lights: vec![light],
                    kind: PhantomData,
                });
            }
        }
        collections
    }

    /// Returns the collection id.
    #[must_use]
    pub fn id(&self) -> &str {
        self.spec.id()
    }

    /// Returns the collection name.
    #[must_use]
    pub fn label(&self) -> &str {
        self.spec.name()
    }

    /// Returns `true` if any member light is on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.lights.iter().any(Light::is_on)
    }

    /// Returns the member lights.
    #[must_use]
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Returns the number of member lights.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lights.len()
    }

    /// Returns `true` if the collection has no member.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    /// Returns an iterator over the member lights.
    pub fn iter(&self) -> std::slice::Iter<'_, Light> {
        self.lights.iter()
    }
}

/// Partitions lights by group.
#[must_use]
pub fn as_groups(lights: impl IntoIterator<Item = Light>) -> Vec<Group> {
    Group::partition(lights)
}

/// Partitions lights by location.
#[must_use]
pub fn as_locations(lights: impl IntoIterator<Item = Light>) -> Vec<Location> {
    Location::partition(lights)
}

impl<K: CollectionKind> LightTarget for LightCollection<K> {
    type Output = ApiResults;

    fn id(&self) -> &str {
        self.spec.id()
    }

    fn label(&self) -> &str {
        self.spec.name()
    }

    fn is_on(&self) -> bool {
        self.lights.iter().any(Light::is_on)
    }

    fn selector(&self) -> Selector {
        K::selector(self.spec.id())
    }

    async fn send<C: Command + Sync>(&self, command: &C) -> Result<ApiResults> {
        match &self.client {
            Some(client) => client.send(Some(&self.selector()), command).await,
            None => Ok(ApiResults::new()),
        }
    }

    /// Lists the members again. The collection keeps its identity.
    async fn refresh(&mut self) -> Result<()> {
        let Some(client) = &self.client else {
            return Ok(());
        };
        self.lights = client.list_lights(Some(&self.selector())).await?;
        Ok(())
    }
}

impl From<&Group> for Selector {
    fn from(group: &Group) -> Self {
        group.selector()
    }
}

impl From<&Location> for Selector {
    fn from(location: &Location) -> Self {
        location.selector()
    }
}

impl<K> Clone for LightCollection<K> {
    fn clone(&self) -> Self {
        Self {
            spec: self.spec.clone(),
            lights: self.lights.clone(),
            client: self.client.clone(),
            kind: PhantomData,
        }
    }
}

impl<K> fmt::Debug for LightCollection<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LightCollection")
            .field("id", &self.spec.id())
            .field("label", &self.spec.name())
            .field("lights", &self.lights)
            .finish_non_exhaustive()
    }
}

impl<K> fmt::Display for LightCollection<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec.name())
    }
}

impl<'a, K> IntoIterator for &'a LightCollection<K> {
    type Item = &'a Light;
    type IntoIter = std::slice::Iter<'a, Light>;

    fn into_iter(self) -> Self::IntoIter {
        self.lights.iter()
    }
}

impl<K> IntoIterator for LightCollection<K> {
    type Item = Light;
    type IntoIter = std::vec::IntoIter<Light>;

    fn into_iter(self) -> Self::IntoIter {
        self.lights.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn light(id: &str, group: (&str, &str), location: (&str, &str)) -> Light {
        serde_json::from_value(json!({
            "id": id,
            "label": format!("Light {id}"),
            "group": {"id": group.0, "name": group.1},
            "location": {"id": location.0, "name": location.1},
        }))
        .unwrap()
    }

    fn ids(collection: &LightCollection<impl CollectionKind>) -> Vec<&str> {
        collection.iter().map(Light::id).collect()
    }

    #[test]
    fn groups_preserve_first_seen_order() {
        let lights = vec![
            light("a", ("g1", "G1"), ("l1", "Home")),
            light("c", ("g2", "G2"), ("l1", "Home")),
            light("b", ("g1", "G1"), ("l1", "Home")),
        ];

        let groups = as_groups(lights);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].id(), "g1");
        assert_eq!(groups[0].label(), "G1");
        assert_eq!(ids(&groups[0]), ["a", "b"]);
        assert_eq!(groups[1].id(), "g2");
        assert_eq!(ids(&groups[1]), ["c"]);
    }

    #[test]
    fn locations_partition_independently_of_groups() {
        let lights = vec![
            light("a", ("g1", "G1"), ("l1", "Home")),
            light("b", ("g2", "G2"), ("l1", "Home")),
            light("c", ("g2", "G2"), ("l2", "Office")),
        ];

        let locations = as_locations(lights);
        assert_eq!(locations.len(), 2);
        assert_eq!(ids(&locations[0]), ["a", "b"]);
        assert_eq!(locations[1].label(), "Office");
    }

    #[test]
    fn same_id_with_different_name_is_a_different_collection() {
        let lights = vec![
            light("a", ("g1", "Kitchen"), ("l1", "Home")),
            light("b", ("g1", "Renamed"), ("l1", "Home")),
        ];
        assert_eq!(as_groups(lights).len(), 2);
    }

    #[test]
    fn empty_input_yields_no_collection() {
        assert!(as_groups(Vec::new()).is_empty());
    }

    #[test]
    fn collection_selectors() {
        let lights = vec![light("a", ("g1", "G1"), ("l1", "Home"))];
        let group = &as_groups(lights.clone())[0];
        let location = &as_locations(lights)[0];
        assert_eq!(Selector::from(group).to_string(), "group_id:g1");
        assert_eq!(Selector::from(location).to_string(), "location_id:l1");
        assert!(!group.selector().is_single());
    }

    #[tokio::test]
    async fn detached_collection_answers_empty() {
        let mut groups = as_groups(vec![light("a", ("g1", "G1"), ("l1", "Home"))]);
        let group = &mut groups[0];

        let results = group.toggle_power(1.0).await.unwrap();
        assert!(results.is_empty());

        group.refresh().await.unwrap();
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn collection_is_on_when_any_member_is_on() {
        let mut lit: Light = serde_json::from_value(json!({
            "id": "b",
            "label": "Lamp",
            "power": "on",
            "group": {"id": "g1", "name": "G1"},
            "location": {"id": "l1", "name": "Home"},
        }))
        .unwrap();
        let dark = light("a", ("g1", "G1"), ("l1", "Home"));

        let groups = as_groups(vec![dark.clone()]);
        assert!(!LightTarget::is_on(&groups[0]));

        let groups = as_groups(vec![dark, lit.clone()]);
        let group = &groups[0];
        assert!(group.is_on());
        assert!(LightTarget::is_on(group));
        assert_eq!(LightTarget::id(group), "g1");
        assert_eq!(LightTarget::label(group), "G1");

        assert!(LightTarget::is_on(&lit));
        assert_eq!(LightTarget::id(&lit), "b");
        assert_eq!(LightTarget::label(&lit), "Lamp");

        lit = serde_json::from_value(json!({"id": "c", "label": "Off", "power": "off"})).unwrap();
        assert!(!LightTarget::is_on(&lit));
    }
}
