use crate::{
    error::ChoiceError,
    label::Labeler,
    list::{ChoiceList, IndexPolicy},
    persist::EntityIdentity,
    value::{ChoiceIndex, ChoiceValue},
    view::{ChoiceView, ViewPartition},
};
use indexmap::IndexMap;

/// Group-path analog: maps an entity to the label of the group it renders
/// under, or `None` for ungrouped.
pub type GroupFn<T> = Box<dyn Fn(&T) -> Option<String>>;

///
/// ObjectChoiceList
///
/// Base choice list over an in-memory entity collection. Owns the ordered
/// index → choice, index → value, and preferred/remaining view partitions;
/// `initialize` rebuilds all of them from a fresh collection.
///

pub struct ObjectChoiceList<T> {
    labeler: Labeler<T>,
    policy: IndexPolicy,
    preferred: Option<Box<dyn Fn(&T) -> bool>>,
    group_by: Option<GroupFn<T>>,
    choices: IndexMap<ChoiceIndex, T>,
    values: IndexMap<ChoiceIndex, ChoiceValue>,
    preferred_views: ViewPartition,
    remaining_views: ViewPartition,
}

impl<T: EntityIdentity> ObjectChoiceList<T> {
    pub fn new(
        entities: Vec<T>,
        labeler: Labeler<T>,
        policy: IndexPolicy,
        preferred: Option<Box<dyn Fn(&T) -> bool>>,
        group_by: Option<GroupFn<T>>,
    ) -> Result<Self, ChoiceError> {
        let mut list = Self::empty(labeler, policy, preferred, group_by);
        list.initialize(entities)?;

        Ok(list)
    }

    /// A list with no choices yet; callers re-`initialize` before use.
    pub(crate) fn empty(
        labeler: Labeler<T>,
        policy: IndexPolicy,
        preferred: Option<Box<dyn Fn(&T) -> bool>>,
        group_by: Option<GroupFn<T>>,
    ) -> Self {
        let (preferred_views, remaining_views) = if group_by.is_some() {
            (ViewPartition::grouped(), ViewPartition::grouped())
        } else {
            (ViewPartition::flat(), ViewPartition::flat())
        };

        Self {
            labeler,
            policy,
            preferred,
            group_by,
            choices: IndexMap::new(),
            values: IndexMap::new(),
            preferred_views,
            remaining_views,
        }
    }

    /// Rebuild every internal map and view partition from `entities`.
    pub fn initialize(&mut self, entities: Vec<T>) -> Result<(), ChoiceError> {
        self.choices = IndexMap::with_capacity(entities.len());
        self.values = IndexMap::with_capacity(entities.len());
        self.preferred_views = if self.group_by.is_some() {
            ViewPartition::grouped()
        } else {
            ViewPartition::flat()
        };
        self.remaining_views = self.preferred_views.clone();

        for (position, entity) in entities.into_iter().enumerate() {
            let index = self.policy.index_for(&entity, position);
            let value = self.policy.value_for(&entity, position);
            let label = self.labeler.label(&entity, index.as_str())?;

            let view = ChoiceView {
                index: index.clone(),
                value: value.clone(),
                label,
            };
            let group = self.group_by.as_ref().and_then(|group_by| group_by(&entity));
            let is_preferred = self.preferred.as_ref().is_some_and(|pred| pred(&entity));

            if is_preferred {
                self.preferred_views.push(group, view);
            } else {
                self.remaining_views.push(group, view);
            }

            self.values.insert(index.clone(), value);
            self.choices.insert(index, entity);
        }

        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    fn index_of(&self, choice: &T) -> Option<&ChoiceIndex>
    where
        T: PartialEq,
    {
        self.choices
            .iter()
            .find(|(_, candidate)| *candidate == choice)
            .map(|(index, _)| index)
    }
}

impl<T> ChoiceList<T> for ObjectChoiceList<T>
where
    T: EntityIdentity + Clone + PartialEq,
{
    fn choices(&self) -> Result<Vec<T>, ChoiceError> {
        Ok(self.choices.values().cloned().collect())
    }

    fn values(&self) -> Result<Vec<ChoiceValue>, ChoiceError> {
        Ok(self.values.values().cloned().collect())
    }

    fn preferred_views(&self) -> Result<ViewPartition, ChoiceError> {
        Ok(self.preferred_views.clone())
    }

    fn remaining_views(&self) -> Result<ViewPartition, ChoiceError> {
        Ok(self.remaining_views.clone())
    }

    fn choices_for_values(&self, values: &[ChoiceValue]) -> Result<Vec<T>, ChoiceError> {
        let found = values
            .iter()
            .filter_map(|wanted| {
                self.values
                    .iter()
                    .find(|(_, value)| *value == wanted)
                    .and_then(|(index, _)| self.choices.get(index))
            })
            .cloned()
            .collect();

        Ok(found)
    }

    fn values_for_choices(&self, choices: &[T]) -> Result<Vec<ChoiceValue>, ChoiceError> {
        let found = choices
            .iter()
            .filter_map(|choice| self.index_of(choice))
            .filter_map(|index| self.values.get(index))
            .cloned()
            .collect();

        Ok(found)
    }

    fn indices_for_choices(&self, choices: &[T]) -> Result<Vec<ChoiceIndex>, ChoiceError> {
        let found = choices
            .iter()
            .filter_map(|choice| self.index_of(choice))
            .cloned()
            .collect();

        Ok(found)
    }

    fn indices_for_values(&self, values: &[ChoiceValue]) -> Result<Vec<ChoiceIndex>, ChoiceError> {
        let found = values
            .iter()
            .filter_map(|wanted| {
                self.values
                    .iter()
                    .find(|(_, value)| *value == wanted)
                    .map(|(index, _)| index)
            })
            .cloned()
            .collect();

        Ok(found)
    }
}

impl<T> std::fmt::Debug for ObjectChoiceList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectChoiceList")
            .field("labeler", &self.labeler)
            .field("policy", &self.policy)
            .field("len", &self.choices.len())
            .finish_non_exhaustive()
    }
}
