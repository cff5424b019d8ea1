//! Training instances and datasets.
//!
//! An `Instance` pairs an attribute vector with a class-value vector (one-hot,
//! or soft labels). A `Dataset` is a validated, non-empty set of instances
//! that all agree on both lengths.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::metrics::argmax;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    attributes: Vec<f64>,
    class_values: Vec<f64>,
}

impl Instance {
    pub fn new(attributes: Vec<f64>, class_values: Vec<f64>) -> Self {
        Self {
            attributes,
            class_values,
        }
    }

    /// Instance labelled with `class` as a one-hot vector of length `class_count`.
    pub fn one_hot(attributes: Vec<f64>, class: usize, class_count: usize) -> Result<Self> {
        if class >= class_count {
            return Err(Error::InvalidData(format!(
                "class {class} out of range for {class_count} classes"
            )));
        }
        let mut class_values = vec![0.0; class_count];
        class_values[class] = 1.0;
        Ok(Self::new(attributes, class_values))
    }

    #[inline]
    pub fn attributes(&self) -> &[f64] {
        &self.attributes
    }

    #[inline]
    pub fn class_values(&self) -> &[f64] {
        &self.class_values
    }

    /// Index of the largest class value (lowest index on ties).
    #[inline]
    pub fn label(&self) -> usize {
        argmax(self.class_values.iter().copied())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    instances: Vec<Instance>,
    attribute_count: usize,
    class_count: usize,
}

impl Dataset {
    pub fn from_instances(instances: Vec<Instance>) -> Result<Self> {
        let first = instances
            .first()
            .ok_or_else(|| Error::InvalidData("dataset must not be empty".to_owned()))?;

        let attribute_count = first.attributes.len();
        let class_count = first.class_values.len();
        if attribute_count == 0 {
            return Err(Error::InvalidData("attribute count must be > 0".to_owned()));
        }
        if class_count == 0 {
            return Err(Error::InvalidData("class count must be > 0".to_owned()));
        }

        for (i, instance) in instances.iter().enumerate() {
            if instance.attributes.len() != attribute_count {
                return Err(Error::InvalidData(format!(
                    "instance {i} has {} attributes, expected {attribute_count}",
                    instance.attributes.len()
                )));
            }
            if instance.class_values.len() != class_count {
                return Err(Error::InvalidData(format!(
                    "instance {i} has {} class values, expected {class_count}",
                    instance.class_values.len()
                )));
            }
        }

        Ok(Self {
            instances,
            attribute_count,
            class_count,
        })
    }

    /// Build a dataset from per-instance rows.
    pub fn from_rows(attributes: &[Vec<f64>], class_values: &[Vec<f64>]) -> Result<Self> {
        if attributes.len() != class_values.len() {
            return Err(Error::InvalidData(format!(
                "attributes/class values length mismatch: {} vs {}",
                attributes.len(),
                class_values.len()
            )));
        }

        let instances = attributes
            .iter()
            .zip(class_values)
            .map(|(x, y)| Instance::new(x.clone(), y.clone()))
            .collect();
        Self::from_instances(instances)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    #[inline]
    pub fn attribute_count(&self) -> usize {
        self.attribute_count
    }

    #[inline]
    pub fn class_count(&self) -> usize {
        self.class_count
    }

    #[inline]
    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Instance> {
        self.instances.iter()
    }

    /// Panics if `idx >= len`.
    #[inline]
    pub fn instance(&self, idx: usize) -> &Instance {
        &self.instances[idx]
    }

    /// Reorders the instances in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.instances.shuffle(rng);
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Instance;
    type IntoIter = std::slice::Iter<'a, Instance>;

    fn into_iter(self) -> Self::IntoIter {
        self.instances.iter()
    }
}
