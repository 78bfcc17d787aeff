//! Kangaroos that carry things in their pouches.
//!
//! Each kangaroo owns its pouch outright: a fresh kangaroo always starts
//! with its own empty `Vec`, and putting one kangaroo into another's pouch
//! moves it there. Two kangaroos can never end up sharing pouch storage.
//!
//! # Examples
//!
//! ```rust
//! use timekeep::kangaroo::{Kangaroo, PouchItem};
//!
//! let mut kanga = Kangaroo::new("Kanga");
//! let roo = Kangaroo::new("Roo");
//!
//! kanga.put_in_pouch("wallet");
//! kanga.put_in_pouch("car keys");
//! kanga.put_in_pouch(roo);
//!
//! assert_eq!(kanga.pouch_len(), 3);
//! assert_eq!(
//!     kanga.to_string(),
//!     "Kanga has pouch contents:\n    wallet\n    car keys\n    Roo"
//! );
//! ```

use std::fmt;

/// Something a kangaroo can carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PouchItem {
    /// Any labelled object.
    Object(String),
    /// Another kangaroo, owned by the pouch it sits in.
    Kangaroo(Kangaroo),
}

impl fmt::Display for PouchItem {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object(label) => formatter.write_str(label),
            Self::Kangaroo(kangaroo) => formatter.write_str(kangaroo.name()),
        }
    }
}

impl From<&str> for PouchItem {
    fn from(label: &str) -> Self {
        Self::Object(label.to_string())
    }
}

impl From<String> for PouchItem {
    fn from(label: String) -> Self {
        Self::Object(label)
    }
}

impl From<Kangaroo> for PouchItem {
    fn from(kangaroo: Kangaroo) -> Self {
        Self::Kangaroo(kangaroo)
    }
}

/// A named kangaroo with a pouch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kangaroo {
    name: String,
    pouch: Vec<PouchItem>,
}

impl Kangaroo {
    /// Creates a kangaroo with an empty pouch.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pouch: Vec::new(),
        }
    }

    /// The kangaroo's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The items currently carried, oldest first.
    #[must_use]
    pub fn pouch(&self) -> &[PouchItem] {
        &self.pouch
    }

    /// Number of items in the pouch.
    #[must_use]
    pub fn pouch_len(&self) -> usize {
        self.pouch.len()
    }

    /// Adds an item to the pouch.
    pub fn put_in_pouch(&mut self, item: impl Into<PouchItem>) {
        self.pouch.push(item.into());
    }
}

impl fmt::Display for Kangaroo {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} has pouch contents:", self.name)?;
        for item in &self.pouch {
            write!(formatter, "\n    {item}")?;
        }
        Ok(())
    }
}
