use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
    net::SocketAddr,
};

use crate::error::*;
use crate::name::{ActiveNameSet, NameGenerator, Picker};

/// Which connection holds which display name.
///
/// Every method takes `&mut self`, so whoever owns the registry behind a lock
/// gets allocate-then-insert as one critical section.
#[derive(Debug)]
pub struct NameRegistry<C = SocketAddr> {
    generator: NameGenerator,
    active: HashSet<String>,
    assignments: HashMap<C, String>,
}

impl<C: Hash + Eq + Clone> NameRegistry<C> {
    pub fn new(generator: NameGenerator) -> Self {
        Self {
            generator,
            active: HashSet::new(),
            assignments: HashMap::new(),
        }
    }

    /// Allocate a fresh name for `conn` and claim it. A connection that already
    /// has a name keeps it.
    pub fn assign<P: Picker + ?Sized>(&mut self, conn: C, picker: &mut P) -> Result<String> {
        if let Some(name) = self.assignments.get(&conn) {
            return Ok(name.clone());
        }

        let name = self.generator.allocate(&self.active, picker)?;
        if !self.active.insert_if_absent(&name) {
            return Err(Error::ChatError(format!("`{}` was claimed twice", name)));
        }
        self.assignments.insert(conn, name.clone());

        Ok(name)
    }

    /// Drop the assignment of `conn`, returning the name it held
    pub fn release(&mut self, conn: &C) -> Option<String> {
        let name = self.assignments.remove(conn)?;
        self.generator.release(&mut self.active, &name);
        Some(name)
    }

    /// Switch `conn` to a name of its own choosing. Returns the previous name.
    pub fn rename(&mut self, conn: &C, requested: &str) -> Result<String> {
        let requested = requested.trim();
        if requested.is_empty() {
            return Err(Error::ChatError("name must not be empty".to_owned()));
        }
        let current = match self.assignments.get(conn) {
            Some(current) => current.clone(),
            None => return Err(Error::ChatError("connection has no name yet".to_owned())),
        };
        if current == requested {
            return Ok(current);
        }
        if !self.active.insert_if_absent(requested) {
            return Err(Error::NameTaken(requested.to_owned()));
        }

        self.generator.release(&mut self.active, &current);
        self.assignments.insert(conn.clone(), requested.to_owned());
        Ok(current)
    }

    pub fn name_of(&self, conn: &C) -> Option<&str> {
        self.assignments.get(conn).map(String::as_str)
    }

    /// Active names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.active.iter().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
